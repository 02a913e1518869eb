use std::collections::HashSet;
use std::hash::Hash;

use crate::content::blog::{parse_articles, BLOG_JSON};
use crate::content::dropdowns::{DropdownKey, DROPDOWN_ITEMS};
use crate::content::errors::ContentError;
use crate::content::hiring::{AND_NEED_TO, HIRE_ME_FOR};
use crate::content::steps::WORKING_TOGETHER_STEPS;
use crate::content::words::{INTERESTS_WORDS, I_AM_WORDS};

fn non_empty<T>(list: &'static str, items: &[T]) -> Result<(), ContentError> {
    if items.is_empty() {
        return Err(ContentError::EmptyList(list));
    }
    Ok(())
}

fn unique_ids<I, T>(list: &'static str, ids: I) -> Result<(), ContentError>
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq + std::fmt::Debug,
{
    let mut seen = HashSet::new();
    for id in ids {
        let label = format!("{:?}", id);
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { list, id: label });
        }
    }
    Ok(())
}

/// Checks the static content: every list non-empty, ids unique, blog document parses.
pub fn validate() -> Result<(), ContentError> {
    non_empty("dropdown items", DROPDOWN_ITEMS)?;
    unique_ids("dropdown items", DROPDOWN_ITEMS.iter().map(|item| item.id))?;
    for key in DropdownKey::ALL {
        if !DROPDOWN_ITEMS.iter().any(|item| item.id == key) {
            return Err(ContentError::MissingDropdown(key.as_str()));
        }
    }

    non_empty("working together steps", WORKING_TOGETHER_STEPS)?;
    unique_ids("working together steps", WORKING_TOGETHER_STEPS.iter().map(|step| step.id))?;
    for step in WORKING_TOGETHER_STEPS {
        non_empty("step details", step.details)?;
    }

    non_empty("i am words", I_AM_WORDS)?;
    non_empty("interests words", INTERESTS_WORDS)?;
    non_empty("hire me for", HIRE_ME_FOR)?;
    non_empty("and need to", AND_NEED_TO)?;

    let articles = parse_articles(BLOG_JSON)?;
    log::debug!("Static content ok, {} blog articles", articles.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_content_is_valid() {
        validate().unwrap();
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let err = unique_ids("steps", [1, 2, 2, 3]).unwrap_err();
        match err {
            ContentError::DuplicateId { list, id } => {
                assert_eq!(list, "steps");
                assert_eq!(id, "2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_lists_are_reported() {
        let empty: [u32; 0] = [];
        assert!(matches!(
            non_empty("steps", &empty),
            Err(ContentError::EmptyList("steps"))
        ));
    }
}
