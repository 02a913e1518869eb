use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::content::errors::ContentError;

pub const BLOG_JSON: &str = include_str!("../../content/blog.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogArticle {
    pub date: String,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub image_alt: String,
    #[serde(default = "default_href")]
    pub href: String,
}

fn default_href() -> String {
    "#".to_string()
}

static ARTICLES: Lazy<Vec<BlogArticle>> = Lazy::new(|| match parse_articles(BLOG_JSON) {
    Ok(articles) => articles,
    Err(e) => {
        log::error!("Failed to load blog articles: {}", e);
        Vec::new()
    }
});

pub fn parse_articles(json: &str) -> Result<Vec<BlogArticle>, ContentError> {
    let articles: Vec<BlogArticle> = serde_json::from_str(json)?;
    if articles.is_empty() {
        return Err(ContentError::EmptyList("blog articles"));
    }
    Ok(articles)
}

/// Articles shown in the blog carousel. Empty when the embedded document is broken.
pub fn articles() -> &'static [BlogArticle] {
    &ARTICLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_blog_document_parses() {
        let parsed = parse_articles(BLOG_JSON).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].title, "Sustainable Fashion Practices in 2023");
        assert_eq!(articles(), parsed.as_slice());
    }

    #[test]
    fn missing_href_defaults_to_hash() {
        let json = r#"[{"date":"d","title":"t","summary":"s","image":"/i.png","image_alt":"a"}]"#;
        let parsed = parse_articles(json).unwrap();
        assert_eq!(parsed[0].href, "#");
    }

    #[test]
    fn empty_document_is_rejected() {
        assert!(matches!(
            parse_articles("[]"),
            Err(ContentError::EmptyList("blog articles"))
        ));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(matches!(
            parse_articles("{not json"),
            Err(ContentError::BlogParse(_))
        ));
    }
}
