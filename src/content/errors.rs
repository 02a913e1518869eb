use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content list is empty: {0}")]
    EmptyList(&'static str),
    #[error("Duplicate id in {list}: {id}")]
    DuplicateId { list: &'static str, id: String },
    #[error("No dropdown item for key: {0}")]
    MissingDropdown(&'static str),
    #[error("Invalid blog content: {0}")]
    BlogParse(#[from] serde_json::Error),
}
