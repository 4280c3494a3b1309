use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Section key '{key}' appears in more than one column of page {page}")]
    DuplicateSectionKey { key: String, page: usize },
}
