// src/error.rs
use thiserror::Error;
use vitae_schema::SchemaError;
use vitae_types::ColorError;

/// Everything that can go wrong outside of rendering itself: reading and
/// decoding input, and validating configuration.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid color: {0}")]
    Color(#[from] ColorError),
}

impl From<SchemaError> for RenderError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::Json(e) => RenderError::Json(e),
            other => RenderError::Config(other.to_string()),
        }
    }
}
