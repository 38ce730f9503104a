use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("language '{0}' not found")]
    NotFound(String),

    #[error("unknown support level '{0}' (expected base or aux)")]
    InvalidLevel(String),

    #[error("failed to read language database: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse language database: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
