//! Error types for bookshelf operations.

use thiserror::Error;

/// Errors that can occur while loading, querying, or exporting the catalog.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("index {index} out of range (catalog holds {len} books)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to open link: {0}")]
    OpenLink(String),
}

pub type Result<T> = std::result::Result<T, Error>;
