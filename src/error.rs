//! Error types for the NBA season-totals export CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stats response contained no result set named {name}")]
    MissingResultSet { name: String },

    #[error("row {row} has {actual} values but the result set has {expected} headers")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
