//! Error types and handling for folio core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for folio core
#[derive(Error, Debug)]
pub enum Error {
    /// Content-related errors
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while validating portfolio content
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("Series '{series}' has {x_len} labels but {y_len} values")]
    SeriesLengthMismatch {
        series: String,
        x_len: usize,
        y_len: usize,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

/// The only recoverable render-time failure: a referenced local image
/// could not be read.
#[derive(Error, Debug)]
#[error("Image unavailable: {}: {reason}", path.display())]
pub struct AssetError {
    /// Path the lookup resolved to
    pub path: PathBuf,
    /// File name as it appears in the content
    pub file_name: String,
    /// Human-readable cause
    pub reason: String,
}
