//! Error types for request building and response decoding.

use figdoc_core::{DecodeError, ExportFormat, Tagged};
use thiserror::Error;

/// Result type for figdoc-api operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("file decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("image export needs at least one node id")]
    EmptyNodeIds,

    #[error("image export scale must be a number, got {0}")]
    InvalidScale(f64),

    #[error("export format {} has no image export", .0.tag())]
    UnsupportedExportFormat(ExportFormat),

    #[error("server reported an error: {0}")]
    Server(String),
}
