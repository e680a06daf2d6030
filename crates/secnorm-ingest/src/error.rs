//! Error types for the loader/repair/validator/extractor pipeline stage.

use thiserror::Error;

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors that can occur while loading, repairing, validating, or extracting
/// a single company-facts document.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the file off disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Strict JSON parsing failed and repair was not attempted or not
    /// applicable (e.g. the document parsed but had the wrong top-level
    /// shape).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Strict parsing failed and repair could not recover a valid document.
    #[error("unrecoverable truncated JSON")]
    Unrecoverable,

    /// The document failed top-level or datapoint shape validation in
    /// strict mode (or a datapoint's `val` was non-numeric, which is always
    /// a hard error regardless of partial mode).
    #[error("validation error: {0}")]
    Validation(String),
}
