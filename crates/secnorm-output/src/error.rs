//! Errors produced while accumulating, writing, or finalizing run outputs.

use thiserror::Error;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Errors that can occur while building the Parquet writer, appending
/// batches, finalizing the run's small tables, or serializing the manifest.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Building a Polars `DataFrame` or writing a Parquet batch failed.
    #[error("Parquet error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Creating an output file or directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the run manifest to JSON failed.
    #[error("manifest serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The facts writer was appended to or closed twice.
    #[error("facts writer already closed")]
    WriterAlreadyClosed,
}
