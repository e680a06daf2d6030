//! Error type for the driver crate (spec §4.7, §7).

use thiserror::Error;

/// Result type for driver operations.
pub(crate) type Result<T> = std::result::Result<T, RunError>;

/// Errors the driver itself can raise, distinct from the per-file
/// [`secnorm::ingest::IngestError`]s the loop catches and counts.
///
/// A [`RunError::Output`] means the shared facts writer itself failed —
/// unlike a bad input file, that isn't attributable to one company and isn't
/// safe to just skip past, so it aborts the whole run after closing the
/// writer.
#[derive(Debug, Error)]
pub(crate) enum RunError {
    /// Reading the input directory or writing the manifest failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A single file failed load, validation, or extraction.
    #[error(transparent)]
    Ingest(#[from] secnorm::ingest::IngestError),

    /// The streaming facts writer or a finalized table failed.
    #[error(transparent)]
    Output(#[from] secnorm::output::OutputError),
}
