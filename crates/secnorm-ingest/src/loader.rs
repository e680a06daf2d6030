//! Filesystem loading with a size floor and repair fallback (spec §4.1).

use crate::error::{IngestError, Result};
use crate::repair::repair_truncated;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Files smaller than this are classified [`LoadOutcome::SkippedEmpty`]
/// without attempting to parse them — a known SEC EDGAR artifact.
pub const MIN_FILE_SIZE_BYTES: u64 = 100;

/// Result of attempting to load one input document.
pub enum LoadOutcome {
    /// The file was under the size floor; nothing was read.
    SkippedEmpty,
    /// The file was read and parsed, strictly or via repair.
    Loaded {
        /// The parsed document.
        doc: Value,
        /// True iff strict parsing failed and repair recovered it.
        partial: bool,
        /// Set when `partial` is true: the fraction of the file's bytes the
        /// repair recovered, for progress logging.
        recovered_fraction: Option<f64>,
    },
}

/// Loads and parses a single company-facts document from disk.
///
/// Returns [`LoadOutcome::SkippedEmpty`] for files under
/// [`MIN_FILE_SIZE_BYTES`]. Otherwise attempts strict parsing first; on
/// failure, hands the raw bytes to [`repair_truncated`]. A failed repair
/// propagates as [`IngestError::Unrecoverable`].
pub fn load_path(path: &Path) -> Result<LoadOutcome> {
    let metadata = fs::metadata(path)?;
    if metadata.len() < MIN_FILE_SIZE_BYTES {
        return Ok(LoadOutcome::SkippedEmpty);
    }

    let raw = fs::read(path)?;

    match serde_json::from_slice::<Value>(&raw) {
        Ok(doc) => Ok(LoadOutcome::Loaded {
            doc,
            partial: false,
            recovered_fraction: None,
        }),
        Err(_) => match repair_truncated(&raw) {
            Some(repaired) => Ok(LoadOutcome::Loaded {
                doc: repaired.doc,
                partial: true,
                recovered_fraction: Some(repaired.recovered_fraction()),
            }),
            None => Err(IngestError::Unrecoverable),
        },
    }
}
