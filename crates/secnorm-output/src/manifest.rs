//! Run manifest: a small JSON summary of counts and errors (spec §4.6, §6).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// One file that failed processing, recorded with its error message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailedFile {
    /// Path of the input file, as given on the command line or discovered
    /// by the glob.
    pub file: String,
    /// The error's display text.
    pub error: String,
}

/// Summary written to `<output-root>/processed/sec/manifest.json` at the end
/// of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Total input files discovered.
    pub total_files: usize,
    /// Files parsed strictly or repaired without error.
    pub processed_ok: usize,
    /// Files that required truncation repair.
    pub repaired_truncated: usize,
    /// Files skipped for being under the size floor.
    pub skipped_empty: usize,
    /// Files that raised an unrecoverable error.
    pub errors: usize,
    /// Wall-clock duration of the run, in seconds.
    pub elapsed_seconds: f64,
    /// Number of entity rows written.
    pub entities: usize,
    /// Number of unique `(taxonomy, concept)` pairs written.
    pub unique_concepts: usize,
    /// Number of unique filings written.
    pub unique_filings: usize,
    /// Number of RAG sentences written.
    pub rag_sentences: usize,
    /// One entry per file that raised an unrecoverable error.
    pub failed_files: Vec<FailedFile>,
}

impl Manifest {
    /// Serializes and writes this manifest as pretty-printed JSON to `path`,
    /// creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
