//! Per-file ingest pipeline: load, repair, validate, extract.
//!
//! This crate turns one SEC EDGAR company-facts JSON file into an
//! [`extractor::ExtractionResult`]. Nothing here touches the filesystem
//! beyond [`loader::load_path`], and nothing here writes output — that's
//! `secnorm-output`'s job.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extractor;
pub mod loader;
pub mod repair;
pub mod validator;

pub use error::{IngestError, Result};
pub use extractor::{ExtractionResult, extract};
pub use loader::{LoadOutcome, MIN_FILE_SIZE_BYTES, load_path};
pub use repair::{Repaired, repair_truncated};
pub use validator::{TopLevel, coerce_value, validate_top_level};
