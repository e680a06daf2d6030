//! Columnar output: four in-memory accumulated tables, one streamed table,
//! and the run manifest.
//!
//! Nothing here decides *what* gets written — that's `secnorm-ingest` and
//! `secnorm-transform`'s job. This crate only owns table shapes, the
//! Parquet encoding, and the manifest format.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod manifest;
pub mod tables;
pub mod writer;

pub use error::{OutputError, Result};
pub use manifest::{FailedFile, Manifest};
pub use writer::{FactsWriter, RunAccumulators, facts_output_path};
