//! Shared domain model for the SEC EDGAR company-facts normalization
//! pipeline: the five output row types, the CIK zero-pad helper, the Tier-1
//! concept set, the filing-form priority table, and period derivation.
//!
//! Every other crate in this workspace depends on this one; it depends on
//! nothing else in the workspace.
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cik;
pub mod concepts;
pub mod forms;
pub mod period;
pub mod rows;

pub use cik::pad_cik;
pub use concepts::{TIER1_CONCEPTS, is_tier1};
pub use forms::{DEFAULT_FORM_PRIORITY, form_priority};
pub use period::{PeriodType, compute_period_key};
pub use rows::{ConceptRow, EntityRow, FactRow, FilingRow, RagRow};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
