//! Output row types (spec §3).
//!
//! These mirror the five output tables exactly: `EntityRow` →
//! `entity_master`, `ConceptRow` → `concepts`, `FactRow` → `facts`,
//! `FilingRow` → `filings`, `RagRow` → `sec_facts_index`.

use serde::{Deserialize, Serialize};

/// One row per company (`entity_master` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRow {
    /// 10-digit zero-padded CIK.
    pub cik: String,
    /// Company name as reported in the filing.
    pub entity_name: String,
    /// Maximum `filed` date over the company's facts, empty if none.
    pub last_seen_filing_date: String,
    /// Date this pipeline run executed, ISO form.
    pub snapshot_date: String,
    /// True iff the input document was repaired or extracted in partial mode.
    pub partial: bool,
}

/// One row per unique `(taxonomy, concept)` pair (`concepts` dimension table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRow {
    /// XBRL namespace, e.g. `us-gaap`.
    pub taxonomy: String,
    /// Concept name within the taxonomy, e.g. `Assets`.
    pub concept: String,
    /// Human-readable label. Last-writer-wins across companies.
    pub label: String,
    /// Longer description. Last-writer-wins across companies.
    pub description: String,
}

/// One row per (company, concept, unit, period, filing) datapoint
/// (`facts` event table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRow {
    /// 10-digit zero-padded CIK.
    pub cik: String,
    /// XBRL namespace, e.g. `us-gaap`.
    pub taxonomy: String,
    /// Concept name within the taxonomy.
    pub concept: String,
    /// Unit of measure, e.g. `USD`, `shares`.
    pub unit: String,
    /// The reported value, coerced to a finite 64-bit float.
    pub value: f64,
    /// Start of the reporting period, empty for instant facts.
    pub start_date: String,
    /// End of the reporting period.
    pub end_date: String,
    /// Fiscal year, if reported.
    pub fy: Option<i32>,
    /// Fiscal period (`FY`, `Q1`, ...), empty if absent.
    pub fp: String,
    /// Filing type, e.g. `10-K`.
    pub form: String,
    /// Date the filing was submitted to EDGAR.
    pub filed_date: String,
    /// SEC accession number.
    pub accession_number: String,
    /// XBRL frame identifier, empty if absent.
    pub frame: String,
    /// `"instant"` or `"duration"`.
    pub period_type: String,
    /// Stable human-readable period label (see [`crate::period::compute_period_key`]).
    pub period_key: String,
    /// 1-based rank within this fact's dedup group; 1 is authoritative.
    pub revision_rank: i32,
    /// True iff `revision_rank == 1`.
    pub is_preferred: bool,
}

/// One row per unique `(cik, accession_number)` pair (`filings` table).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FilingRow {
    /// 10-digit zero-padded CIK.
    pub cik: String,
    /// SEC accession number.
    pub accession_number: String,
    /// Filing type, e.g. `10-K`.
    pub form: String,
    /// Date the filing was submitted to EDGAR.
    pub filed_date: String,
}

/// One row per preferred, Tier-1 fact (`sec_facts_index` RAG table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagRow {
    /// 10-digit zero-padded CIK.
    pub cik: String,
    /// Company name.
    pub entity_name: String,
    /// XBRL namespace.
    pub taxonomy: String,
    /// Concept name.
    pub concept: String,
    /// Label used in the rendered sentence.
    pub label: String,
    /// Unit of measure.
    pub unit: String,
    /// The reported value.
    pub value: f64,
    /// End of the reporting period.
    pub end_date: String,
    /// Start of the reporting period, empty for instant facts.
    pub start_date: String,
    /// `"instant"` or `"duration"`.
    pub period_type: String,
    /// Stable human-readable period label.
    pub period_key: String,
    /// Fiscal year, if reported.
    pub fy: Option<i32>,
    /// Fiscal period, empty if absent.
    pub fp: String,
    /// Filing type.
    pub form: String,
    /// Date the filing was submitted to EDGAR.
    pub filed_date: String,
    /// SEC accession number.
    pub accession_number: String,
    /// Rendered natural-language sentence.
    pub sentence: String,
}
