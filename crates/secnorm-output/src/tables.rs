//! Row-type → Polars `DataFrame` conversions, one per output table (spec §6).

use polars::prelude::*;
use secnorm_model::{ConceptRow, EntityRow, FactRow, FilingRow, RagRow};

use crate::error::Result;

/// Builds the `entity_master` frame.
pub fn entity_master_frame(rows: &[EntityRow]) -> Result<DataFrame> {
    let cik: Vec<&str> = rows.iter().map(|r| r.cik.as_str()).collect();
    let entity_name: Vec<&str> = rows.iter().map(|r| r.entity_name.as_str()).collect();
    let last_seen_filing_date: Vec<&str> = rows
        .iter()
        .map(|r| r.last_seen_filing_date.as_str())
        .collect();
    let snapshot_date: Vec<&str> = rows.iter().map(|r| r.snapshot_date.as_str()).collect();
    let partial: Vec<bool> = rows.iter().map(|r| r.partial).collect();

    Ok(DataFrame::new(vec![
        Series::new("cik".into(), cik).into(),
        Series::new("entity_name".into(), entity_name).into(),
        Series::new("last_seen_filing_date".into(), last_seen_filing_date).into(),
        Series::new("snapshot_date".into(), snapshot_date).into(),
        Series::new("partial".into(), partial).into(),
    ])?)
}

/// Builds the `concepts` frame.
pub fn concepts_frame(rows: &[ConceptRow]) -> Result<DataFrame> {
    let taxonomy: Vec<&str> = rows.iter().map(|r| r.taxonomy.as_str()).collect();
    let concept: Vec<&str> = rows.iter().map(|r| r.concept.as_str()).collect();
    let label: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    let description: Vec<&str> = rows.iter().map(|r| r.description.as_str()).collect();

    Ok(DataFrame::new(vec![
        Series::new("taxonomy".into(), taxonomy).into(),
        Series::new("concept".into(), concept).into(),
        Series::new("label".into(), label).into(),
        Series::new("description".into(), description).into(),
    ])?)
}

/// Builds the `filings` frame.
pub fn filings_frame(rows: &[FilingRow]) -> Result<DataFrame> {
    let cik: Vec<&str> = rows.iter().map(|r| r.cik.as_str()).collect();
    let accession_number: Vec<&str> = rows.iter().map(|r| r.accession_number.as_str()).collect();
    let form: Vec<&str> = rows.iter().map(|r| r.form.as_str()).collect();
    let filed_date: Vec<&str> = rows.iter().map(|r| r.filed_date.as_str()).collect();

    Ok(DataFrame::new(vec![
        Series::new("cik".into(), cik).into(),
        Series::new("accession_number".into(), accession_number).into(),
        Series::new("form".into(), form).into(),
        Series::new("filed_date".into(), filed_date).into(),
    ])?)
}

/// Builds the `sec_facts_index` RAG frame.
pub fn rag_index_frame(rows: &[RagRow]) -> Result<DataFrame> {
    let cik: Vec<&str> = rows.iter().map(|r| r.cik.as_str()).collect();
    let entity_name: Vec<&str> = rows.iter().map(|r| r.entity_name.as_str()).collect();
    let taxonomy: Vec<&str> = rows.iter().map(|r| r.taxonomy.as_str()).collect();
    let concept: Vec<&str> = rows.iter().map(|r| r.concept.as_str()).collect();
    let label: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    let unit: Vec<&str> = rows.iter().map(|r| r.unit.as_str()).collect();
    let value: Vec<f64> = rows.iter().map(|r| r.value).collect();
    let end_date: Vec<&str> = rows.iter().map(|r| r.end_date.as_str()).collect();
    let start_date: Vec<&str> = rows.iter().map(|r| r.start_date.as_str()).collect();
    let period_type: Vec<&str> = rows.iter().map(|r| r.period_type.as_str()).collect();
    let period_key: Vec<&str> = rows.iter().map(|r| r.period_key.as_str()).collect();
    let fy: Vec<Option<i32>> = rows.iter().map(|r| r.fy).collect();
    let fp: Vec<&str> = rows.iter().map(|r| r.fp.as_str()).collect();
    let form: Vec<&str> = rows.iter().map(|r| r.form.as_str()).collect();
    let filed_date: Vec<&str> = rows.iter().map(|r| r.filed_date.as_str()).collect();
    let accession_number: Vec<&str> = rows.iter().map(|r| r.accession_number.as_str()).collect();
    let sentence: Vec<&str> = rows.iter().map(|r| r.sentence.as_str()).collect();

    Ok(DataFrame::new(vec![
        Series::new("cik".into(), cik).into(),
        Series::new("entity_name".into(), entity_name).into(),
        Series::new("taxonomy".into(), taxonomy).into(),
        Series::new("concept".into(), concept).into(),
        Series::new("label".into(), label).into(),
        Series::new("unit".into(), unit).into(),
        Series::new("value".into(), value).into(),
        Series::new("end_date".into(), end_date).into(),
        Series::new("start_date".into(), start_date).into(),
        Series::new("period_type".into(), period_type).into(),
        Series::new("period_key".into(), period_key).into(),
        Series::new("fy".into(), fy).into(),
        Series::new("fp".into(), fp).into(),
        Series::new("form".into(), form).into(),
        Series::new("filed_date".into(), filed_date).into(),
        Series::new("accession_number".into(), accession_number).into(),
        Series::new("sentence".into(), sentence).into(),
    ])?)
}

/// Builds one batch of the `facts` frame — the column order and types that
/// back every Parquet batch written by [`crate::writer::FactsWriter`].
pub fn facts_frame(rows: &[FactRow]) -> Result<DataFrame> {
    let cik: Vec<&str> = rows.iter().map(|r| r.cik.as_str()).collect();
    let taxonomy: Vec<&str> = rows.iter().map(|r| r.taxonomy.as_str()).collect();
    let concept: Vec<&str> = rows.iter().map(|r| r.concept.as_str()).collect();
    let unit: Vec<&str> = rows.iter().map(|r| r.unit.as_str()).collect();
    let value: Vec<f64> = rows.iter().map(|r| r.value).collect();
    let start_date: Vec<&str> = rows.iter().map(|r| r.start_date.as_str()).collect();
    let end_date: Vec<&str> = rows.iter().map(|r| r.end_date.as_str()).collect();
    let fy: Vec<Option<i32>> = rows.iter().map(|r| r.fy).collect();
    let fp: Vec<&str> = rows.iter().map(|r| r.fp.as_str()).collect();
    let form: Vec<&str> = rows.iter().map(|r| r.form.as_str()).collect();
    let filed_date: Vec<&str> = rows.iter().map(|r| r.filed_date.as_str()).collect();
    let accession_number: Vec<&str> = rows.iter().map(|r| r.accession_number.as_str()).collect();
    let frame: Vec<&str> = rows.iter().map(|r| r.frame.as_str()).collect();
    let period_type: Vec<&str> = rows.iter().map(|r| r.period_type.as_str()).collect();
    let period_key: Vec<&str> = rows.iter().map(|r| r.period_key.as_str()).collect();
    let revision_rank: Vec<i32> = rows.iter().map(|r| r.revision_rank).collect();
    let is_preferred: Vec<bool> = rows.iter().map(|r| r.is_preferred).collect();

    Ok(DataFrame::new(vec![
        Series::new("cik".into(), cik).into(),
        Series::new("taxonomy".into(), taxonomy).into(),
        Series::new("concept".into(), concept).into(),
        Series::new("unit".into(), unit).into(),
        Series::new("value".into(), value).into(),
        Series::new("start_date".into(), start_date).into(),
        Series::new("end_date".into(), end_date).into(),
        Series::new("fy".into(), fy).into(),
        Series::new("fp".into(), fp).into(),
        Series::new("form".into(), form).into(),
        Series::new("filed_date".into(), filed_date).into(),
        Series::new("accession_number".into(), accession_number).into(),
        Series::new("frame".into(), frame).into(),
        Series::new("period_type".into(), period_type).into(),
        Series::new("period_key".into(), period_key).into(),
        Series::new("revision_rank".into(), revision_rank).into(),
        Series::new("is_preferred".into(), is_preferred).into(),
    ])?)
}
