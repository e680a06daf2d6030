//! Exercises the streaming facts writer and the four finalized tables
//! against a temp directory.

use secnorm_model::{EntityRow, FactRow};
use secnorm_output::{FactsWriter, RunAccumulators};
use std::collections::{BTreeMap, BTreeSet};

fn fact() -> FactRow {
    FactRow {
        cik: "0000320193".to_string(),
        taxonomy: "us-gaap".to_string(),
        concept: "Assets".to_string(),
        unit: "USD".to_string(),
        value: 1.0,
        start_date: String::new(),
        end_date: "2022-09-24".to_string(),
        fy: Some(2022),
        fp: "FY".to_string(),
        form: "10-K".to_string(),
        filed_date: "2022-10-28".to_string(),
        accession_number: "A1".to_string(),
        frame: String::new(),
        period_type: "instant".to_string(),
        period_key: "2022-FY".to_string(),
        revision_rank: 1,
        is_preferred: true,
    }
}

#[test]
fn facts_writer_appends_batches_and_closes_cleanly() {
    let dir = std::env::temp_dir().join("secnorm_output_writer_test");
    std::fs::create_dir_all(&dir).unwrap();
    let facts_path = dir.join("facts.parquet");

    let mut writer = FactsWriter::create(&facts_path).unwrap();
    writer.write_batch(&[fact()]).unwrap();
    writer.write_batch(&[]).unwrap();
    writer.close().unwrap();
    // Closing twice must not error.
    writer.close().unwrap();

    assert!(facts_path.exists());
    assert!(std::fs::metadata(&facts_path).unwrap().len() > 0);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn accumulators_finalize_four_tables() {
    let dir = std::env::temp_dir().join("secnorm_output_finalize_test");
    let rag_dir = dir.join("rag");
    std::fs::create_dir_all(&dir).unwrap();

    let mut acc = RunAccumulators::new();
    acc.record_company(
        EntityRow {
            cik: "0000320193".to_string(),
            entity_name: "Apple Inc.".to_string(),
            last_seen_filing_date: "2022-10-28".to_string(),
            snapshot_date: "2026-07-29".to_string(),
            partial: false,
        },
        BTreeMap::from([((
            "us-gaap".to_string(),
            "Assets".to_string(),
        ), ("Assets".to_string(), "Total assets".to_string()))]),
        BTreeSet::from([(
            "0000320193".to_string(),
            "A1".to_string(),
            "10-K".to_string(),
            "2022-10-28".to_string(),
        )]),
        Vec::new(),
    );

    acc.finalize(&dir, &rag_dir).unwrap();

    assert!(dir.join("entity_master.parquet").exists());
    assert!(dir.join("concepts.parquet").exists());
    assert!(dir.join("filings.parquet").exists());
    assert!(rag_dir.join("sec_facts_index.parquet").exists());

    std::fs::remove_dir_all(&dir).ok();
}
