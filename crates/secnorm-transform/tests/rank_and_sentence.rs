//! Ranking feeding directly into sentence generation, as the driver chains them.

use secnorm_model::FactRow;
use secnorm_transform::{build_rag_sentences, rank};
use std::collections::BTreeMap;

fn fact(form: &str, filed_date: &str, value: f64) -> FactRow {
    FactRow {
        cik: "0000320193".to_string(),
        taxonomy: "us-gaap".to_string(),
        concept: "Assets".to_string(),
        unit: "USD".to_string(),
        value,
        start_date: String::new(),
        end_date: "2022-09-24".to_string(),
        fy: Some(2022),
        fp: "FY".to_string(),
        form: form.to_string(),
        filed_date: filed_date.to_string(),
        accession_number: format!("{filed_date}-{form}"),
        frame: String::new(),
        period_type: "instant".to_string(),
        period_key: "2022-FY".to_string(),
        revision_rank: 0,
        is_preferred: false,
    }
}

#[test]
fn only_the_ranked_preferred_revision_produces_a_sentence() {
    let mut facts = vec![
        fact("10-Q", "2022-07-01", 100.0),
        fact("10-K", "2022-10-28", 200.0),
    ];
    rank(&mut facts);

    let concepts = BTreeMap::from([(
        ("us-gaap".to_string(), "Assets".to_string()),
        ("Assets".to_string(), "Total assets".to_string()),
    )]);
    let rows = build_rag_sentences(&facts, "Apple Inc.", &concepts);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value, 200.0);
    assert!(rows[0].sentence.contains("Apple Inc. reported Assets = 200"));
}
