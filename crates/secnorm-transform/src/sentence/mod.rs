//! Natural-language sentence generation for preferred Tier-1 facts (spec §4.5).

use secnorm_model::{FactRow, RagRow, is_tier1};
use std::collections::BTreeMap;

/// Builds one [`RagRow`] per preferred, Tier-1 fact.
///
/// Facts that aren't `is_preferred`, or whose concept isn't in
/// [`secnorm_model::TIER1_CONCEPTS`], are skipped. Output order follows
/// `facts`' order.
pub fn build_rag_sentences(
    facts: &[FactRow],
    entity_name: &str,
    concepts: &BTreeMap<(String, String), (String, String)>,
) -> Vec<RagRow> {
    facts
        .iter()
        .filter(|f| f.is_preferred && is_tier1(&f.concept))
        .map(|f| {
            let label = concepts
                .get(&(f.taxonomy.clone(), f.concept.clone()))
                .map(|(label, _)| label.as_str())
                .filter(|label| !label.is_empty())
                .unwrap_or(&f.concept)
                .to_string();

            let sentence = render_sentence(f, entity_name, &label);

            RagRow {
                cik: f.cik.clone(),
                entity_name: entity_name.to_string(),
                taxonomy: f.taxonomy.clone(),
                concept: f.concept.clone(),
                label,
                unit: f.unit.clone(),
                value: f.value,
                end_date: f.end_date.clone(),
                start_date: f.start_date.clone(),
                period_type: f.period_type.clone(),
                period_key: f.period_key.clone(),
                fy: f.fy,
                fp: f.fp.clone(),
                form: f.form.clone(),
                filed_date: f.filed_date.clone(),
                accession_number: f.accession_number.clone(),
                sentence,
            }
        })
        .collect()
}

fn render_sentence(fact: &FactRow, entity_name: &str, label: &str) -> String {
    let value = format_value(fact.value);
    let period = period_phrase(fact);
    format!(
        "{entity_name} reported {label} = {value} {unit} {period} \
         (Form {form}, filed {filed_date}, accession {accession_number}).",
        unit = fact.unit,
        form = fact.form,
        filed_date = fact.filed_date,
        accession_number = fact.accession_number,
    )
}

fn period_phrase(fact: &FactRow) -> String {
    if fact.period_type == "duration" && !fact.start_date.is_empty() {
        format!("for period {} to {}", fact.start_date, fact.end_date)
    } else {
        format!("as of {}", fact.end_date)
    }
}

/// Formats a value with thousands separators: no decimal places when the
/// value is a whole number, two decimal places otherwise.
fn format_value(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e18 {
        group_thousands(&format!("{value:.0}"))
    } else {
        group_thousands(&format!("{value:.2}"))
    }
}

/// Inserts `,` every three digits in the integer part of a formatted number,
/// leaving a leading `-` and any fractional part untouched.
fn group_thousands(formatted: &str) -> String {
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (count, ch) in int_part.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_fact() -> FactRow {
        FactRow {
            cik: "0000320193".to_string(),
            taxonomy: "us-gaap".to_string(),
            concept: "Assets".to_string(),
            unit: "USD".to_string(),
            value: 352_755_000_000.0,
            start_date: String::new(),
            end_date: "2022-09-24".to_string(),
            fy: Some(2022),
            fp: "FY".to_string(),
            form: "10-K".to_string(),
            filed_date: "2022-10-28".to_string(),
            accession_number: "0000320193-22-000108".to_string(),
            frame: String::new(),
            period_type: "instant".to_string(),
            period_key: "2022-FY".to_string(),
            revision_rank: 1,
            is_preferred: true,
        }
    }

    #[test]
    fn instant_fact_sentence_uses_as_of_phrasing() {
        let concepts = BTreeMap::from([(
            ("us-gaap".to_string(), "Assets".to_string()),
            ("Assets".to_string(), "Total assets".to_string()),
        )]);
        let rows = build_rag_sentences(&[instant_fact()], "Apple Inc.", &concepts);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].sentence,
            "Apple Inc. reported Assets = 352,755,000,000 USD as of 2022-09-24 \
             (Form 10-K, filed 2022-10-28, accession 0000320193-22-000108)."
        );
    }

    #[test]
    fn duration_fact_sentence_uses_period_range_phrasing() {
        let mut fact = instant_fact();
        fact.concept = "NetIncomeLoss".to_string();
        fact.start_date = "2022-01-01".to_string();
        fact.period_type = "duration".to_string();
        fact.value = 99_803_000_000.0;

        let concepts = BTreeMap::new();
        let rows = build_rag_sentences(&[fact], "Apple Inc.", &concepts);
        assert!(rows[0].sentence.contains("for period 2022-01-01 to 2022-09-24"));
        // Falls back to the concept name when no label is registered.
        assert_eq!(rows[0].label, "NetIncomeLoss");
    }

    #[test]
    fn non_preferred_facts_are_excluded() {
        let mut fact = instant_fact();
        fact.is_preferred = false;
        let rows = build_rag_sentences(&[fact], "Apple Inc.", &BTreeMap::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn non_tier1_concepts_are_excluded() {
        let mut fact = instant_fact();
        fact.concept = "AccruedLiabilitiesCurrent".to_string();
        let rows = build_rag_sentences(&[fact], "Apple Inc.", &BTreeMap::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn fractional_value_formats_with_two_decimals() {
        assert_eq!(format_value(12.5), "12.50");
        assert_eq!(format_value(1_234.5), "1,234.50");
    }

    #[test]
    fn whole_value_formats_without_decimals() {
        assert_eq!(format_value(1_000_000.0), "1,000,000");
    }

    #[test]
    fn negative_value_groups_correctly() {
        assert_eq!(format_value(-1_234_567.0), "-1,234,567");
    }
}
