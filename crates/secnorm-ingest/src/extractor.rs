//! Taxonomy → concept → unit → datapoint tree walk (spec §4.3).

use crate::error::{IngestError, Result};
use crate::validator::{TopLevel, coerce_value};
use secnorm_model::{FactRow, PeriodType, compute_period_key};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Required fields on every datapoint object.
const REQUIRED_DATAPOINT_FIELDS: &[&str] = &["end", "val", "accn", "fy", "fp", "form", "filed"];

/// The three accumulators an extraction pass produces for one company,
/// plus the flat fact sequence in input-traversal order.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    /// One row per accepted datapoint, in taxonomy → concept → unit →
    /// datapoint traversal order.
    pub facts: Vec<FactRow>,
    /// `(taxonomy, concept) → (label, description)`, last-writer-wins.
    pub concepts: BTreeMap<(String, String), (String, String)>,
    /// `(cik, accession_number, form, filed_date)`, deduplicated.
    pub filings: BTreeSet<(String, String, String, String)>,
}

/// Walks `top.facts` and extracts facts, concepts, and filings.
///
/// In strict mode (`partial = false`), any shape error below the top level —
/// a non-object taxonomy or concept, a missing or non-object `units`, a
/// non-array datapoint list, or a datapoint missing a required field —
/// raises. In partial mode, the same errors cause that subtree to be
/// skipped silently (repaired documents routinely have half-formed trailing
/// subtrees). A non-numeric `val` is always a hard error, in both modes.
pub fn extract(top: &TopLevel<'_>, partial: bool) -> Result<ExtractionResult> {
    let mut result = ExtractionResult::default();

    for (taxonomy, taxonomy_value) in top.facts {
        let Some(concepts) = taxonomy_value.as_object() else {
            if partial {
                continue;
            }
            return Err(IngestError::Validation(format!(
                "taxonomy '{taxonomy}' must be an object"
            )));
        };

        for (concept_name, concept_value) in concepts {
            let Some(concept_obj) = concept_value.as_object() else {
                if partial {
                    continue;
                }
                return Err(IngestError::Validation(format!(
                    "concept '{taxonomy}.{concept_name}' must be an object"
                )));
            };

            let label = concept_obj
                .get("label")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            let description = concept_obj
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            result
                .concepts
                .insert((taxonomy.clone(), concept_name.clone()), (label, description));

            let units = match concept_obj.get("units") {
                Some(units) => units,
                None => {
                    if partial {
                        continue;
                    }
                    return Err(IngestError::Validation(format!(
                        "concept '{taxonomy}.{concept_name}' has no 'units' key"
                    )));
                }
            };
            let Some(units) = units.as_object() else {
                if partial {
                    continue;
                }
                return Err(IngestError::Validation(format!(
                    "concept '{taxonomy}.{concept_name}' units must be an object"
                )));
            };

            for (unit_name, datapoints) in units {
                let Some(datapoints) = datapoints.as_array() else {
                    if partial {
                        continue;
                    }
                    return Err(IngestError::Validation(format!(
                        "'{taxonomy}.{concept_name}.{unit_name}' must be an array"
                    )));
                };

                for dp in datapoints {
                    let Some(row) = extract_datapoint(
                        top.cik.clone(),
                        taxonomy,
                        concept_name,
                        unit_name,
                        dp,
                        partial,
                    )?
                    else {
                        continue;
                    };

                    result.filings.insert((
                        row.cik.clone(),
                        row.accession_number.clone(),
                        row.form.clone(),
                        row.filed_date.clone(),
                    ));
                    result.facts.push(row);
                }
            }
        }
    }

    Ok(result)
}

/// Extracts one datapoint into a [`FactRow`]. Returns `Ok(None)` when the
/// datapoint is skipped in partial mode for missing required fields.
fn extract_datapoint(
    cik: String,
    taxonomy: &str,
    concept: &str,
    unit: &str,
    dp: &Value,
    partial: bool,
) -> Result<Option<FactRow>> {
    let Some(obj) = dp.as_object() else {
        if partial {
            return Ok(None);
        }
        return Err(IngestError::Validation(format!(
            "'{taxonomy}.{concept}.{unit}' datapoint must be an object"
        )));
    };

    if partial && !has_required_fields(obj) {
        return Ok(None);
    }
    if !partial {
        require_fields(obj, taxonomy, concept, unit)?;
    }

    let start_date = obj
        .get("start")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let end_date = obj
        .get("end")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let fy = obj.get("fy").and_then(Value::as_i64).map(|v| v as i32);
    let fp = obj
        .get("fp")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let form = obj
        .get("form")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let filed_date = obj
        .get("filed")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let accession_number = obj
        .get("accn")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let frame = obj
        .get("frame")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    // Non-numeric `val` is a hard error even in partial mode.
    let value = coerce_value(obj.get("val").unwrap_or(&Value::Null))?;

    let period_type = PeriodType::from_start_date(&start_date);
    let period_key = compute_period_key(fy, &fp, &start_date, &end_date);

    Ok(Some(FactRow {
        cik,
        taxonomy: taxonomy.to_string(),
        concept: concept.to_string(),
        unit: unit.to_string(),
        value,
        start_date,
        end_date,
        fy,
        fp,
        form,
        filed_date,
        accession_number,
        frame,
        period_type: period_type.as_str().to_string(),
        period_key,
        revision_rank: 0,
        is_preferred: false,
    }))
}

fn has_required_fields(obj: &Map<String, Value>) -> bool {
    REQUIRED_DATAPOINT_FIELDS
        .iter()
        .all(|field| obj.contains_key(*field))
}

fn require_fields(
    obj: &Map<String, Value>,
    taxonomy: &str,
    concept: &str,
    unit: &str,
) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_DATAPOINT_FIELDS
        .iter()
        .filter(|field| !obj.contains_key(**field))
        .copied()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::Validation(format!(
            "'{taxonomy}.{concept}.{unit}' datapoint missing fields: {missing:?}"
        )))
    }
}
