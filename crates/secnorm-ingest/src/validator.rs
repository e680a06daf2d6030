//! Top-level document validation and value coercion (spec §4.2).

use crate::error::{IngestError, Result};
use secnorm_model::pad_cik;
use serde_json::{Map, Value};

/// The top-level fields every document must carry, already coerced.
pub struct TopLevel<'a> {
    /// 10-digit zero-padded CIK.
    pub cik: String,
    /// Company name.
    pub entity_name: &'a str,
    /// The `facts` object: taxonomy name → concept map.
    pub facts: &'a Map<String, Value>,
}

/// Validates and coerces the top-level shape of a company-facts document:
/// `cik` (integer or numeric string), `entityName` (non-empty string), and
/// `facts` (object) must all be present and well-shaped. This check always
/// raises regardless of partial mode — a malformed top level means there's
/// no company to attach facts to.
pub fn validate_top_level(doc: &Value) -> Result<TopLevel<'_>> {
    let obj = doc
        .as_object()
        .ok_or_else(|| IngestError::Validation("document is not a JSON object".to_string()))?;

    let cik_value = obj
        .get("cik")
        .ok_or_else(|| IngestError::Validation("missing required key 'cik'".to_string()))?;
    let cik = coerce_cik(cik_value)?;

    let entity_name = obj
        .get("entityName")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            IngestError::Validation("'entityName' is empty or not a string".to_string())
        })?;

    let facts = obj
        .get("facts")
        .and_then(Value::as_object)
        .ok_or_else(|| IngestError::Validation("'facts' must be an object".to_string()))?;

    Ok(TopLevel {
        cik,
        entity_name,
        facts,
    })
}

/// Coerces a `cik` JSON value to a padded 10-digit string. Accepts an
/// integer directly, or a numeric string (stripped of whitespace); any other
/// shape is a hard validation error.
fn coerce_cik(value: &Value) -> Result<String> {
    if let Some(n) = value.as_u64() {
        return Ok(pad_cik(&n.to_string()));
    }
    if let Some(s) = value.as_str() {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Ok(pad_cik(trimmed));
        }
    }
    Err(IngestError::Validation(format!(
        "'cik' must be an integer or numeric string, got {value}"
    )))
}

/// Coerces a datapoint's `val` field to `f64`. Non-numeric values are a hard
/// error even in partial mode (spec §4.2: a numeric error indicates
/// corruption distinct from truncation).
pub fn coerce_value(value: &Value) -> Result<f64> {
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IngestError::Validation(format!("'val' is not numeric: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_integer_cik() {
        let doc = json!({"cik": 320193, "entityName": "Apple Inc.", "facts": {}});
        let top = validate_top_level(&doc).unwrap();
        assert_eq!(top.cik, "0000320193");
    }

    #[test]
    fn accepts_numeric_string_cik() {
        let doc = json!({"cik": "320193", "entityName": "Apple Inc.", "facts": {}});
        let top = validate_top_level(&doc).unwrap();
        assert_eq!(top.cik, "0000320193");
    }

    #[test]
    fn rejects_non_numeric_cik() {
        let doc = json!({"cik": "abc", "entityName": "Apple Inc.", "facts": {}});
        assert!(validate_top_level(&doc).is_err());
    }

    #[test]
    fn rejects_empty_entity_name() {
        let doc = json!({"cik": 1, "entityName": "", "facts": {}});
        assert!(validate_top_level(&doc).is_err());
    }

    #[test]
    fn rejects_missing_facts() {
        let doc = json!({"cik": 1, "entityName": "X"});
        assert!(validate_top_level(&doc).is_err());
    }

    #[test]
    fn coerces_numeric_value() {
        assert_eq!(coerce_value(&json!(123.45)).unwrap(), 123.45);
        assert_eq!(coerce_value(&json!(100)).unwrap(), 100.0);
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert!(coerce_value(&json!("not a number")).unwrap_err().to_string().contains("not numeric"));
    }

    #[test]
    fn rejects_non_finite_value() {
        assert!(coerce_value(&json!(null)).is_err());
    }
}
