//! Parsing of provider output into a [`CaseExtraction`]
//!
//! Providers frequently wrap JSON in a markdown fence or add a sentence of
//! preamble. The fenced block is preferred when present; anything that still
//! fails to parse as a JSON object is reported as an error so the caller can
//! fall back to the sentinel extraction.

use serde_json::{Map, Value};

use crate::model::CaseExtraction;
use crate::model::case::UNKNOWN_FIELD;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionParseError {
    #[error("Provider output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Provider output is not a JSON object")]
    NotAnObject,
}

/// Return the body of the first markdown code fence, or the trimmed input.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };

    // Skip the info string (e.g. ```json) but keep JSON that opens on the fence line
    let after_open = &trimmed[open + 3..];
    let info_len = after_open
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after_open.len());
    let body = &after_open[info_len..];

    match body.find("```") {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

/// Parse provider output into an extraction
pub fn parse_extraction(text: &str) -> Result<CaseExtraction, ExtractionParseError> {
    let value: Value = serde_json::from_str(strip_code_fences(text))?;
    let Value::Object(fields) = value else {
        return Err(ExtractionParseError::NotAnObject);
    };

    Ok(CaseExtraction {
        accused_name: required(&fields, "accusedName"),
        ipc_sections: sections(&fields),
        location: required(&fields, "location"),
        police_station: required(&fields, "policeStation"),
        offense_type: required(&fields, "offenseType"),
        age: optional(&fields, "age"),
        address: optional(&fields, "address"),
        fir_number: optional(&fields, "firNumber"),
        fir_date: optional(&fields, "firDate"),
        complainant: optional(&fields, "complainant"),
        property_value: optional(&fields, "propertyValue"),
        evidence: optional(&fields, "evidence"),
        arrest_status: optional(&fields, "arrestStatus"),
    })
}

/// Render a string or number as text; anything else is absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn required(fields: &Map<String, Value>, key: &str) -> String {
    optional(fields, key).unwrap_or_else(|| UNKNOWN_FIELD.to_string())
}

fn optional(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(scalar_text)
}

fn sections(fields: &Map<String, Value>) -> Vec<String> {
    match fields.get("ipcSections") {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    }
}
