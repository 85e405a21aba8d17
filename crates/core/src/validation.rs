//! Required-field validation for client payloads.
//!
//! The check runs against the raw JSON body rather than a typed DTO so
//! that a field of the wrong JSON type produces a per-field message
//! instead of a deserialization failure.

use serde_json::Value;

/// The six required client fields, in the order errors are reported.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "raisonSociale",
    "adresseRue",
    "codePostal",
    "ville",
    "telephone",
    "courriel",
];

/// Validate that every required field is present, is a JSON string, and
/// is non-blank after trimming.
///
/// Not fail-fast: one message is collected per failing field, in
/// [`REQUIRED_FIELDS`] order, so the caller sees every problem in a
/// single response. An empty vec means the payload is valid.
pub fn validate_required_fields(data: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    for field in REQUIRED_FIELDS {
        let valid = matches!(data.get(field), Some(Value::String(s)) if !s.trim().is_empty());
        if !valid {
            errors.push(format!("The field '{field}' is required"));
        }
    }

    errors
}
