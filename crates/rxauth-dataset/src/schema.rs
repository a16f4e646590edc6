//! Structural validation and parsing of the medication dataset document.
//!
//! Parsing runs in two phases:
//!
//! 1. **Structural**: the JSON document is validated against
//!    [`dataset_schema`] using the `jsonschema` crate.  Every violation is
//!    collected so the operator sees the full failure set in one message.
//! 2. **Typed**: the validated document is deserialized into
//!    `MedicationRecord`s.
//!
//! Either phase failing yields `RxAuthError::DatasetMalformed`.

use serde_json::{json, Value};
use tracing::{debug, warn};

use rxauth_contracts::{
    error::{RxAuthError, RxAuthResult},
    medication::MedicationRecord,
};

/// Fields every record must carry, all as strings.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "name",
    "manufacturer",
    "serial_number",
    "expiry_date",
    "hash",
];

/// The JSON Schema a dataset document must satisfy.
///
/// An ordered array of objects, each with the five string fields in
/// [`REQUIRED_FIELDS`]. Additional properties are permitted and ignored.
pub fn dataset_schema() -> Value {
    let properties: serde_json::Map<String, Value> = REQUIRED_FIELDS
        .iter()
        .map(|field| (field.to_string(), json!({ "type": "string" })))
        .collect();

    json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": REQUIRED_FIELDS,
            "properties": properties
        }
    })
}

/// Check `document` against [`dataset_schema`].
///
/// Returns `DatasetMalformed` listing every violation with the JSON pointer
/// of the offending value.
pub fn validate_shape(document: &Value) -> RxAuthResult<()> {
    let validator = jsonschema::validator_for(&dataset_schema()).map_err(|e| {
        RxAuthError::DatasetMalformed {
            reason: format!("invalid dataset schema document: {e}"),
        }
    })?;

    let violations: Vec<String> = validator
        .iter_errors(document)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            let pointer = if pointer.is_empty() { "/".to_string() } else { pointer };
            format!("at {pointer}: {error}")
        })
        .collect();

    if violations.is_empty() {
        return Ok(());
    }

    warn!(violation_count = violations.len(), "dataset failed structural validation");
    Err(RxAuthError::DatasetMalformed {
        reason: violations.join("; "),
    })
}

/// Parse a dataset document into records, preserving document order.
pub fn parse_dataset(contents: &str) -> RxAuthResult<Vec<MedicationRecord>> {
    let document: Value =
        serde_json::from_str(contents).map_err(|e| RxAuthError::DatasetMalformed {
            reason: format!("not valid JSON: {e}"),
        })?;

    validate_shape(&document)?;

    let records: Vec<MedicationRecord> =
        serde_json::from_value(document).map_err(|e| RxAuthError::DatasetMalformed {
            reason: format!("failed to decode medication records: {e}"),
        })?;

    debug!(record_count = records.len(), "dataset parsed");
    Ok(records)
}
