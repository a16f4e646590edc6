//! Medication records and the claims checked against them.

use serde::{Deserialize, Serialize};

/// One medication entry in the reference dataset.
///
/// For genuine records `hash` equals the SHA-256 (lowercase hex) of
/// `"{serial_number}|{manufacturer}|{expiry_date}"`. Serial numbers are the
/// lookup key but are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRecord {
    /// Display name of the medicine (e.g. "Paracetamol 500mg").
    pub name: String,
    /// Manufacturer name, compared case-sensitively.
    pub manufacturer: String,
    /// Serial / batch number printed on the packaging.
    pub serial_number: String,
    /// Expiry date as printed, `YYYY-MM-DD`. Never parsed or normalized.
    pub expiry_date: String,
    /// Precomputed lowercase hex SHA-256 digest.
    pub hash: String,
}

/// The details a caller read off a package and wants verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationClaim {
    pub serial_number: String,
    pub manufacturer: String,
    pub expiry_date: String,
}

impl MedicationClaim {
    pub fn new(
        serial_number: impl Into<String>,
        manufacturer: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            manufacturer: manufacturer.into(),
            expiry_date: expiry_date.into(),
        }
    }

    /// The claim a genuine `record` would produce.
    pub fn from_record(record: &MedicationRecord) -> Self {
        Self::new(
            record.serial_number.clone(),
            record.manufacturer.clone(),
            record.expiry_date.clone(),
        )
    }
}
