//! Verification outcomes and the report emitted for each check.
//!
//! `VerificationResult` is the three-way verdict. `VerificationReport` wraps
//! it with the context an operator needs to understand a single run: which
//! dataset was consulted, the digest that was computed, and which fields
//! disagreed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::medication::{MedicationClaim, MedicationRecord};

/// Unique identifier for a single verification run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(pub uuid::Uuid);

impl CheckId {
    /// Create a new, unique check ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of checking one claim against the dataset.
///
/// Only the first record whose serial number matches the claim is ever
/// consulted; both `Authentic` and `Mismatch` carry that record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "record", rename_all = "snake_case")]
pub enum VerificationResult {
    /// Manufacturer, expiry date, and stored hash all match the claim.
    Authentic(MedicationRecord),
    /// The serial number exists but at least one field or the hash differs.
    Mismatch(MedicationRecord),
    /// No record carries the claimed serial number.
    NotFound,
}

impl VerificationResult {
    pub fn is_authentic(&self) -> bool {
        matches!(self, VerificationResult::Authentic(_))
    }

    /// The matched record, if the serial number was found.
    pub fn record(&self) -> Option<&MedicationRecord> {
        match self {
            VerificationResult::Authentic(r) | VerificationResult::Mismatch(r) => Some(r),
            VerificationResult::NotFound => None,
        }
    }

    /// Short lowercase label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            VerificationResult::Authentic(_) => "authentic",
            VerificationResult::Mismatch(_) => "mismatch",
            VerificationResult::NotFound => "not_found",
        }
    }
}

/// A record field that can disagree with a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchedField {
    Manufacturer,
    ExpiryDate,
    Hash,
}

/// Everything known about one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub check_id: CheckId,
    /// Wall-clock time the check ran (UTC).
    pub checked_at: DateTime<Utc>,
    /// Human-readable description of the dataset source (usually a path).
    pub dataset: String,
    pub claim: MedicationClaim,
    /// SHA-256 of the claim's canonical string, lowercase hex.
    pub computed_digest: String,
    /// Fields of the matched record that disagree with the claim.
    /// Empty unless `result` is `Mismatch`.
    pub mismatched_fields: Vec<MismatchedField>,
    pub result: VerificationResult,
}
