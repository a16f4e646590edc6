//! The RxAuth verifier: load, digest, first-match scan, classify.
//!
//!   DatasetSource::load → compute_digest → scan by serial → classify
//!
//! Every call loads the dataset afresh. Only the first record whose serial
//! number equals the claim's is ever examined; later records with the same
//! serial are ignored even if they would have matched.

use chrono::Utc;
use tracing::{debug, info};

use rxauth_contracts::{
    error::RxAuthResult,
    medication::{MedicationClaim, MedicationRecord},
    verify::{CheckId, MismatchedField, VerificationReport, VerificationResult},
};

use crate::{digest::digest_claim, traits::DatasetSource};

/// Checks medication claims against a dataset source.
pub struct Verifier {
    source: Box<dyn DatasetSource>,
}

impl Verifier {
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Verify a serial number, manufacturer, and expiry date.
    ///
    /// Propagates dataset load failures unchanged.
    pub fn verify(
        &self,
        serial_number: &str,
        manufacturer: &str,
        expiry_date: &str,
    ) -> RxAuthResult<VerificationResult> {
        let claim = MedicationClaim::new(serial_number, manufacturer, expiry_date);
        Ok(self.verify_report(&claim)?.result)
    }

    /// Verify `claim` and return the full report for this run.
    pub fn verify_report(&self, claim: &MedicationClaim) -> RxAuthResult<VerificationReport> {
        let check_id = CheckId::new();
        let dataset = self.source.describe();

        let records = self.source.load()?;
        debug!(
            check_id = %check_id.0,
            dataset = %dataset,
            record_count = records.len(),
            "dataset loaded"
        );

        let computed_digest = digest_claim(claim);
        debug!(
            check_id = %check_id.0,
            serial_number = %claim.serial_number,
            digest = %computed_digest,
            "claim digest computed"
        );

        let result = classify(&records, claim, &computed_digest);
        let mismatched_fields = match &result {
            VerificationResult::Mismatch(record) => {
                mismatched_fields(record, claim, &computed_digest)
            }
            _ => Vec::new(),
        };

        info!(
            check_id = %check_id.0,
            serial_number = %claim.serial_number,
            result = result.label(),
            mismatched = ?mismatched_fields,
            "verification complete"
        );

        Ok(VerificationReport {
            check_id,
            checked_at: Utc::now(),
            dataset,
            claim: claim.clone(),
            computed_digest,
            mismatched_fields,
            result,
        })
    }
}

/// Classify `claim` against `records` given its precomputed digest.
///
/// Pure: no I/O and no logging. The first record with the claim's serial
/// number decides the outcome.
pub fn classify(
    records: &[MedicationRecord],
    claim: &MedicationClaim,
    computed_digest: &str,
) -> VerificationResult {
    let Some(record) = records
        .iter()
        .find(|r| r.serial_number == claim.serial_number)
    else {
        return VerificationResult::NotFound;
    };

    if mismatched_fields(record, claim, computed_digest).is_empty() {
        VerificationResult::Authentic(record.clone())
    } else {
        VerificationResult::Mismatch(record.clone())
    }
}

/// List the fields of `record` that disagree with `claim`, in a fixed order.
///
/// Comparison is exact and case-sensitive.
pub fn mismatched_fields(
    record: &MedicationRecord,
    claim: &MedicationClaim,
    computed_digest: &str,
) -> Vec<MismatchedField> {
    let mut fields = Vec::new();
    if record.manufacturer != claim.manufacturer {
        fields.push(MismatchedField::Manufacturer);
    }
    if record.expiry_date != claim.expiry_date {
        fields.push(MismatchedField::ExpiryDate);
    }
    if record.hash != computed_digest {
        fields.push(MismatchedField::Hash);
    }
    fields
}

// ── Tests ─────────────────────────────────────────────────────────────────────
