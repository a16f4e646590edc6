//! Canonical digest of a medication claim.
//!
//! Hash input layout: `serial_number`, `manufacturer`, and `expiry_date`
//! joined with `|`, encoded as UTF-8, hashed once with SHA-256. Inputs are
//! used verbatim: no trimming, no case folding, no date parsing.

use sha2::{Digest, Sha256};

use rxauth_contracts::medication::MedicationClaim;

/// Separator placed between fields of the canonical string.
pub const FIELD_SEPARATOR: char = '|';

/// Build the canonical string `serial|manufacturer|expiry`.
pub fn canonical_string(serial_number: &str, manufacturer: &str, expiry_date: &str) -> String {
    format!(
        "{serial_number}{FIELD_SEPARATOR}{manufacturer}{FIELD_SEPARATOR}{expiry_date}"
    )
}

/// Compute the SHA-256 digest of the canonical string.
///
/// Returns a lowercase 64-character hex string.
pub fn compute_digest(serial_number: &str, manufacturer: &str, expiry_date: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_string(serial_number, manufacturer, expiry_date).as_bytes());
    hex::encode(hasher.finalize())
}

/// `compute_digest` over the fields of a claim.
pub fn digest_claim(claim: &MedicationClaim) -> String {
    compute_digest(&claim.serial_number, &claim.manufacturer, &claim.expiry_date)
}
