//! The seam between the verifier and wherever medication records live.

use rxauth_contracts::{error::RxAuthResult, medication::MedicationRecord};

/// A read-only source of medication records.
///
/// The verifier calls `load()` once per verification and never caches the
/// result, so every check sees the source as it is at that moment.
/// Implementations must return records in source order; the verifier's
/// first-match scan depends on it.
pub trait DatasetSource: Send + Sync {
    /// Read every record from the source.
    ///
    /// Returns `RxAuthError::DatasetUnavailable` when the source cannot be
    /// reached or read, and `RxAuthError::DatasetMalformed` when its content
    /// is not a list of medication records.
    fn load(&self) -> RxAuthResult<Vec<MedicationRecord>>;

    /// Describe the source for logs and reports, e.g. a file path.
    fn describe(&self) -> String;
}
