//! Error types for the RxAuth verification pipeline.
//!
//! Only failures to obtain or understand the dataset (and the configuration
//! pointing at it) are errors. `NotFound`, `Mismatch`, and `Authentic` are
//! ordinary outcomes carried by `VerificationResult`.

use thiserror::Error;

/// The unified error type for RxAuth.
#[derive(Debug, Error)]
pub enum RxAuthError {
    /// The dataset source is missing or could not be read.
    #[error("dataset unavailable at '{path}': {reason}")]
    DatasetUnavailable { path: String, reason: String },

    /// The dataset was read but is not a list of medication records.
    #[error("dataset malformed: {reason}")]
    DatasetMalformed { reason: String },

    /// A configuration file is missing, unreadable, or not valid TOML.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the RxAuth crates.
pub type RxAuthResult<T> = Result<T, RxAuthError>;
