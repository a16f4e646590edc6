//! # rxauth-core
//!
//! The verification pipeline for RxAuth.
//!
//! This crate provides:
//! - The `DatasetSource` trait that record stores implement
//! - `compute_digest`, the canonical SHA-256 of a claim
//! - The `Verifier` that loads, digests, scans, and classifies
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rxauth_core::Verifier;
//!
//! let verifier = Verifier::new(Box::new(source));
//! let result = verifier.verify("HC12345", "Acme Pharma", "2025-12-31")?;
//! ```

pub mod digest;
pub mod traits;
pub mod verifier;

pub use digest::compute_digest;
pub use verifier::Verifier;
