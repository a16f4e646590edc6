//! # rxauth-contracts
//!
//! Shared types for the RxAuth medicine verifier.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod error;
pub mod medication;
pub mod verify;
