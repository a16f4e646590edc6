//! # rxauth-dataset
//!
//! Read-only medication dataset sources for RxAuth.
//!
//! This crate provides two implementations of
//! [`rxauth_core::traits::DatasetSource`]:
//!
//! - [`JsonFileDataset`]: a JSON file read afresh on every load.
//! - [`InMemoryDataset`]: a fixed record list.
//!
//! Both go through [`schema::parse_dataset`], which validates the document
//! shape with JSON Schema before decoding records.

pub mod json_file;
pub mod memory;
pub mod schema;

pub use json_file::JsonFileDataset;
pub use memory::InMemoryDataset;

// ── Tests ─────────────────────────────────────────────────────────────────────
