//! In-memory dataset, for embedding a fixed record list.

use rxauth_contracts::{error::RxAuthResult, medication::MedicationRecord};
use rxauth_core::traits::DatasetSource;

use crate::schema::parse_dataset;

/// A `DatasetSource` that hands out a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    records: Vec<MedicationRecord>,
}

impl InMemoryDataset {
    pub fn new(records: Vec<MedicationRecord>) -> Self {
        Self { records }
    }

    /// Build from a JSON dataset document, with the same validation a file
    /// source applies.
    pub fn from_json_str(contents: &str) -> RxAuthResult<Self> {
        Ok(Self::new(parse_dataset(contents)?))
    }

    pub fn records(&self) -> &[MedicationRecord] {
        &self.records
    }
}

impl DatasetSource for InMemoryDataset {
    fn load(&self) -> RxAuthResult<Vec<MedicationRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}
