//! Read-only JSON file dataset.

use std::path::{Path, PathBuf};

use tracing::debug;

use rxauth_contracts::{
    error::{RxAuthError, RxAuthResult},
    medication::MedicationRecord,
};
use rxauth_core::traits::DatasetSource;

use crate::schema::parse_dataset;

/// A `DatasetSource` backed by a JSON file on disk.
///
/// The file is opened and parsed on every `load()`; nothing is cached and the
/// file is never written.
///
/// ```rust,ignore
/// use rxauth_dataset::JsonFileDataset;
///
/// let source = JsonFileDataset::new("data/medications.json");
/// let records = source.load()?;
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileDataset {
    path: PathBuf,
}

impl JsonFileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for JsonFileDataset {
    /// Read and parse the file.
    ///
    /// Returns `DatasetUnavailable` if the file cannot be read (missing,
    /// permission denied, a directory, not UTF-8) and `DatasetMalformed` if
    /// its contents are not a valid dataset document.
    fn load(&self) -> RxAuthResult<Vec<MedicationRecord>> {
        debug!(path = %self.path.display(), "reading dataset file");

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| RxAuthError::DatasetUnavailable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        parse_dataset(&contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
