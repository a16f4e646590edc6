//! Configuration schema for RxAuth.
//!
//! Every field has a default, so an empty TOML file (or no file at all) is a
//! valid configuration.
//!
//! Example:
//! ```toml
//! [dataset]
//! path = "data/medications.json"
//!
//! [logging]
//! filter = "info"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Dataset location used when nothing else names one.
pub const DEFAULT_DATASET_PATH: &str = "data/medications.json";

/// `tracing` filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// The top-level structure deserialized from a TOML config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RxAuthConfig {
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
}

/// Where the medication dataset lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// Path to the JSON dataset. Relative paths in a config file are
    /// resolved against the directory containing that file.
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive string, e.g. `"warn"` or `"rxauth_core=debug"`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
