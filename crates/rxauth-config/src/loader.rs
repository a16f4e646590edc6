//! Locating, reading, and overriding the RxAuth configuration.
//!
//! Resolution order:
//!
//! 1. Config file: the explicit path (`--config`), else `RXAUTH_CONFIG`,
//!    else `rxauth.toml` in the working directory if it exists, else
//!    built-in defaults.  A file that was named explicitly must exist.
//! 2. `RXAUTH_DATASET` replaces the dataset path from step 1.
//! 3. A command-line dataset path replaces everything (see
//!    [`RxAuthConfig::dataset_path`]).

use std::path::{Path, PathBuf};

use tracing::debug;

use rxauth_contracts::error::{RxAuthError, RxAuthResult};

use crate::settings::RxAuthConfig;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "RXAUTH_CONFIG";

/// Environment variable overriding the dataset path.
pub const DATASET_ENV: &str = "RXAUTH_DATASET";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "rxauth.toml";

impl RxAuthConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `RxAuthError::ConfigError` if the TOML is malformed or contains
    /// keys outside the schema.
    pub fn from_toml_str(s: &str) -> RxAuthResult<Self> {
        toml::from_str(s).map_err(|e| RxAuthError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })
    }

    /// Read and parse the file at `path`.
    ///
    /// A relative dataset path in the file is resolved against the file's
    /// directory.
    pub fn from_file(path: &Path) -> RxAuthResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RxAuthError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let mut config = Self::from_toml_str(&contents)?;

        if config.dataset.path.is_relative() {
            if let Some(dir) = path.parent() {
                config.dataset.path = dir.join(&config.dataset.path);
            }
        }

        debug!(path = %path.display(), dataset = %config.dataset.path.display(), "config file loaded");
        Ok(config)
    }

    /// Load configuration from the process environment and working directory.
    pub fn load(explicit: Option<&Path>) -> RxAuthResult<Self> {
        Self::load_with(explicit, |key| std::env::var(key).ok(), Path::new("."))
    }

    /// Load configuration with an injectable environment lookup and working
    /// directory.
    pub fn load_with<F>(explicit: Option<&Path>, env: F, working_dir: &Path) -> RxAuthResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let named = explicit
            .map(PathBuf::from)
            .or_else(|| env(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from));

        let mut config = match named {
            Some(path) => Self::from_file(&path)?,
            None => {
                let implicit = working_dir.join(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(&implicit)?
                } else {
                    debug!("no config file found; using defaults");
                    Self::default()
                }
            }
        };

        if let Some(dataset) = env(DATASET_ENV).filter(|v| !v.is_empty()) {
            debug!(dataset = %dataset, "dataset path overridden from environment");
            config.dataset.path = PathBuf::from(dataset);
        }

        Ok(config)
    }

    /// The dataset path to use, giving `cli_override` precedence.
    pub fn dataset_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(PathBuf::from)
            .unwrap_or_else(|| self.dataset.path.clone())
    }
}
