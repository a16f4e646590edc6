//! # rxauth-config
//!
//! TOML configuration for the RxAuth verifier.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use rxauth_config::RxAuthConfig;
//!
//! let config = RxAuthConfig::load(None)?;
//! let dataset = config.dataset_path(cli.dataset.as_deref());
//! ```
//!
//! ## Precedence
//!
//! `--dataset` beats `RXAUTH_DATASET`, which beats the config file, which
//! beats the built-in default of `data/medications.json`.

pub mod loader;
pub mod settings;

pub use loader::{CONFIG_ENV, DATASET_ENV, DEFAULT_CONFIG_FILE};
pub use settings::{DatasetConfig, LoggingConfig, RxAuthConfig};

// ── Tests ─────────────────────────────────────────────────────────────────────
