//! RxAuth: medicine authenticity verification CLI
//!
//! Hashes the serial number, manufacturer, and expiry date printed on a
//! package and compares the digest against the reference dataset.
//!
//! Usage:
//!   verify-medicine --serial HC12345 --manufacturer "Acme Pharma" --expiry 2025-12-31
//!   verify-medicine --serial HC12345 --manufacturer "Acme Pharma" --expiry 2025-12-31 --json
//!   verify-medicine --dataset ./other.json --serial ...

mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rxauth_config::RxAuthConfig;
use rxauth_contracts::{
    error::RxAuthResult,
    medication::MedicationClaim,
    verify::VerificationReport,
};
use rxauth_core::Verifier;
use rxauth_dataset::JsonFileDataset;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Verify medicine authenticity against a SHA-256 reference dataset.
#[derive(Parser)]
#[command(
    name = "verify-medicine",
    about = "Verify medicine authenticity against a SHA-256 reference dataset",
    long_about = "Computes SHA-256(serial|manufacturer|expiry) and compares it, together with\n\
                  the manufacturer and expiry date, to the first dataset record carrying\n\
                  the given serial number. All comparisons are exact and case-sensitive."
)]
struct Cli {
    /// Medicine serial number (e.g. HC12345).
    #[arg(long)]
    serial: String,

    /// Medicine manufacturer (case sensitive).
    #[arg(long)]
    manufacturer: String,

    /// Expiry date in YYYY-MM-DD format.
    #[arg(long)]
    expiry: String,

    /// Dataset file to check against. Overrides RXAUTH_DATASET and the config file.
    #[arg(long, value_name = "PATH")]
    dataset: Option<PathBuf>,

    /// TOML config file. Defaults to RXAUTH_CONFIG, then ./rxauth.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the full verification report as JSON.
    #[arg(long)]
    json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let config = match RxAuthConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Structured logging goes to stderr so stdout stays a single line.
    // RUST_LOG takes precedence over the configured filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let report = match run(&cli, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match output::report_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to encode report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", output::summary_line(&cli.serial, &report.result));
    }
}

// ── Verification ──────────────────────────────────────────────────────────────

fn run(cli: &Cli, config: &RxAuthConfig) -> RxAuthResult<VerificationReport> {
    let dataset_path = config.dataset_path(cli.dataset.as_deref());
    debug!(dataset = %dataset_path.display(), "using dataset");

    let verifier = Verifier::new(Box::new(JsonFileDataset::new(dataset_path)));
    let claim = MedicationClaim::new(
        cli.serial.as_str(),
        cli.manufacturer.as_str(),
        cli.expiry.as_str(),
    );

    verifier.verify_report(&claim)
}
