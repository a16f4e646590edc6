use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const DATASET: &str = r#"[
  {
    "name": "Paracetamol 500mg",
    "manufacturer": "Acme Pharma",
    "serial_number": "HC12345",
    "expiry_date": "2025-12-31",
    "hash": "90f5c9b821553f001f8dfe5f657d4972479fecf7867a3334ad75cac6a781e1f8"
  }
]"#;

const AUTHENTIC_LINE: &str =
    "✅ Medicine is authentic: Paracetamol 500mg by Acme Pharma (batch HC12345).\n";

/// A command running in an empty directory with no RxAuth env vars set.
fn cmd(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("verify-medicine").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("RXAUTH_CONFIG")
        .env_remove("RXAUTH_DATASET")
        .env_remove("RUST_LOG");
    cmd
}

fn dataset_in(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("medications.json");
    std::fs::write(&path, contents).unwrap();
    path
}

fn shipped_dataset() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/medications.json")
}

#[test]
fn authentic_medicine() {
    let dir = TempDir::new().unwrap();
    let dataset = dataset_in(&dir, DATASET);
    cmd(&dir)
        .arg("--dataset")
        .arg(&dataset)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2025-12-31"])
        .assert()
        .success()
        .stdout(AUTHENTIC_LINE);
}

#[test]
fn wrong_expiry_is_counterfeit() {
    let dir = TempDir::new().unwrap();
    let dataset = dataset_in(&dir, DATASET);
    cmd(&dir)
        .arg("--dataset")
        .arg(&dataset)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2026-01-01"])
        .assert()
        .success()
        .stdout(contains("Potential counterfeit detected!"));
}

#[test]
fn lowercase_manufacturer_is_counterfeit() {
    let dir = TempDir::new().unwrap();
    let dataset = dataset_in(&dir, DATASET);
    cmd(&dir)
        .arg("--dataset")
        .arg(&dataset)
        .args(["--serial", "HC12345", "--manufacturer", "acme pharma", "--expiry", "2025-12-31"])
        .assert()
        .success()
        .stdout(contains("Potential counterfeit detected!"));
}

#[test]
fn unknown_serial() {
    let dir = TempDir::new().unwrap();
    let dataset = dataset_in(&dir, DATASET);
    cmd(&dir)
        .arg("--dataset")
        .arg(&dataset)
        .args(["--serial", "UNKNOWN", "--manufacturer", "X", "--expiry", "2025-01-01"])
        .assert()
        .success()
        .stdout("No record found for serial number 'UNKNOWN'.\n");
}

#[test]
fn missing_dataset_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2025-12-31"])
        .assert()
        .code(1)
        .stderr(contains("dataset unavailable"));
}

#[test]
fn malformed_dataset_fails() {
    let dir = TempDir::new().unwrap();
    let dataset = dataset_in(&dir, r#"{"medications": "nope"}"#);
    cmd(&dir)
        .arg("--dataset")
        .arg(&dataset)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2025-12-31"])
        .assert()
        .code(1)
        .stderr(contains("dataset malformed"));
}

#[test]
fn missing_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma"])
        .assert()
        .code(2)
        .stderr(contains("--expiry"));
}

#[test]
fn json_report() {
    let dir = TempDir::new().unwrap();
    let dataset = dataset_in(&dir, DATASET);
    let output = cmd(&dir)
        .arg("--dataset")
        .arg(&dataset)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2026-01-01"])
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["result"]["status"], "mismatch");
    assert_eq!(report["claim"]["expiry_date"], "2026-01-01");
    assert_eq!(
        report["mismatched_fields"],
        serde_json::json!(["expiry_date", "hash"])
    );
    assert_eq!(report["computed_digest"].as_str().unwrap().len(), 64);
}

#[test]
fn dataset_from_environment() {
    let dir = TempDir::new().unwrap();
    let dataset = dataset_in(&dir, DATASET);
    cmd(&dir)
        .env("RXAUTH_DATASET", &dataset)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2025-12-31"])
        .assert()
        .success()
        .stdout(AUTHENTIC_LINE);
}

#[test]
fn dataset_from_working_dir_config() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("ref")).unwrap();
    std::fs::write(dir.path().join("ref/meds.json"), DATASET).unwrap();
    std::fs::write(
        dir.path().join("rxauth.toml"),
        "[dataset]\npath = \"ref/meds.json\"\n",
    )
    .unwrap();

    cmd(&dir)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2025-12-31"])
        .assert()
        .success()
        .stdout(AUTHENTIC_LINE);
}

#[test]
fn bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[dataset\n").unwrap();

    cmd(&dir)
        .arg("--config")
        .arg(&config)
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2025-12-31"])
        .assert()
        .code(1)
        .stderr(contains("configuration error"));
}

// ── Shipped sample dataset ────────────────────────────────────────────────────

#[test]
fn shipped_dataset_authenticates_genuine_record() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--dataset")
        .arg(shipped_dataset())
        .args(["--serial", "HC67890", "--manufacturer", "Beta Labs", "--expiry", "2026-06-30"])
        .assert()
        .success()
        .stdout("✅ Medicine is authentic: Amoxicillin 250mg by Beta Labs (batch HC67890).\n");
}

/// The second HC12345 entry would verify, but only the first is consulted.
#[test]
fn shipped_dataset_duplicate_serial_uses_first_record() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--dataset")
        .arg(shipped_dataset())
        .args(["--serial", "HC12345", "--manufacturer", "Acme Pharma", "--expiry", "2027-12-31"])
        .assert()
        .success()
        .stdout(contains("Potential counterfeit detected!"));
}

/// HC55555's stored hash was computed over a different expiry date.
#[test]
fn shipped_dataset_tampered_hash_is_counterfeit() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--dataset")
        .arg(shipped_dataset())
        .args(["--serial", "HC55555", "--manufacturer", "Omega Generics", "--expiry", "2026-11-30"])
        .assert()
        .success()
        .stdout(contains("Potential counterfeit detected!"));
}
