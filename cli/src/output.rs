//! Rendering verification outcomes for the terminal.

use rxauth_contracts::verify::{VerificationReport, VerificationResult};

/// The single human-readable line printed for a verification.
pub fn summary_line(serial_number: &str, result: &VerificationResult) -> String {
    match result {
        VerificationResult::NotFound => {
            format!("No record found for serial number '{serial_number}'.")
        }
        VerificationResult::Authentic(record) => format!(
            "✅ Medicine is authentic: {} by {} (batch {}).",
            record.name, record.manufacturer, record.serial_number
        ),
        VerificationResult::Mismatch(_) => {
            "⚠️ Potential counterfeit detected! Provided details do not match the expected hash."
                .to_string()
        }
    }
}

/// The full report as pretty-printed JSON.
pub fn report_json(report: &VerificationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
