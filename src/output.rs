//! Confirmation output for a generation run

use crate::generator::GeneratedQr;
use serde_json::{Value, json};

/// Static hint printed after every successful run
pub const USAGE_HINT: &str = "Print the QR code and hand it to the staff at the entrance";

/// Human-readable confirmation lines
pub fn human_lines(report: &GeneratedQr) -> Vec<String> {
    vec![
        format!("✅ Scanner QR code saved as: {}", report.filename),
        format!("📱 Scanner URL: {}", report.url),
        format!("📋 Usage: {USAGE_HINT}"),
    ]
}

/// Structured representation for `--json`
pub fn report_value(report: &GeneratedQr) -> Value {
    json!({
        "filename": report.filename,
        "path": report.path.display().to_string(),
        "url": report.url,
        "version": report.version,
        "modules": report.modules,
        "image_size": report.image_size,
        "verified": report.verified,
    })
}

/// Two-line message shown when the command line is malformed
pub fn usage_lines(program: &str) -> [String; 2] {
    [
        format!("Usage: {program} YOUR-DOMAIN.DE"),
        format!("Example: {program} my-website.de"),
    ]
}
