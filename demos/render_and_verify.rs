//! Render a scanner QR code into a scratch directory and read it back
//!
//! Usage: cargo run --example render_and_verify -- example.de

use scanner_qr::{Domain, QrDecoder, ScannerQr};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let raw = std::env::args().nth(1).unwrap_or_else(|| "example.de".to_string());
    let domain = Domain::new(raw)?;

    let dir = std::env::temp_dir().join("scanner-qr-demo");
    std::fs::create_dir_all(&dir)?;

    let report = ScannerQr::default().generate_in(&dir, &domain)?;
    println!(
        "✓ Wrote {} (version {}, {} px)",
        report.path.display(),
        report.version,
        report.image_size
    );

    let decoded = QrDecoder::new().decode_file(&report.path)?;
    println!("  Decoded: {}", decoded.as_str().unwrap_or("<binary>"));
    anyhow::ensure!(
        decoded.as_str() == Some(report.url.as_str()),
        "decoded text differs from URL"
    );

    Ok(())
}
