//! scanner-qr - printable QR codes for a ticket-scanner page
//!
//! Builds the scanner URL of a WordPress shop running the ticketing plugin
//! and renders it as a black-on-white PNG that entrance staff can scan.
//!
//! # Example
//!
//! ```no_run
//! use scanner_qr::{Domain, ScannerQr};
//!
//! fn main() -> scanner_qr::Result<()> {
//!     let domain = Domain::new("example.de")?;
//!     let report = ScannerQr::default().generate(&domain)?;
//!
//!     // scanner-qr-example-de.png
//!     println!("{}", report.filename);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod qr;
pub mod scanner;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{LoggingOptions, ScannerQrConfig};
pub use generator::{GeneratedQr, ScannerQr};
pub use qr::{EncodedQr, QrDecoder, QrEncoder, QrPayload};
pub use scanner::Domain;
