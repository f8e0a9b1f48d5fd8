//! One-shot scanner QR generation

use crate::error::{Error, Result};
use crate::qr::{QrDecoder, QrEncoder};
use crate::scanner::Domain;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of a single generation run
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQr {
    /// File name derived from the domain
    pub filename: String,
    /// Location the image was written to
    pub path: PathBuf,
    /// Scanner URL encoded in the image
    pub url: String,
    /// Symbol version the encoder settled on
    pub version: i16,
    /// Modules per side of the symbol
    pub modules: usize,
    /// Side length of the written image in pixels
    pub image_size: u32,
    /// Whether the written file was decoded and compared against `url`
    pub verified: bool,
}

/// Builds scanner URLs and writes them out as QR images
pub struct ScannerQr {
    encoder: QrEncoder,
    verify: bool,
}

impl ScannerQr {
    /// Create a generator using the fixed scanner-code settings
    pub fn new() -> Self {
        Self {
            encoder: QrEncoder::new(),
            verify: false,
        }
    }

    /// Decode every written image and fail if it does not read back as the URL
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Write the QR image for `domain` into the current working directory
    pub fn generate(&self, domain: &Domain) -> Result<GeneratedQr> {
        self.generate_in(Path::new("."), domain)
    }

    /// Write the QR image for `domain` into `dir`, replacing any previous file
    pub fn generate_in(&self, dir: &Path, domain: &Domain) -> Result<GeneratedQr> {
        let url = domain.scanner_url();
        let encoded = self.encoder.encode_string(&url)?;

        let filename = domain.output_filename();
        let path = dir.join(&filename);
        encoded.image.save(&path)?;

        tracing::debug!(
            domain = %domain,
            path = %path.display(),
            version = encoded.version,
            image_size = encoded.image_size(),
            "Wrote scanner QR image"
        );

        if self.verify {
            verify_file(&path, &url)?;
        }

        Ok(GeneratedQr {
            filename,
            path,
            url,
            version: encoded.version,
            modules: encoded.modules,
            image_size: encoded.image_size(),
            verified: self.verify,
        })
    }
}

impl Default for ScannerQr {
    fn default() -> Self {
        Self::new()
    }
}

fn verify_file(path: &Path, expected: &str) -> Result<()> {
    let payload = QrDecoder::new().decode_file(path)?;
    let actual = payload
        .as_str()
        .ok_or_else(|| Error::QrDecode("decoded payload is not valid UTF-8".to_string()))?;

    if actual != expected {
        return Err(Error::VerificationMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    tracing::debug!(path = %path.display(), "Verified scanner QR image");
    Ok(())
}
