//! QR code encoding and decoding
//!
//! The encoder renders the scanner URL with a fixed symbol configuration
//! (version 1 with fit, error correction Low, 10 px modules, 4-module
//! border). The decoder reads written images back so a run can confirm
//! what it produced.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::{EncodedQr, QrEncoder};

use serde::{Deserialize, Serialize};

/// Smallest symbol version the encoder starts from
pub const MIN_VERSION: i16 = 1;

/// Error-correction level used for every generated code
pub const EC_LEVEL: qrcode::EcLevel = qrcode::EcLevel::L;

/// Pixel size of one QR module
pub const BOX_SIZE: u32 = 10;

/// Quiet-zone width in modules
pub const BORDER: u32 = 4;

/// A decoded QR code payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    /// The raw decoded data
    pub data: Vec<u8>,
    /// String representation if valid UTF-8
    pub text: Option<String>,
}

impl QrPayload {
    /// Create a new QR payload from raw bytes
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let text = String::from_utf8(data.clone()).ok();
        Self { data, text }
    }

    /// Get the payload as a string, if valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
