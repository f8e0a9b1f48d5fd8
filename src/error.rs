//! Error types for scanner-qr operations

use thiserror::Error;

/// Result type alias using scanner-qr's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for scanner-qr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Domain argument cannot be used to build a scanner URL
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// Written image does not decode to the expected scanner URL
    #[error("QR verification failed: expected '{expected}', decoded '{actual}'")]
    VerificationMismatch {
        /// URL that was encoded
        expected: String,
        /// Text read back from the image
        actual: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(format!("JSON error: {}", e))
    }
}
