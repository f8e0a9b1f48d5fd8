//! Scanner URL and output naming
//!
//! The ticketing plugin serves its entrance scanner from the WordPress
//! admin-ajax endpoint. Everything derived here is a pure function of the
//! domain the caller supplies.

use crate::error::{Error, Result};
use std::fmt;

/// Path and query of the scanner page below the site root
pub const SCANNER_PATH: &str = "/wp-admin/admin-ajax.php?action=wjt_scanner_page";

/// Prefix shared by every generated image file
pub const FILENAME_PREFIX: &str = "scanner-qr-";

/// Extension of generated image files
pub const FILENAME_EXTENSION: &str = "png";

/// Domain of the shop whose scanner page is encoded
///
/// The value is opaque: it is not checked against hostname syntax and is
/// interpolated verbatim, so `shop.example.de:8443` or `example.de/sub`
/// are accepted as-is. Only the empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Wrap a caller-supplied domain string
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::InvalidDomain(
                "domain must not be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Scanner page URL for this domain
    pub fn scanner_url(&self) -> String {
        format!("https://{}{}", self.0, SCANNER_PATH)
    }

    /// File name the QR image for this domain is written to
    pub fn output_filename(&self) -> String {
        format!(
            "{FILENAME_PREFIX}{}.{FILENAME_EXTENSION}",
            self.0.replace('.', "-")
        )
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
