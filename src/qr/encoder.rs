//! QR code encoder

use crate::error::Result;
use crate::qr::{BORDER, BOX_SIZE, EC_LEVEL, MIN_VERSION};
use image::{GrayImage, Luma, imageops};
use qrcode::types::QrError;
use qrcode::{QrCode, Version};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rasterization parameters; production code always uses the defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RenderOptions {
    pub(crate) box_size: u32,
    pub(crate) border: u32,
    /// Grow past version 1 when the data does not fit
    pub(crate) fit: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            box_size: BOX_SIZE,
            border: BORDER,
            fit: true,
        }
    }
}

/// A rendered QR symbol together with the parameters it ended up with
#[derive(Debug, Clone)]
pub struct EncodedQr {
    /// Black-on-white raster including the quiet zone
    pub image: GrayImage,
    /// Symbol version actually used
    pub version: i16,
    /// Modules per side, without the quiet zone
    pub modules: usize,
}

impl EncodedQr {
    /// Side length of the square image in pixels
    pub fn image_size(&self) -> u32 {
        self.image.width()
    }
}

/// QR code encoder
pub struct QrEncoder {
    options: RenderOptions,
}

impl QrEncoder {
    /// Create an encoder with the fixed scanner-code settings
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub(crate) fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Encode a string into a black-on-white QR image
    pub fn encode_string(&self, data: &str) -> Result<EncodedQr> {
        let code = self.build_code(data.as_bytes())?;
        let version = match code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        };
        let modules = code.width();
        let image = self.rasterize(&code);

        tracing::debug!(
            version,
            modules,
            image_size = image.width(),
            "Encoded QR symbol"
        );

        Ok(EncodedQr {
            image,
            version,
            modules,
        })
    }

    fn build_code(&self, data: &[u8]) -> Result<QrCode> {
        match QrCode::with_version(data, Version::Normal(MIN_VERSION), EC_LEVEL) {
            Ok(code) => Ok(code),
            Err(QrError::DataTooLong) if self.options.fit => {
                tracing::debug!(
                    bytes = data.len(),
                    "Payload exceeds version {MIN_VERSION}, growing symbol"
                );
                Ok(QrCode::with_error_correction_level(data, EC_LEVEL)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn rasterize(&self, code: &QrCode) -> GrayImage {
        let box_size = self.options.box_size.max(1);
        let symbol = code
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .module_dimensions(box_size, box_size)
            .dark_color(DARK)
            .light_color(LIGHT)
            .build();

        let margin = self.options.border * box_size;
        let side = symbol.width() + 2 * margin;
        let mut canvas = GrayImage::from_pixel(side, side, LIGHT);
        imageops::overlay(&mut canvas, &symbol, i64::from(margin), i64::from(margin));
        canvas
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
