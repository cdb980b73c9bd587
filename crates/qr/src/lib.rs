//! # Lab Record QR
//!
//! Renders a URL as a square PNG QR code.
//!
//! This crate has no dependency on document generation; nothing in the request path calls it.
//! It is exposed through the `labrec qr` CLI command.

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// Default edge length of the output image in pixels.
pub const DEFAULT_QR_SIZE: u32 = 150;

/// Pixels per QR module before resizing.
const MODULE_PIXELS: u32 = 10;

/// Quiet-zone width in modules.
const BORDER_MODULES: u32 = 2;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("QR size must be greater than zero")]
    InvalidSize,
    #[error("failed to encode QR data: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("failed to write PNG: {0}")]
    Png(#[from] image::ImageError),
}

pub type QrResult<T> = std::result::Result<T, QrError>;

/// Encodes `url` as a level-L QR code and returns a `size` × `size` PNG.
///
/// The code is drawn at 10 pixels per module with a 2-module white border, then resampled to
/// the requested size with a Lanczos filter. Equal inputs produce byte-identical output.
///
/// # Errors
/// Returns an error if:
/// - `size` is zero,
/// - the data does not fit in any QR version at level L, or
/// - PNG encoding fails.
pub fn create_qr_code(url: &str, size: u32) -> QrResult<Vec<u8>> {
    if size == 0 {
        return Err(QrError::InvalidSize);
    }

    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)?;
    let modules = code
        .render::<Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .dark_color(DARK)
        .light_color(LIGHT)
        .build();

    let border = BORDER_MODULES * MODULE_PIXELS;
    let mut canvas: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_pixel(
        modules.width() + 2 * border,
        modules.height() + 2 * border,
        LIGHT,
    );
    imageops::overlay(&mut canvas, &modules, i64::from(border), i64::from(border));

    let resized = imageops::resize(&canvas, size, size, FilterType::Lanczos3);

    let mut png = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(resized).write_to(&mut png, ImageFormat::Png)?;
    Ok(png.into_inner())
}
