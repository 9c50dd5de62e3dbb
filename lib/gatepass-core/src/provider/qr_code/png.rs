use std::io::Cursor;

use async_trait::async_trait;
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use qrcode::QrCode;

use super::QrCodeGenerator;
use super::error::QrCodeError;

#[derive(Default)]
pub struct PngQrCodeGenerator;

impl PngQrCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QrCodeGenerator for PngQrCodeGenerator {
    async fn render(&self, payload: &str, size: u32, margin: u32) -> Result<Vec<u8>, QrCodeError> {
        let payload = payload.to_owned();

        tokio::task::spawn_blocking(move || render_png(&payload, size, margin))
            .await
            .map_err(|e| QrCodeError::Task(e.to_string()))?
    }
}

pub(super) fn render_png(payload: &str, size: u32, margin: u32) -> Result<Vec<u8>, QrCodeError> {
    let code = QrCode::new(payload.as_bytes())?;

    let overflow = || QrCodeError::Dimensions { size, margin };

    let modules = code.width() as u32;
    let total_modules = margin
        .checked_mul(2)
        .and_then(|quiet_zone| quiet_zone.checked_add(modules))
        .ok_or_else(overflow)?;
    let scale = (size / total_modules).max(1);
    let edge = total_modules.checked_mul(scale).ok_or_else(overflow)?;

    let symbol = code
        .render::<Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(scale, scale)
        .build();

    let mut canvas = ImageBuffer::from_pixel(edge, edge, Luma([255u8]));
    let offset = i64::from(margin * scale);
    image::imageops::overlay(&mut canvas, &symbol, offset, offset);

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(canvas).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    Ok(bytes)
}
