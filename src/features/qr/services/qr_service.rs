use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::core::error::{AppError, Result};

pub const DEFAULT_QR_SIZE: u32 = 256;

/// Stateless QR rendering
pub struct QrService;

impl QrService {
    pub fn new() -> Self {
        Self
    }

    fn encode(&self, data: &str) -> Result<QrCode> {
        QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
            .map_err(|e| AppError::Validation(format!("Cannot encode QR data: {}", e)))
    }

    pub fn render_svg(&self, data: &str, size: u32) -> Result<String> {
        let code = self.encode(data)?;
        Ok(code
            .render::<svg::Color>()
            .min_dimensions(size, size)
            .build())
    }

    pub fn render_png(&self, data: &str, size: u32) -> Result<Vec<u8>> {
        let code = self.encode(data)?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(size, size)
            .build();

        let mut bytes = Vec::new();
        PngEncoder::new(Cursor::new(&mut bytes))
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::L8,
            )
            .map_err(|e| AppError::Internal(format!("Failed to encode PNG: {}", e)))?;

        Ok(bytes)
    }
}

impl Default for QrService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_rendering() {
        let svg = QrService::new()
            .render_svg("https://example.org/donate", DEFAULT_QR_SIZE)
            .unwrap();
        assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_png_rendering() {
        let png = QrService::new()
            .render_png("https://example.org/donate", DEFAULT_QR_SIZE)
            .unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        // QR version 40 tops out well below 8k bytes
        let data = "a".repeat(8000);
        assert!(QrService::new().render_svg(&data, DEFAULT_QR_SIZE).is_err());
    }
}
