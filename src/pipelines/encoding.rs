// SPDX-License-Identifier: GPL-3.0-only

//! Async bitmap encoding
//!
//! This module handles encoding resolved bitmaps to the formats the
//! picker exports:
//! - JPEG (with quality control)
//! - PNG (lossless)
//!
//! All encoding operations run on the blocking pool to avoid stalling the
//! async threads.

use crate::constants::QualityPreset;
use crate::errors::ExportError;
use crate::media::Bitmap;
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EncodingFormat {
    /// JPEG format (lossy compression)
    #[default]
    Jpeg,
    /// PNG format (lossless compression)
    Png,
}

impl EncodingFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            EncodingFormat::Jpeg => "jpg",
            EncodingFormat::Png => "png",
        }
    }

    fn to_image_format(self) -> ImageFormat {
        match self {
            EncodingFormat::Jpeg => ImageFormat::Jpeg,
            EncodingFormat::Png => ImageFormat::Png,
        }
    }
}

/// Encoded bitmap data ready for writing
pub struct EncodedBitmap {
    pub data: Vec<u8>,
    pub format: EncodingFormat,
    pub width: u32,
    pub height: u32,
}

/// Bitmap encoder with a fixed format and quality
#[derive(Debug, Clone, Copy)]
pub struct BitmapEncoder {
    format: EncodingFormat,
    quality: QualityPreset,
}

impl BitmapEncoder {
    pub fn new(format: EncodingFormat, quality: QualityPreset) -> Self {
        Self { format, quality }
    }

    pub fn format(&self) -> EncodingFormat {
        self.format
    }

    /// Encode a bitmap asynchronously
    ///
    /// Runs the CPU-bound encode in a background task.
    pub async fn encode(&self, bitmap: Bitmap) -> Result<EncodedBitmap, ExportError> {
        let format = self.format;
        let quality = self.quality;

        tokio::task::spawn_blocking(move || {
            let width = bitmap.width();
            let height = bitmap.height();
            let data = match format {
                EncodingFormat::Jpeg => encode_jpeg(&bitmap, quality)?,
                EncodingFormat::Png => encode_png(&bitmap)?,
            };

            debug!(size = data.len(), format = ?format, "Encoding complete");

            Ok(EncodedBitmap {
                data,
                format,
                width,
                height,
            })
        })
        .await
        .map_err(|err| ExportError::EncodeFailed(format!("encoding task error: {}", err)))?
    }
}

impl Default for BitmapEncoder {
    fn default() -> Self {
        Self::new(EncodingFormat::Jpeg, QualityPreset::High)
    }
}

/// Encode as JPEG
///
/// JPEG carries no alpha channel, so the payload is flattened to RGB
/// first.
fn encode_jpeg(bitmap: &Bitmap, quality: QualityPreset) -> Result<Vec<u8>, ExportError> {
    let rgba = bitmap.to_rgba_image();
    let rgb: RgbImage = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    let mut encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality.jpeg_quality());

    encoder
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|err| ExportError::EncodeFailed(format!("JPEG encoding failed: {}", err)))?;

    Ok(buffer)
}

/// Encode as PNG
fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, ExportError> {
    let rgba = bitmap.to_rgba_image();
    let mut buffer = Vec::new();

    rgba.write_to(
        &mut std::io::Cursor::new(&mut buffer),
        EncodingFormat::Png.to_image_format(),
    )
    .map_err(|err| ExportError::EncodeFailed(format!("PNG encoding failed: {}", err)))?;

    Ok(buffer)
}
