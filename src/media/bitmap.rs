// SPDX-License-Identifier: GPL-3.0-only

//! Decoded bitmap payloads
//!
//! A [`Bitmap`] is the in-memory RGBA8 result of resolving a media handle.
//! Clones share the same pixel allocation, so handing a cached bitmap to
//! several surfaces costs a pointer bump, not a copy.

use std::fmt;
use std::sync::Arc;

/// Decoded RGBA8 pixel payload for a resolved media item
#[derive(Clone)]
pub struct Bitmap {
    pixels: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Build a bitmap from a raw RGBA8 buffer
    ///
    /// Returns `None` when the buffer length does not match the dimensions
    /// (`width * height * 4` bytes).
    pub fn from_rgba8(pixels: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            pixels: Arc::new(pixels),
            width,
            height,
        })
    }

    /// Build a bitmap from a decoded image, converting to RGBA8
    pub fn from_image(image: image::DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            pixels: Arc::new(rgba.into_raw()),
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True when both bitmaps share the same pixel allocation
    ///
    /// This is the "object identity" the resolution cache guarantees for
    /// repeated resolves of one handle.
    pub fn same_pixels(a: &Bitmap, b: &Bitmap) -> bool {
        Arc::ptr_eq(&a.pixels, &b.pixels)
    }

    /// View the payload as an `image` buffer for encoding
    pub(crate) fn to_rgba_image(&self) -> image::RgbaImage {
        // the length invariant is enforced at construction
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec())
            .unwrap_or_else(|| image::RgbaImage::new(0, 0))
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}
