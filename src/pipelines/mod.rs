// SPDX-License-Identifier: GPL-3.0-only

//! Export pipelines
//!
//! - [`encoding`]: bitmap → JPEG/PNG payloads on the blocking pool
//! - [`export`]: payloads → collision-free files in the temporary store

pub mod encoding;
pub mod export;

// Re-export commonly used types
pub use encoding::{BitmapEncoder, EncodedBitmap, EncodingFormat};
pub use export::ExportPipeline;
