// SPDX-License-Identifier: GPL-3.0-only

//! Media library boundary
//!
//! The library behind the picker is the only source of truth for asset
//! existence: an asset can disappear between selection and export, and
//! every consumer of this trait must treat a failed fetch as a
//! recoverable, per-item condition.

use crate::errors::FetchError;
use crate::media::{Bitmap, MediaHandle};
use async_trait::async_trait;

pub mod fs;

pub use fs::{FsMediaLibrary, LibraryEntry};

/// Source of decoded bitmaps for opaque handles
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Decode the asset behind `handle`
    async fn fetch_bitmap(&self, handle: &MediaHandle) -> Result<Bitmap, FetchError>;

    /// Fetch several assets; one result per handle, order preserved
    ///
    /// The default fetches sequentially. The resolution cache already
    /// parallelizes per handle, so only libraries with a cheaper native
    /// batch call need to override this.
    async fn fetch_bitmaps_batch(
        &self,
        handles: &[MediaHandle],
    ) -> Vec<Result<Bitmap, FetchError>> {
        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(self.fetch_bitmap(handle).await);
        }
        results
    }
}
