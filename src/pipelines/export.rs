// SPDX-License-Identifier: GPL-3.0-only

//! Export pipeline
//!
//! Materializes resolved bitmaps into files under the temporary store so
//! the selection can be handed to a caller outside the picker's lifetime.
//! Every input yields its own result in input order; a failed item never
//! aborts the rest of the batch.

use super::encoding::{BitmapEncoder, EncodingFormat};
use crate::constants::QualityPreset;
use crate::errors::ExportError;
use crate::media::Bitmap;
use crate::storage;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Encodes bitmaps and writes them into the export namespace
pub struct ExportPipeline {
    encoder: BitmapEncoder,
    dir: PathBuf,
}

impl ExportPipeline {
    /// Pipeline writing into `dir` (created on demand)
    pub fn new(format: EncodingFormat, quality: QualityPreset, dir: impl Into<PathBuf>) -> Self {
        Self {
            encoder: BitmapEncoder::new(format, quality),
            dir: dir.into(),
        }
    }

    /// Pipeline writing into the default temporary-store namespace
    pub fn with_default_dir(format: EncodingFormat, quality: QualityPreset) -> Self {
        Self::new(format, quality, storage::default_export_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> EncodingFormat {
        self.encoder.format()
    }

    /// Export a batch of bitmaps
    ///
    /// One result per input, order preserved regardless of which item
    /// finishes encoding first, so callers can correlate failures with
    /// specific items. Encode and write failures are reported per item
    /// and the batch always runs to completion.
    pub async fn export_to_temporary_store(
        &self,
        bitmaps: &[Bitmap],
    ) -> Vec<Result<PathBuf, ExportError>> {
        let results = join_all(
            bitmaps
                .iter()
                .cloned()
                .map(|bitmap| self.export_one(bitmap)),
        )
        .await;

        info!(
            total = results.len(),
            failed = results.iter().filter(|result| result.is_err()).count(),
            "Export batch finished"
        );
        results
    }

    /// Encode one bitmap and write it under a fresh collision-free name
    pub async fn export_one(&self, bitmap: Bitmap) -> Result<PathBuf, ExportError> {
        storage::ensure_dir(&self.dir)?;

        let encoded = self.encoder.encode(bitmap).await?;
        let path = storage::unique_artifact_path(&self.dir, encoded.format.extension());

        tokio::fs::write(&path, &encoded.data)
            .await
            .map_err(ExportError::from)?;

        debug!(path = %path.display(), bytes = encoded.data.len(), "Artifact written");
        Ok(path)
    }

    /// Best-effort deletion of a previously exported artifact (idempotent)
    pub async fn reclaim(&self, path: &Path) {
        storage::reclaim(path).await;
    }

    /// Read an exported artifact's bytes and reclaim it in one step
    ///
    /// Returns `None` when the artifact is already gone.
    pub async fn take(&self, path: &Path) -> Option<Vec<u8>> {
        let bytes = tokio::fs::read(path).await.ok()?;
        storage::reclaim(path).await;
        Some(bytes)
    }
}
