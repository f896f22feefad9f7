// SPDX-License-Identifier: GPL-3.0-only

//! Picker session facade
//!
//! Wires the store, the resolution cache and the export pipeline together
//! for one picking session, and implements the hand-off a caller performs
//! when the user confirms the selection. Construct one session per picker
//! invocation and `reset` it when the picker closes; the store and cache
//! are then clean for the next invocation.

use crate::cache::AssetCache;
use crate::config::PickerConfig;
use crate::errors::{ExportError, HandOffError};
use crate::library::MediaLibrary;
use crate::media::{Bitmap, MediaHandle, MediaItem};
use crate::pipelines::ExportPipeline;
use crate::selection::SelectionStore;
use crate::storage;
use futures::future::join_all;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Per-item outcome of a hand-off, in selection order
#[derive(Debug)]
pub struct HandOffItem {
    pub item: MediaItem,
    pub result: Result<PathBuf, HandOffError>,
}

/// One picking session: store + cache + exporter
pub struct PickerSession {
    store: SelectionStore,
    cache: AssetCache,
    exporter: ExportPipeline,
}

impl PickerSession {
    pub fn new(library: Arc<dyn MediaLibrary>, exporter: ExportPipeline) -> Self {
        Self {
            store: SelectionStore::new(),
            cache: AssetCache::new(library),
            exporter,
        }
    }

    /// Session with export settings taken from configuration
    pub fn from_config(library: Arc<dyn MediaLibrary>, config: &PickerConfig) -> Self {
        let dir = config
            .export_dir
            .clone()
            .unwrap_or_else(storage::default_export_dir);
        Self::new(
            library,
            ExportPipeline::new(config.export_format, config.quality, dir),
        )
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }

    pub fn cache(&self) -> &AssetCache {
        &self.cache
    }

    pub fn exporter(&self) -> &ExportPipeline {
        &self.exporter
    }

    /// Resolve every selected handle (memoized) in selection order
    pub async fn resolve_selection(&self) -> Vec<Option<Bitmap>> {
        self.cache.resolve(&self.store.handles()).await
    }

    /// Materialize the current selection into exported artifacts
    ///
    /// One entry per selected item, in selection order. A fetch or export
    /// failure of one item never discards the successes of the others.
    /// If the session was reset while work was in flight, the artifacts
    /// are reclaimed and every item reports `SessionEnded` instead.
    pub async fn hand_off(&self) -> Vec<HandOffItem> {
        let token = self.store.session_token();
        let items = self.store.items().to_vec();
        if items.is_empty() {
            return Vec::new();
        }

        let handles: Vec<MediaHandle> =
            items.iter().map(|item| item.handle().clone()).collect();
        let resolved = self.cache.resolve(&handles).await;

        // export the resolved bitmaps concurrently, keyed by selection
        // index so results stitch back in order
        let export_futures = resolved.iter().enumerate().filter_map(|(index, slot)| {
            slot.clone().map(|bitmap| async move {
                (index, self.exporter.export_one(bitmap).await)
            })
        });
        let mut exported: HashMap<usize, Result<PathBuf, ExportError>> =
            join_all(export_futures).await.into_iter().collect();

        if !self.store.token_is_current(&token) {
            warn!("Session ended during hand-off; reclaiming artifacts");
            for result in exported.into_values() {
                if let Ok(path) = result {
                    storage::reclaim(&path).await;
                }
            }
            return items
                .into_iter()
                .map(|item| HandOffItem {
                    item,
                    result: Err(HandOffError::SessionEnded),
                })
                .collect();
        }

        let results: Vec<HandOffItem> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let result = match exported.remove(&index) {
                    Some(Ok(path)) => Ok(path),
                    Some(Err(err)) => Err(HandOffError::Export(err)),
                    None => Err(HandOffError::FetchFailed),
                };
                HandOffItem { item, result }
            })
            .collect();

        info!(
            total = results.len(),
            failed = results.iter().filter(|entry| entry.result.is_err()).count(),
            "Hand-off finished"
        );
        results
    }

    /// End the session: clear the selection, drop subscriptions and start
    /// a fresh cache generation
    pub fn reset(&mut self) {
        self.store.reset();
        self.cache.invalidate();
    }
}
