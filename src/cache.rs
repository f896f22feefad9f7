// SPDX-License-Identifier: GPL-3.0-only

//! Memoized asset resolution
//!
//! Decoding a bitmap is the most expensive step in the whole pipeline, and
//! surfaces re-render constantly (the thumbnail strip alone re-reads its
//! items on every selection change). The cache guarantees each handle is
//! fetched at most once per generation, and that concurrent resolves of
//! the same handle share one in-flight fetch instead of double-fetching.
//!
//! Failures are never memoized: a fetch that fails leaves the slot empty
//! so a later resolve retries against the library.

use crate::errors::FetchError;
use crate::library::MediaLibrary;
use crate::media::{Bitmap, MediaHandle};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// A cache slot created at a specific generation
struct Slot {
    generation: u64,
    cell: Arc<OnceCell<Bitmap>>,
}

struct CacheState {
    generation: u64,
    entries: HashMap<MediaHandle, Slot>,
}

/// Handle → bitmap cache with generation-tagged entries
pub struct AssetCache {
    library: Arc<dyn MediaLibrary>,
    state: Mutex<CacheState>,
}

impl AssetCache {
    pub fn new(library: Arc<dyn MediaLibrary>) -> Self {
        Self {
            library,
            state: Mutex::new(CacheState {
                generation: 0,
                entries: HashMap::new(),
            }),
        }
    }

    /// Current generation tag
    pub fn generation(&self) -> u64 {
        self.state.lock().unwrap().generation
    }

    /// Logically clear the cache by bumping the generation
    ///
    /// Entries are not freed here; a stale slot is replaced the next time
    /// its handle is resolved.
    pub fn invalidate(&self) {
        let mut state = self.state.lock().unwrap();
        state.generation += 1;
        debug!(generation = state.generation, "Cache invalidated");
    }

    /// Resolve a single handle, memoized
    ///
    /// Returns `None` when the library fetch fails (asset deleted between
    /// selection and resolve, unreadable file). Concurrent callers for the
    /// same handle await the first caller's fetch rather than issuing a
    /// duplicate.
    pub async fn resolve_one(&self, handle: &MediaHandle) -> Option<Bitmap> {
        let cell = self.slot(handle);
        match cell
            .get_or_try_init(|| self.library.fetch_bitmap(handle))
            .await
        {
            Ok(bitmap) => Some(bitmap.clone()),
            Err(err) => {
                warn!(handle = %handle, error = %err, "Asset fetch failed");
                None
            }
        }
    }

    /// Resolve a sequence of handles
    ///
    /// Fetches for distinct handles run concurrently; the output order
    /// always matches the input order, not completion order. Repeated
    /// handles share one fetch and one cached bitmap.
    pub async fn resolve(&self, handles: &[MediaHandle]) -> Vec<Option<Bitmap>> {
        join_all(handles.iter().map(|handle| self.resolve_one(handle))).await
    }

    /// Fetch the slot for `handle` at the current generation, replacing a
    /// stale one from an earlier generation
    fn slot(&self, handle: &MediaHandle) -> Arc<OnceCell<Bitmap>> {
        let mut state = self.state.lock().unwrap();
        let generation = state.generation;

        match state.entries.get(handle) {
            Some(slot) if slot.generation == generation => slot.cell.clone(),
            _ => {
                let cell = Arc::new(OnceCell::new());
                state.entries.insert(
                    handle.clone(),
                    Slot {
                        generation,
                        cell: cell.clone(),
                    },
                );
                cell
            }
        }
    }
}
