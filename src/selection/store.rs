// SPDX-License-Identifier: GPL-3.0-only

//! The selection store
//!
//! Single source of truth for what the user has currently selected. All
//! mutation is serialized through the owner thread by contract (see the
//! crate docs): there is no internal locking because there is no
//! concurrent writer. Surfaces mutate the store; the store fans the change
//! out to its observers.

use super::observers::{ObserverRegistry, SelectionEvent, SelectionObserver};
use crate::media::{MediaHandle, MediaItem};
use std::sync::Arc;
use tracing::debug;

/// Outcome of an add: a duplicate handle is a no-op, not an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Outcome of a remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Captures the session epoch at a point in time
///
/// Background work holds a token and checks it before applying results;
/// `reset` bumps the epoch, so results that outlive the session are
/// discarded instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken(u64);

/// Ordered, duplicate-free selection plus the at-most-one active video
pub struct SelectionStore {
    items: Vec<MediaItem>,
    active_video: Option<MediaItem>,
    observers: ObserverRegistry,
    epoch: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            active_video: None,
            observers: ObserverRegistry::new(),
            epoch: 0,
        }
    }

    /// Subscribe a surface to change notifications (non-owning)
    pub fn subscribe<O>(&mut self, observer: &Arc<O>)
    where
        O: SelectionObserver + 'static,
    {
        self.observers.subscribe(observer);
    }

    /// Append an item unless its handle is already selected
    ///
    /// `newly_taken` marks a fresh camera capture as opposed to a tap on
    /// an existing library item; it is forwarded to observers untouched.
    pub fn add(&mut self, item: MediaItem, newly_taken: bool) -> AddOutcome {
        if self.contains(item.handle()) {
            return AddOutcome::AlreadyPresent;
        }

        self.items.push(item.clone());
        debug!(handle = %item.handle(), newly_taken, "Selection add");
        self.observers
            .notify(&SelectionEvent::Added { item, newly_taken });
        AddOutcome::Added
    }

    /// Remove by handle equality
    pub fn remove(&mut self, handle: &MediaHandle) -> RemoveOutcome {
        match self.index_of(handle) {
            Some(index) => self.remove_at(index),
            None => RemoveOutcome::NotFound,
        }
    }

    /// Remove by position
    pub fn remove_at(&mut self, index: usize) -> RemoveOutcome {
        if index >= self.items.len() {
            return RemoveOutcome::NotFound;
        }

        let item = self.items.remove(index);
        debug!(handle = %item.handle(), "Selection remove");
        self.observers.notify(&SelectionEvent::Removed(item));
        RemoveOutcome::Removed
    }

    /// Replace the selection wholesale
    ///
    /// Emits a single reload notification instead of per-item events so a
    /// bulk select does not storm the observers. Input is deduplicated by
    /// handle, first occurrence wins.
    pub fn replace_all(&mut self, new_items: Vec<MediaItem>) {
        self.items.clear();
        for item in new_items {
            if !self.contains(item.handle()) {
                self.items.push(item);
            }
        }
        debug!(count = self.items.len(), "Selection replaced");
        self.observers.notify(&SelectionEvent::Reloaded);
    }

    /// End the session: clear items, the video slot and all subscriptions
    ///
    /// Bumps the session epoch so tokens handed out earlier stop
    /// validating. The store is back in its initial state and reusable.
    pub fn reset(&mut self) {
        self.items.clear();
        self.active_video = None;
        self.observers.clear();
        self.epoch += 1;
        debug!(epoch = self.epoch, "Selection store reset");
    }

    /// Position of a handle in the selection, O(n)
    pub fn index_of(&self, handle: &MediaHandle) -> Option<usize> {
        self.items.iter().position(|item| item.handle() == handle)
    }

    pub fn contains(&self, handle: &MediaHandle) -> bool {
        self.index_of(handle).is_some()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Selected handles in selection order
    pub fn handles(&self) -> Vec<MediaHandle> {
        self.items.iter().map(|item| item.handle().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Set the active video slot
    ///
    /// The slot is independent of `items`; callers enforce UI-level
    /// exclusivity between photo multi-select and video pick. Returns
    /// `false` (slot untouched) when the item is not a video.
    pub fn set_active_video(&mut self, item: MediaItem) -> bool {
        if !item.is_video() {
            return false;
        }
        self.active_video = Some(item);
        true
    }

    pub fn active_video(&self) -> Option<&MediaItem> {
        self.active_video.as_ref()
    }

    pub fn take_active_video(&mut self) -> Option<MediaItem> {
        self.active_video.take()
    }

    /// Token for the current session epoch
    pub fn session_token(&self) -> SessionToken {
        SessionToken(self.epoch)
    }

    /// True while no `reset` has happened since the token was taken
    pub fn token_is_current(&self, token: &SessionToken) -> bool {
        token.0 == self.epoch
    }

    /// Number of live subscriptions (diagnostics)
    pub fn observer_count(&self) -> usize {
        self.observers.live_count()
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
