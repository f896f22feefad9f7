// SPDX-License-Identifier: GPL-3.0-only

//! Observer fan-out for selection changes
//!
//! Surfaces (grid, camera strip, lightbox, album dropdown) subscribe to
//! the store and re-render on change. The registry holds weak references
//! only, so a surface torn down by its owner never has to unsubscribe:
//! its entry is skipped and pruned on the next dispatch.

use crate::media::MediaItem;
use std::sync::{Arc, Weak};
use tracing::trace;

/// Receives selection change notifications
///
/// `on_add` carries `newly_taken` so surfaces can distinguish a fresh
/// camera capture from a tap on an existing library item (a fresh capture
/// triggers an album refresh downstream).
pub trait SelectionObserver {
    fn on_add(&self, item: &MediaItem, newly_taken: bool);
    fn on_remove(&self, item: &MediaItem);
    fn on_reload(&self);
}

/// A change delivered to every live subscriber
#[derive(Debug, Clone)]
pub enum SelectionEvent {
    Added { item: MediaItem, newly_taken: bool },
    Removed(MediaItem),
    Reloaded,
}

/// Non-owning subscription table
///
/// Subscribers are kept as weak references in registration order. Repeated
/// subscriptions of the same observer are kept and each fires; the table
/// never deduplicates.
#[derive(Default)]
pub struct ObserverRegistry {
    entries: Vec<Weak<dyn SelectionObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber without taking ownership of it
    pub fn subscribe<O>(&mut self, observer: &Arc<O>)
    where
        O: SelectionObserver + 'static,
    {
        let observer: Arc<dyn SelectionObserver> = observer.clone();
        let weak: Weak<dyn SelectionObserver> = Arc::downgrade(&observer);
        self.entries.push(weak);
    }

    /// Deliver an event to every live subscriber in registration order
    ///
    /// Dead entries are silently skipped and pruned in the same pass.
    /// Delivery is flat: an observer reacting to this event must not
    /// expect a nested redelivery of the same event.
    pub fn notify(&mut self, event: &SelectionEvent) {
        // upgrade up front so an observer dropped elsewhere during this
        // dispatch still sees a consistent recipient list
        let live: Vec<Arc<dyn SelectionObserver>> =
            self.entries.iter().filter_map(Weak::upgrade).collect();

        let before = self.entries.len();
        self.entries.retain(|entry| entry.strong_count() > 0);
        if before != self.entries.len() {
            trace!(pruned = before - self.entries.len(), "Pruned dead observers");
        }

        for observer in &live {
            match event {
                SelectionEvent::Added { item, newly_taken } => {
                    observer.on_add(item, *newly_taken)
                }
                SelectionEvent::Removed(item) => observer.on_remove(item),
                SelectionEvent::Reloaded => observer.on_reload(),
            }
        }
    }

    /// Drop every subscription
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of subscriptions whose observer is still alive
    pub fn live_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
