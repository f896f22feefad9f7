// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the selection store and its observers

use picker::{AddOutcome, MediaItem, SelectionObserver, SelectionStore};
use std::cell::RefCell;
use std::sync::Arc;

/// Records every notification it receives
struct Recorder {
    log: RefCell<Vec<String>>,
}

impl Recorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            log: RefCell::new(Vec::new()),
        })
    }

    fn events(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl SelectionObserver for Recorder {
    fn on_add(&self, item: &MediaItem, newly_taken: bool) {
        self.log
            .borrow_mut()
            .push(format!("add:{}:{}", item.handle(), newly_taken));
    }

    fn on_remove(&self, item: &MediaItem) {
        self.log.borrow_mut().push(format!("remove:{}", item.handle()));
    }

    fn on_reload(&self) {
        self.log.borrow_mut().push("reload".to_string());
    }
}

#[test]
fn test_add_is_idempotent_and_notifies_once() {
    let mut store = SelectionStore::new();
    let observer = Recorder::new();
    store.subscribe(&observer);

    assert_eq!(store.add(MediaItem::photo("a.jpg"), false), AddOutcome::Added);
    assert_eq!(
        store.add(MediaItem::photo("a.jpg"), false),
        AddOutcome::AlreadyPresent
    );

    assert_eq!(store.len(), 1);
    assert_eq!(observer.events(), ["add:a.jpg:false"]);
}

#[test]
fn test_fresh_capture_scenario() {
    // store empty, user shoots a photo
    let mut store = SelectionStore::new();
    let observer = Recorder::new();
    store.subscribe(&observer);

    let outcome = store.add(MediaItem::photo("capture_001.jpg"), true);

    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(observer.events(), ["add:capture_001.jpg:true"]);
    assert_eq!(
        store
            .items()
            .iter()
            .map(|item| item.handle().as_str())
            .collect::<Vec<_>>(),
        ["capture_001.jpg"]
    );
}

#[test]
fn test_order_preserved_across_adds() {
    let mut store = SelectionStore::new();
    let names = ["e.jpg", "a.jpg", "d.jpg", "b.jpg"];
    for name in names {
        store.add(MediaItem::photo(name), false);
    }

    let order: Vec<&str> = store
        .items()
        .iter()
        .map(|item| item.handle().as_str())
        .collect();
    assert_eq!(order, names);
}

#[test]
fn test_dead_observer_skipped_live_observer_notified() {
    let mut store = SelectionStore::new();
    let doomed = Recorder::new();
    let survivor = Recorder::new();
    store.subscribe(&doomed);
    store.subscribe(&survivor);

    drop(doomed);
    store.add(MediaItem::photo("a.jpg"), false);

    assert_eq!(survivor.events(), ["add:a.jpg:false"]);
    assert_eq!(store.observer_count(), 1);
}

#[test]
fn test_replace_all_emits_single_reload() {
    let mut store = SelectionStore::new();
    let observer = Recorder::new();
    store.subscribe(&observer);

    store.replace_all(vec![
        MediaItem::photo("a.jpg"),
        MediaItem::photo("b.jpg"),
        MediaItem::photo("c.jpg"),
    ]);

    assert_eq!(store.len(), 3);
    assert_eq!(observer.events(), ["reload"]);
}

#[test]
fn test_reset_silences_observers() {
    let mut store = SelectionStore::new();
    let observer = Recorder::new();
    store.subscribe(&observer);
    store.add(MediaItem::photo("a.jpg"), false);

    store.reset();
    store.add(MediaItem::photo("b.jpg"), false);

    // only the pre-reset event was seen
    assert_eq!(observer.events(), ["add:a.jpg:false"]);
    assert!(store.token_is_current(&store.session_token()));
}

#[test]
fn test_remove_returns_store_to_prior_state() {
    let mut store = SelectionStore::new();
    store.add(MediaItem::photo("keep.jpg"), false);

    store.add(MediaItem::photo("tmp.jpg"), false);
    store.remove(&"tmp.jpg".into());

    let order: Vec<&str> = store
        .items()
        .iter()
        .map(|item| item.handle().as_str())
        .collect();
    assert_eq!(order, ["keep.jpg"]);
    assert_eq!(store.index_of(&"keep.jpg".into()), Some(0));
}
