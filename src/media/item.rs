// SPDX-License-Identifier: GPL-3.0-only

//! Media item data model
//!
//! Items are identified by an opaque handle issued by the media library.
//! The picker never interprets a handle; it only clones, compares and
//! hashes it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Opaque identifier for an asset in the external media library
///
/// Cheap to clone; compared and hashed by value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MediaHandle(Arc<str>);

impl MediaHandle {
    pub fn new(raw: impl Into<String>) -> Self {
        MediaHandle(Arc::from(raw.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaHandle({:?})", &*self.0)
    }
}

impl From<&str> for MediaHandle {
    fn from(raw: &str) -> Self {
        MediaHandle::new(raw)
    }
}

impl From<String> for MediaHandle {
    fn from(raw: String) -> Self {
        MediaHandle::new(raw)
    }
}

/// Kind of media an item refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

/// A selectable media item
///
/// Immutable once constructed. Equality and hashing go by handle value
/// only, so two `MediaItem`s referring to the same asset are the same item
/// regardless of where they were constructed.
#[derive(Debug, Clone, Eq)]
pub struct MediaItem {
    handle: MediaHandle,
    kind: MediaKind,
}

impl MediaItem {
    pub fn new(handle: impl Into<MediaHandle>, kind: MediaKind) -> Self {
        Self {
            handle: handle.into(),
            kind,
        }
    }

    pub fn photo(handle: impl Into<MediaHandle>) -> Self {
        Self::new(handle, MediaKind::Photo)
    }

    pub fn video(handle: impl Into<MediaHandle>) -> Self {
        Self::new(handle, MediaKind::Video)
    }

    pub fn handle(&self) -> &MediaHandle {
        &self.handle
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

impl PartialEq for MediaItem {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Hash for MediaItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}
