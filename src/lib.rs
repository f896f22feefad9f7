// SPDX-License-Identifier: GPL-3.0-only

//! Picker - media selection and export core
//!
//! This library provides the core state of a gallery-style media picker:
//! tracking what the user has selected, resolving selections into decoded
//! bitmaps, and exporting the final selection to durable temporary files
//! for hand-off to a caller.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`selection`]: the selection store and its weakly subscribed observers
//! - [`cache`]: memoized handle → bitmap resolution with generation tags
//! - [`pipelines`]: bitmap encoding and the temporary-store export pipeline
//! - [`library`]: the media-library boundary and a filesystem-backed impl
//! - [`session`]: the facade tying one picking session together
//! - [`config`]: user configuration handling
//! - [`storage`]: temporary-store namespace and artifact naming
//!
//! # Threading contract
//!
//! `SelectionStore` and observer notification belong to a single logical
//! owner thread; there is no internal locking because there is no
//! concurrent writer. Resolution and export are `async` and may fan work
//! out internally, but results come back in input order, and callers that
//! run them in the background must re-check the store's session token
//! before applying results.

pub mod cache;
pub mod config;
pub mod constants;
pub mod errors;
pub mod library;
pub mod media;
pub mod pipelines;
pub mod selection;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use cache::AssetCache;
pub use config::PickerConfig;
pub use constants::QualityPreset;
pub use errors::{ConfigError, ExportError, FetchError, HandOffError};
pub use library::{FsMediaLibrary, MediaLibrary};
pub use media::{Bitmap, MediaHandle, MediaItem, MediaKind};
pub use pipelines::{EncodingFormat, ExportPipeline};
pub use selection::{
    AddOutcome, RemoveOutcome, SelectionObserver, SelectionStore, SessionToken,
};
pub use session::{HandOffItem, PickerSession};
