// SPDX-License-Identifier: GPL-3.0-only

//! Filesystem-backed media library
//!
//! Treats a directory of image and video files as the library: file names
//! are the opaque handles, listing is newest-first, and fetching decodes
//! the file on the blocking pool. Serves the CLI and tests as the concrete
//! collaborator behind the [`MediaLibrary`] boundary.

use super::MediaLibrary;
use crate::errors::FetchError;
use crate::media::{Bitmap, MediaHandle, MediaItem, MediaKind};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "webm", "mov"];

/// A directory of media files exposed as a library
pub struct FsMediaLibrary {
    root: PathBuf,
}

/// Listing entry: the item plus on-disk metadata for display
#[derive(Debug, Clone)]
pub struct LibraryEntry {
    pub item: MediaItem,
    pub path: PathBuf,
    pub modified: Option<DateTime<Local>>,
}

impl FsMediaLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List media files in the root directory, newest first
    ///
    /// Files with unrecognized extensions are skipped. Subdirectories are
    /// not descended into; an album is one directory.
    pub async fn entries(&self) -> std::io::Result<Vec<LibraryEntry>> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for dir_entry in std::fs::read_dir(&root)?.flatten() {
                let path = dir_entry.path();
                let Some(kind) = classify(&path) else {
                    continue;
                };
                let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned())
                else {
                    continue;
                };

                let modified = dir_entry
                    .metadata()
                    .ok()
                    .and_then(|meta| meta.modified().ok());

                entries.push((modified, LibraryEntry {
                    item: MediaItem::new(name, kind),
                    path,
                    modified: modified.map(DateTime::<Local>::from),
                }));
            }

            // newest first; files with no mtime sort last
            entries.sort_by_key(|(modified, _)| {
                std::cmp::Reverse(modified.unwrap_or(SystemTime::UNIX_EPOCH))
            });

            Ok(entries.into_iter().map(|(_, entry)| entry).collect())
        })
        .await
        .map_err(std::io::Error::other)?
    }

    fn asset_path(&self, handle: &MediaHandle) -> PathBuf {
        self.root.join(handle.as_str())
    }
}

fn classify(path: &Path) -> Option<MediaKind> {
    let extension = path.extension()?.to_string_lossy();
    if IMAGE_EXTENSIONS
        .iter()
        .any(|ext| extension.eq_ignore_ascii_case(ext))
    {
        Some(MediaKind::Photo)
    } else if VIDEO_EXTENSIONS
        .iter()
        .any(|ext| extension.eq_ignore_ascii_case(ext))
    {
        Some(MediaKind::Video)
    } else {
        None
    }
}

#[async_trait]
impl MediaLibrary for FsMediaLibrary {
    async fn fetch_bitmap(&self, handle: &MediaHandle) -> Result<Bitmap, FetchError> {
        let path = self.asset_path(handle);
        let bytes = tokio::fs::read(&path).await.map_err(FetchError::from)?;

        // decoding is CPU-bound; keep it off the async threads
        let bitmap = tokio::task::spawn_blocking(move || {
            image::load_from_memory(&bytes)
                .map(Bitmap::from_image)
                .map_err(|err| FetchError::DecodeFailed(err.to_string()))
        })
        .await
        .map_err(|err| FetchError::Io(format!("decode task error: {}", err)))??;

        debug!(
            handle = %handle,
            width = bitmap.width(),
            height = bitmap.height(),
            "Decoded asset"
        );
        Ok(bitmap)
    }
}
