// SPDX-License-Identifier: MPL-2.0

//! Temporary-store management for exported artifacts
//!
//! Exported files live under a single namespace in the system temporary
//! directory, one file per artifact, named by a fresh UUID so concurrent
//! exports never collide. There is no index file; callers track artifacts
//! by the path sequences returned to them.

use crate::constants::EXPORT_DIR_NAME;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Default export namespace under the system temp dir
pub fn default_export_dir() -> PathBuf {
    std::env::temp_dir().join(EXPORT_DIR_NAME)
}

/// Create the namespace directory if it is missing
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Fresh collision-free artifact path with the given extension
pub fn unique_artifact_path(dir: &Path, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", Uuid::new_v4(), extension))
}

/// Best-effort deletion of an exported artifact
///
/// Idempotent: a missing file is not an error.
pub async fn reclaim(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => debug!(path = %path.display(), "Reclaimed artifact"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => debug!(path = %path.display(), error = %err, "Reclaim failed"),
    }
}
