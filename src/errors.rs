// SPDX-License-Identifier: MPL-2.0

//! Error types for the picker core
//!
//! Nothing in this crate is fatal: every fallible operation reports per
//! item and batches always run to completion. `NotFound` on remove and a
//! duplicate add are outcomes, not errors, and live next to the store.

use std::fmt;

/// Asset fetch errors (skip-and-continue)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The asset no longer exists in the underlying library
    AssetMissing,
    /// The asset exists but could not be decoded
    DecodeFailed(String),
    /// I/O failure reading the asset
    Io(String),
}

/// Export-stage errors, reported per item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The bitmap could not be serialized to the configured format
    EncodeFailed(String),
    /// Writing the artifact failed (permissions, disk full)
    WriteFailed(String),
}

/// Configuration load/save errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

/// Per-item outcome of a session hand-off
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandOffError {
    /// The item's asset could not be resolved; the rest of the batch is
    /// unaffected
    FetchFailed,
    /// The item resolved but could not be exported
    Export(ExportError),
    /// The session was reset while work was in flight; results were
    /// discarded
    SessionEnded,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::AssetMissing => write!(f, "Asset missing from library"),
            FetchError::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            FetchError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EncodeFailed(msg) => write!(f, "Encoding failed: {}", msg),
            ExportError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Configuration I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Configuration parse error: {}", msg),
        }
    }
}

impl fmt::Display for HandOffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandOffError::FetchFailed => write!(f, "Asset could not be resolved"),
            HandOffError::Export(e) => write!(f, "Export error: {}", e),
            HandOffError::SessionEnded => write!(f, "Session ended before hand-off completed"),
        }
    }
}

impl std::error::Error for FetchError {}
impl std::error::Error for ExportError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for HandOffError {}

impl From<ExportError> for HandOffError {
    fn from(err: ExportError) -> Self {
        HandOffError::Export(err)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FetchError::AssetMissing,
            _ => FetchError::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteFailed(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
