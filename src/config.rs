// SPDX-License-Identifier: GPL-3.0-only

//! User configuration
//!
//! Stored as JSON under the user's config directory. Loading never blocks
//! the picker: a missing or corrupt file falls back to defaults with a
//! logged warning.

use crate::constants::QualityPreset;
use crate::errors::ConfigError;
use crate::pipelines::EncodingFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Format for exported photos
    pub export_format: EncodingFormat,
    /// JPEG quality preset (ignored for PNG)
    pub quality: QualityPreset,
    /// Override for the export namespace (system temp dir when unset)
    pub export_dir: Option<PathBuf>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            export_format: EncodingFormat::default(),
            quality: QualityPreset::default(),
            export_dir: None,
        }
    }
}

impl PickerConfig {
    /// Location of the config file, if a config directory exists
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("picker").join("config.json"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Falling back to default config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()
            .ok_or_else(|| ConfigError::Io("no config directory".to_string()))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exports_jpeg() {
        let config = PickerConfig::default();
        assert_eq!(config.export_format, EncodingFormat::Jpeg);
        assert_eq!(config.quality, QualityPreset::Balanced);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = PickerConfig {
            export_format: EncodingFormat::Png,
            quality: QualityPreset::Maximum,
            export_dir: Some(PathBuf::from("/tmp/picked")),
        };
        config.save_to(&path).unwrap();

        assert_eq!(PickerConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            PickerConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
