// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use serde::{Deserialize, Serialize};

/// Directory name of the export namespace under the system temp dir
pub const EXPORT_DIR_NAME: &str = "picker-exports";

/// JPEG quality presets for exported photos
///
/// Users trade file size against quality; PNG export is lossless and
/// ignores the preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QualityPreset {
    /// High compression, smaller artifacts
    Low,
    /// Balanced quality and file size (default)
    #[default]
    Balanced,
    /// Low compression, larger artifacts
    High,
    /// Minimal compression
    Maximum,
}

impl QualityPreset {
    /// All preset variants for UI iteration
    pub const ALL: [QualityPreset; 4] = [
        QualityPreset::Low,
        QualityPreset::Balanced,
        QualityPreset::High,
        QualityPreset::Maximum,
    ];

    /// Display name for the preset
    pub fn display_name(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Balanced => "Balanced",
            QualityPreset::High => "High",
            QualityPreset::Maximum => "Maximum",
        }
    }

    /// JPEG quality value (0-100)
    pub fn jpeg_quality(&self) -> u8 {
        match self {
            QualityPreset::Low => 60,
            QualityPreset::Balanced => 80,
            QualityPreset::High => 92,
            QualityPreset::Maximum => 98,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_quality_values() {
        assert_eq!(QualityPreset::Low.jpeg_quality(), 60);
        assert_eq!(QualityPreset::Balanced.jpeg_quality(), 80);
        assert_eq!(QualityPreset::High.jpeg_quality(), 92);
        assert_eq!(QualityPreset::Maximum.jpeg_quality(), 98);
    }

    #[test]
    fn test_all_lists_every_preset() {
        assert_eq!(QualityPreset::ALL.len(), 4);
        assert!(QualityPreset::ALL.contains(&QualityPreset::default()));
    }
}
