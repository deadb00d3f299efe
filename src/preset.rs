//! # Quality Presets Module
//!
//! Tabella fissa dei preset di qualità e dei parametri Ghostscript associati.
//!
//! ## Preset disponibili:
//! - `high`: 150 dpi, qualità 90, `/printer` (compressione minima)
//! - `medium`: 100 dpi, qualità 80, `/ebook` (bilanciato, default)
//! - `low`: 75 dpi, qualità 60, `/screen` (compressione massima)
//! - `web`: 75 dpi, qualità 75, `/screen` (visualizzazione web)
//!
//! ## Risoluzione:
//! Un identificatore sconosciuto o assente viene sempre normalizzato a
//! `medium` prima di arrivare al motore.
//!
//! ## Esempio:
//! ```ignore
//! let preset = QualityPreset::resolve(Some("web"));
//! assert_eq!(preset.dpi, 75);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing quality identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    High,
    #[default]
    Medium,
    Low,
    Web,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 4] = [
        QualityLevel::High,
        QualityLevel::Medium,
        QualityLevel::Low,
        QualityLevel::Web,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::High => "high",
            QualityLevel::Medium => "medium",
            QualityLevel::Low => "low",
            QualityLevel::Web => "web",
        }
    }

    /// Parse an identifier, case-insensitively. `None` for anything unknown.
    pub fn parse(identifier: &str) -> Option<Self> {
        let identifier = identifier.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(identifier))
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ghostscript `-dPDFSETTINGS` tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionTier {
    Printer,
    Ebook,
    Screen,
}

impl CompressionTier {
    pub fn pdf_settings(&self) -> &'static str {
        match self {
            CompressionTier::Printer => "/printer",
            CompressionTier::Ebook => "/ebook",
            CompressionTier::Screen => "/screen",
        }
    }
}

/// Engine parameters bundled under one quality identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityPreset {
    pub level: QualityLevel,
    /// Target raster resolution in dots per inch
    pub dpi: u32,
    /// Image quality hint (1-100)
    pub image_quality: u8,
    pub tier: CompressionTier,
}

impl QualityPreset {
    /// Preset for a known level
    pub const fn for_level(level: QualityLevel) -> Self {
        match level {
            QualityLevel::High => Self {
                level,
                dpi: 150,
                image_quality: 90,
                tier: CompressionTier::Printer,
            },
            QualityLevel::Medium => Self {
                level,
                dpi: 100,
                image_quality: 80,
                tier: CompressionTier::Ebook,
            },
            QualityLevel::Low => Self {
                level,
                dpi: 75,
                image_quality: 60,
                tier: CompressionTier::Screen,
            },
            QualityLevel::Web => Self {
                level,
                dpi: 75,
                image_quality: 75,
                tier: CompressionTier::Screen,
            },
        }
    }

    /// Look up a preset by identifier. Never fails: unknown or missing
    /// identifiers yield the `medium` preset.
    pub fn resolve(identifier: Option<&str>) -> Self {
        let level = identifier
            .and_then(QualityLevel::parse)
            .unwrap_or_default();
        Self::for_level(level)
    }
}

impl Default for QualityPreset {
    fn default() -> Self {
        Self::for_level(QualityLevel::default())
    }
}
