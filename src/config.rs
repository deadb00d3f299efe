//! # Configuration Management Module
//!
//! Questo modulo gestisce la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con tutti i parametri di esecuzione
//! - Fornisce validazione dei parametri di input
//! - Fornisce valori di default sensati per tutti i parametri
//!
//! La configurazione arriva solo dagli argomenti CLI: nessuna variabile
//! d'ambiente, nessuno stato persistito.
//!
//! ## Parametri di configurazione:
//! - `quality`: Identificatore del preset (default: "medium")
//! - `engine_program`: Eseguibile Ghostscript (default: "gs", "gswin64c" su Windows)
//! - `timeout_secs`: Timeout per singola invocazione (default: None = nessun limite)
//! - `json_output`: Eventi JSON su stdout invece della progress bar
//! - `verbose`: Logging DEBUG
//!
//! ## Esempio:
//! ```ignore
//! let config = Config {
//!     quality: "web".to_string(),
//!     timeout_secs: Some(300),
//!     ..Default::default()
//! };
//! config.validate()?;
//! ```

use crate::platform;
use crate::preset::QualityPreset;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for document optimization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Quality preset identifier (high, medium, low, web)
    pub quality: String,
    /// Ghostscript executable name or path
    pub engine_program: String,
    /// Upper bound for a single Ghostscript run, in seconds
    pub timeout_secs: Option<u64>,
    /// Output progress and status as JSON for programmatic use
    pub json_output: bool,
    /// Verbose logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quality: "medium".to_string(),
            engine_program: platform::default_engine_program().to_string(),
            timeout_secs: None,
            json_output: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.engine_program.trim().is_empty() {
            return Err(anyhow::anyhow!("Ghostscript program must not be empty"));
        }

        if self.timeout_secs == Some(0) {
            return Err(anyhow::anyhow!("Timeout must be greater than 0 seconds"));
        }

        Ok(())
    }

    /// Per-invocation timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Preset the quality identifier resolves to
    pub fn preset(&self) -> QualityPreset {
        QualityPreset::resolve(Some(self.quality.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::QualityLevel;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.timeout_secs = Some(0);
        assert!(config.validate().is_err());

        config.timeout_secs = Some(30);
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));

        config.engine_program = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.quality, "medium");
        assert_eq!(config.engine_program, platform::default_engine_program());
        assert_eq!(config.timeout(), None);
        assert!(!config.json_output);
        assert!(!config.verbose);
    }

    #[test]
    fn test_unknown_quality_resolves_to_medium() {
        let config = Config {
            quality: "extreme".to_string(),
            ..Default::default()
        };
        assert_eq!(config.preset().level, QualityLevel::Medium);
    }
}
