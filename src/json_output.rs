//! # JSON Output Module
//!
//! Questo modulo gestisce l'output strutturato in JSON per l'uso programmatico.
//!
//! ## Responsabilità:
//! - Emette messaggi JSON strutturati (uno per riga) su stdout
//! - Riusa le strutture di `report` per file e batch
//! - Implementa `BatchProgress` per la modalità `--json`
//!
//! ## Tipi di messaggi:
//! - `start`: inizio del batch
//! - `file_start`: inizio elaborazione di un file
//! - `file_complete`: fine elaborazione di un file (ottimizzato o fallito)
//! - `complete`: fine del batch con i totali
//! - `optimized`: esito della modalità singolo file
//! - `error`: errore fatale

use crate::progress::BatchProgress;
use crate::report::{BatchEntry, BatchResult, OptimizationResult};
use crate::preset::QualityLevel;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Tipo di messaggio JSON
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonMessage {
    /// Inizio del batch
    Start {
        input_dir: PathBuf,
        output_dir: PathBuf,
        total_files: usize,
        quality: QualityLevel,
    },

    /// Inizio elaborazione di un file specifico
    FileStart {
        path: PathBuf,
        index: usize,
        total: usize,
    },

    /// Fine elaborazione di un file specifico
    FileComplete {
        index: usize,
        total: usize,
        entry: BatchEntry,
    },

    /// Batch completato
    Complete {
        files_succeeded: usize,
        total_files: usize,
        total_original_size: u64,
        total_compressed_size: u64,
        overall_ratio: f64,
        total_saved: i64,
    },

    /// Singolo file completato
    Optimized {
        input: PathBuf,
        result: OptimizationResult,
    },

    /// Errore fatale
    Error { message: String },
}

impl JsonMessage {
    /// Emette il messaggio JSON su stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    /// Crea un messaggio di completamento dal risultato del batch
    pub fn complete(result: &BatchResult) -> Self {
        Self::Complete {
            files_succeeded: result.success_count,
            total_files: result.total_files(),
            total_original_size: result.total_original_size,
            total_compressed_size: result.total_compressed_size,
            overall_ratio: result.overall_ratio(),
            total_saved: result.total_saved(),
        }
    }

    /// Crea un messaggio di errore
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// `BatchProgress` che emette eventi JSON
pub struct JsonProgress {
    quality: QualityLevel,
}

impl JsonProgress {
    pub fn new(quality: QualityLevel) -> Self {
        Self { quality }
    }
}

impl BatchProgress for JsonProgress {
    fn on_start(&self, input_dir: &Path, output_dir: &Path, total: usize) {
        JsonMessage::Start {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            total_files: total,
            quality: self.quality,
        }
        .emit();
    }

    fn on_file_start(&self, index: usize, total: usize, path: &Path) {
        JsonMessage::FileStart {
            path: path.to_path_buf(),
            index,
            total,
        }
        .emit();
    }

    fn on_file_complete(&self, index: usize, total: usize, entry: &BatchEntry) {
        JsonMessage::FileComplete {
            index,
            total,
            entry: entry.clone(),
        }
        .emit();
    }

    fn on_finish(&self, result: &BatchResult) {
        JsonMessage::complete(result).emit();
    }
}
