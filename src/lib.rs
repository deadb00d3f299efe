//! # PDF Optimizer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per altri consumatori
//!
//! ## Architettura dei moduli:
//! - `config`: Configurazione e validazione parametri
//! - `error`: Tipi di errore custom
//! - `preset`: Tabella dei preset di qualità
//! - `engine`: Invocazione di Ghostscript e controllo preliminare
//! - `accounting`: Dimensioni leggibili e percentuali di riduzione
//! - `file_manager`: Operazioni sui file e discovery dei PDF
//! - `optimizer`: Ottimizzazione singolo file e batch
//! - `report`: Risultati per file e per batch
//! - `progress` / `json_output`: Feedback durante il batch
//! - `platform`: Nome dell'eseguibile e istruzioni di installazione
//!
//! ## Utilizzo:
//! ```ignore
//! use pdf_optimizer::{BatchOptimizer, Config, Ghostscript};
//!
//! let config = Config::default();
//! let engine = Ghostscript::detect(&config).await?;
//! let batch = BatchOptimizer::new(engine);
//! let result = batch.optimize_all(&input_dir, &output_dir, Some("web"), &()).await?;
//! ```

pub mod accounting;
pub mod config;
pub mod engine;
pub mod error;
pub mod file_manager;
pub mod json_output;
pub mod optimizer;
pub mod platform;
pub mod preset;
pub mod progress;
pub mod report;

pub use config::Config;
pub use engine::{Engine, Ghostscript};
pub use error::{EngineError, OptimizeError};
pub use optimizer::{BatchOptimizer, DocumentOptimizer};
pub use preset::{QualityLevel, QualityPreset};
pub use report::{BatchEntry, BatchResult, OptimizationResult};
