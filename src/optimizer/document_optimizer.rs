//! # Document Optimizer Module
//!
//! Worker per l'ottimizzazione di un singolo documento.
//!
//! ## Procedura:
//! 1. Verifica che l'input esista (altrimenti `InputNotFound`, senza toccare il motore)
//! 2. Rifiuta un output che coincide con l'input
//! 3. Registra dimensione originale e istante di partenza
//! 4. Arma la `OutputGuard` sul path di output
//! 5. Invoca il motore con il preset risolto
//! 6. Verifica che l'output esista (altrimenti `OutputMissing`)
//! 7. Calcola dimensione compressa, durata e ratio, poi conferma la guardia

use crate::{
    accounting,
    engine::Engine,
    error::OptimizeError,
    file_manager::FileManager,
    optimizer::output_guard::OutputGuard,
    preset::QualityPreset,
    report::OptimizationResult,
};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Optimizes one document at a time through an [`Engine`]
pub struct DocumentOptimizer<E> {
    engine: E,
}

impl<E: Engine> DocumentOptimizer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Optimize `input` into `output` with the preset named by `quality`
    pub async fn optimize(
        &self,
        input: &Path,
        output: &Path,
        quality: Option<&str>,
    ) -> Result<OptimizationResult, OptimizeError> {
        if !FileManager::is_file(input).await {
            return Err(OptimizeError::InputNotFound(input.to_path_buf()));
        }
        if FileManager::same_file(input, output) {
            return Err(OptimizeError::InvalidOutput(output.to_path_buf()));
        }

        let preset = QualityPreset::resolve(quality);
        let original_size = FileManager::file_size(input).await?;

        debug!(
            "Optimizing {} ({}, quality: {})",
            input.file_name().unwrap_or_default().to_string_lossy(),
            accounting::humanize(original_size),
            preset.level
        );

        let start_time = Instant::now();
        let guard = OutputGuard::arm(output);

        self.engine.invoke(input, output, &preset).await?;

        if !FileManager::is_file(guard.path()).await {
            return Err(OptimizeError::OutputMissing(output.to_path_buf()));
        }

        let compressed_size = FileManager::file_size(guard.path()).await?;
        let elapsed = start_time.elapsed();
        let compression_ratio = accounting::ratio(original_size, compressed_size);

        debug!(
            "{} -> {} bytes ({}%) in {:.2}s",
            original_size,
            compressed_size,
            compression_ratio,
            elapsed.as_secs_f64()
        );

        guard.commit();

        Ok(OptimizationResult {
            original_size,
            compressed_size,
            compression_ratio,
            elapsed,
            output_path: output.to_path_buf(),
            quality: preset.level,
        })
    }
}
