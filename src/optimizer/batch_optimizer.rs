//! # Batch Optimizer Module
//!
//! Orchestratore principale per l'ottimizzazione di una directory.
//!
//! ## Flusso di esecuzione:
//! 1. **Precondizioni**: la directory di input deve esistere (`DirectoryNotFound`)
//! 2. **Output**: crea la directory di output (idempotente)
//! 3. **Discovery**: trova i PDF nell'ordine del listing, senza riordinare
//! 4. **Processing**: un file alla volta, al massimo un processo Ghostscript vivo
//! 5. **Isolamento**: un errore viene registrato nello slot del file e il batch continua
//! 6. **Statistiche**: totali calcolati solo sulle entry riuscite
//!
//! Nessun file trovato: risultato vuoto, motore mai invocato.

use crate::{
    engine::Engine,
    error::OptimizeError,
    file_manager::FileManager,
    optimizer::{document_optimizer::DocumentOptimizer, path_resolver::PathResolver},
    progress::BatchProgress,
    report::{BatchEntry, BatchResult},
};
use std::path::Path;
use tracing::{debug, info};

/// Runs the document optimizer over every PDF of a directory
pub struct BatchOptimizer<E> {
    optimizer: DocumentOptimizer<E>,
}

impl<E: Engine> BatchOptimizer<E> {
    pub fn new(engine: E) -> Self {
        Self {
            optimizer: DocumentOptimizer::new(engine),
        }
    }

    pub fn engine(&self) -> &E {
        self.optimizer.engine()
    }

    /// Optimize every document in `input_dir` into `output_dir`
    pub async fn optimize_all(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        quality: Option<&str>,
        progress: &dyn BatchProgress,
    ) -> Result<BatchResult, OptimizeError> {
        let is_dir = tokio::fs::metadata(input_dir)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(OptimizeError::DirectoryNotFound(input_dir.to_path_buf()));
        }

        PathResolver::ensure_dir(output_dir).await?;

        let files = FileManager::find_documents(input_dir)?;
        let total = files.len();
        progress.on_start(input_dir, output_dir, total);

        let mut batch = BatchResult::new();

        if files.is_empty() {
            info!("No PDF files found in {}", input_dir.display());
            progress.on_finish(&batch);
            return Ok(batch);
        }

        info!("Found {} PDF files in {}", total, input_dir.display());

        for (index, file_path) in files.into_iter().enumerate() {
            progress.on_file_start(index, total, &file_path);
            let entry = self.process_file(&file_path, output_dir, quality).await;
            progress.on_file_complete(index, total, &entry);
            batch.push(entry);
        }

        debug!(
            "Batch finished: {}/{} succeeded",
            batch.success_count,
            batch.total_files()
        );
        progress.on_finish(&batch);

        Ok(batch)
    }

    /// Optimize one file, turning any failure into a `Failed` entry
    async fn process_file(
        &self,
        file_path: &Path,
        output_dir: &Path,
        quality: Option<&str>,
    ) -> BatchEntry {
        let file = file_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let output_path = PathResolver::batch_output_path(file_path, output_dir);

        match self.optimizer.optimize(file_path, &output_path, quality).await {
            Ok(result) => BatchEntry::Optimized { file, result },
            Err(e) => {
                debug!("Failed to optimize {}: {}", file, e);
                BatchEntry::Failed {
                    file,
                    error: e.to_string(),
                }
            }
        }
    }
}
