//! # Progress Reporting Module
//!
//! Questo modulo gestisce il feedback di avanzamento durante i batch.
//!
//! ## Responsabilità:
//! - Trait `BatchProgress` con hook no-op di default (start, file, fine)
//! - Progress bar visuale con `indicatif` per la modalità console
//! - Righe di stato per ogni file e riepilogo finale
//!
//! ## Implementazioni:
//! - `()`: silenziosa, usata dai test e dall'uso come libreria
//! - `ConsoleProgress`: progress bar + righe `[i/N] Processing <file>`
//! - `JsonProgress` (in `json_output`): eventi JSON su stdout
//!
//! ## Visual feedback:
//! ```text
//! ⠋ [00:00:12] [=========>------------------------------] 3/12 (25%) report.pdf
//! ```

use crate::accounting;
use crate::report::{BatchEntry, BatchResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Observer of a batch run. All hooks default to doing nothing.
pub trait BatchProgress {
    fn on_start(&self, _input_dir: &Path, _output_dir: &Path, _total: usize) {}

    fn on_file_start(&self, _index: usize, _total: usize, _path: &Path) {}

    fn on_file_complete(&self, _index: usize, _total: usize, _entry: &BatchEntry) {}

    fn on_finish(&self, _result: &BatchResult) {}
}

impl BatchProgress for () {}

/// Manages the progress bar
#[derive(Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);

        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Print a line to stdout with the bar cleared out of the way.
    /// `ProgressBar::println` is a no-op when the bar is hidden.
    pub fn println(&self, message: &str) {
        self.bar.suspend(|| println!("{}", message));
    }

    /// Set a custom message without incrementing
    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Advance by one file
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Console reporter: progress bar plus one line per file and a summary
pub struct ConsoleProgress {
    manager: std::sync::OnceLock<ProgressManager>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            manager: std::sync::OnceLock::new(),
        }
    }

    fn println(&self, message: &str) {
        match self.manager.get() {
            Some(manager) => manager.println(message),
            None => println!("{}", message),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgress for ConsoleProgress {
    fn on_start(&self, input_dir: &Path, output_dir: &Path, total: usize) {
        if total == 0 {
            println!("No PDF files found in input directory");
            return;
        }
        println!("Starting batch optimization of {} files", total);
        println!("Input directory: {}", input_dir.display());
        println!("Output directory: {}", output_dir.display());
        let _ = self.manager.set(ProgressManager::new(total as u64));
    }

    fn on_file_start(&self, index: usize, total: usize, path: &Path) {
        self.println(&file_start_line(index, total, path));
        if let Some(manager) = self.manager.get() {
            manager.set_message(&path.file_name().unwrap_or_default().to_string_lossy());
        }
    }

    fn on_file_complete(&self, _index: usize, _total: usize, entry: &BatchEntry) {
        self.println(&file_complete_line(entry));
        if let Some(manager) = self.manager.get() {
            manager.inc();
        }
    }

    fn on_finish(&self, result: &BatchResult) {
        if let Some(manager) = self.manager.get() {
            manager.finish();
        }
        if result.is_empty() {
            return;
        }
        println!("{}", "=".repeat(60));
        println!("BATCH OPTIMIZATION SUMMARY");
        println!("{}", "=".repeat(60));
        println!("{}", result.format_summary());
    }
}

/// `[i/N] Processing <file>`, with a 1-based index
pub fn file_start_line(index: usize, total: usize, path: &Path) -> String {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    format!("[{}/{}] Processing {}", index + 1, total, name)
}

pub fn file_complete_line(entry: &BatchEntry) -> String {
    match entry {
        BatchEntry::Optimized { file, result } => format!(
            "  {}: {} -> {} ({}%)",
            file,
            accounting::humanize(result.original_size),
            accounting::humanize(result.compressed_size),
            result.compression_ratio
        ),
        BatchEntry::Failed { file, error } => format!("  Failed to optimize {}: {}", file, error),
    }
}
