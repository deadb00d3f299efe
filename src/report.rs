//! # Optimization Results Module
//!
//! Strutture dati prodotte dall'ottimizzazione di singoli file e dai batch.
//!
//! ## Strutture dati:
//! - `OptimizationResult`: esito di un'ottimizzazione riuscita
//! - `BatchEntry`: esito di un file nel batch (ottimizzato o fallito)
//! - `BatchResult`: sequenza ordinata di entry più totali aggregati
//!
//! ## Totali aggregati:
//! I totali sommano solo le entry riuscite; i fallimenti contano solo nel
//! numero totale di file.

use crate::accounting;
use crate::preset::QualityLevel;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one successful optimization
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    pub original_size: u64,
    pub compressed_size: u64,
    /// Percentage reduction, negative if the output grew
    pub compression_ratio: f64,
    #[serde(with = "duration_secs")]
    pub elapsed: Duration,
    pub output_path: PathBuf,
    pub quality: QualityLevel,
}

impl OptimizationResult {
    pub fn bytes_saved(&self) -> i64 {
        accounting::bytes_saved(self.original_size, self.compressed_size)
    }

    /// Multi-line console report for single-file mode
    pub fn format_report(&self) -> String {
        format!(
            "Compressed size: {}\nSize reduction: {}%\nProcessing time: {:.2}s\nSaved: {}\nOutput: {}",
            accounting::humanize(self.compressed_size),
            self.compression_ratio,
            self.elapsed.as_secs_f64(),
            accounting::humanize_signed(self.bytes_saved()),
            self.output_path.display()
        )
    }
}

/// Per-file slot of a batch
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchEntry {
    Optimized {
        file: String,
        #[serde(flatten)]
        result: OptimizationResult,
    },
    Failed {
        file: String,
        error: String,
    },
}

impl BatchEntry {
    pub fn file(&self) -> &str {
        match self {
            BatchEntry::Optimized { file, .. } | BatchEntry::Failed { file, .. } => file,
        }
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        match self {
            BatchEntry::Optimized { result, .. } => Some(result),
            BatchEntry::Failed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result().is_some()
    }
}

/// Ordered outcomes of a batch run plus aggregate totals
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub total_original_size: u64,
    pub total_compressed_size: u64,
    pub success_count: usize,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, folding successful sizes into the totals
    pub fn push(&mut self, entry: BatchEntry) {
        if let Some(result) = entry.result() {
            self.total_original_size += result.original_size;
            self.total_compressed_size += result.compressed_size;
            self.success_count += 1;
        }
        self.entries.push(entry);
    }

    pub fn total_files(&self) -> usize {
        self.entries.len()
    }

    pub fn failure_count(&self) -> usize {
        self.total_files() - self.success_count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn overall_ratio(&self) -> f64 {
        accounting::ratio(self.total_original_size, self.total_compressed_size)
    }

    pub fn total_saved(&self) -> i64 {
        accounting::bytes_saved(self.total_original_size, self.total_compressed_size)
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Successfully processed: {}/{} files\nTotal original size: {}\nTotal compressed size: {}\nOverall compression: {}%\nTotal saved: {}",
            self.success_count,
            self.total_files(),
            accounting::humanize(self.total_original_size),
            accounting::humanize(self.total_compressed_size),
            self.overall_ratio(),
            accounting::humanize_signed(self.total_saved())
        )
    }
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimized(file: &str, original: u64, compressed: u64) -> BatchEntry {
        BatchEntry::Optimized {
            file: file.to_string(),
            result: OptimizationResult {
                original_size: original,
                compressed_size: compressed,
                compression_ratio: accounting::ratio(original, compressed),
                elapsed: Duration::from_millis(250),
                output_path: PathBuf::from("out").join(file),
                quality: QualityLevel::Medium,
            },
        }
    }

    #[test]
    fn test_totals_only_count_successes() {
        let mut batch = BatchResult::new();
        batch.push(optimized("a.pdf", 1000, 400));
        batch.push(BatchEntry::Failed {
            file: "b.pdf".to_string(),
            error: "Ghostscript failed with code 1: boom".to_string(),
        });
        batch.push(optimized("c.pdf", 3000, 1600));

        assert_eq!(batch.total_files(), 3);
        assert_eq!(batch.success_count, 2);
        assert_eq!(batch.failure_count(), 1);
        assert_eq!(batch.total_original_size, 4000);
        assert_eq!(batch.total_compressed_size, 2000);
        assert_eq!(batch.overall_ratio(), 50.0);
        assert_eq!(batch.total_saved(), 2000);

        let files: Vec<&str> = batch.entries.iter().map(BatchEntry::file).collect();
        assert_eq!(files, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = BatchResult::new();
        assert!(batch.is_empty());
        assert_eq!(batch.overall_ratio(), 0.0);
        assert!(batch.format_summary().contains("0/0 files"));
    }

    #[test]
    fn test_summary_mentions_totals() {
        let mut batch = BatchResult::new();
        batch.push(optimized("a.pdf", 2048, 1024));
        let summary = batch.format_summary();
        assert!(summary.contains("1/1 files"));
        assert!(summary.contains("Total original size: 2.00 KB"));
        assert!(summary.contains("Total compressed size: 1.00 KB"));
        assert!(summary.contains("Overall compression: 50%"));
        assert!(summary.contains("Total saved: 1.00 KB"));
    }

    #[test]
    fn test_entry_serializes_with_status_tag() {
        let json = serde_json::to_value(optimized("a.pdf", 100, 50)).unwrap();
        assert_eq!(json["status"], "optimized");
        assert_eq!(json["file"], "a.pdf");
        assert_eq!(json["compressed_size"], 50);
        assert_eq!(json["elapsed"], 0.25);
        assert_eq!(json["quality"], "medium");

        let failed = BatchEntry::Failed {
            file: "b.pdf".to_string(),
            error: "nope".to_string(),
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "nope");
    }

    #[test]
    fn test_result_report() {
        let entry = optimized("a.pdf", 1000, 1500);
        let report = entry.result().unwrap().format_report();
        assert!(report.contains("Size reduction: -50%"));
        assert!(report.contains("Saved: -500 Bytes"));
    }
}
