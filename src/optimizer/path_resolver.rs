//! # Path Resolution Module
//!
//! Centralizza la logica di calcolo dei path di output.
//! Usata sia dalla modalità singolo file sia dal batch.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::file_manager::DOCUMENT_EXTENSION;

/// Suffix appended to the file stem when no output path is given
pub const OPTIMIZED_SUFFIX: &str = "_optimized";

/// Utility per calcolare i path di output in modo centralizzato
pub struct PathResolver;

impl PathResolver {
    /// Default output for single-file mode: `<stem>_optimized.<ext>` next to the input
    pub fn default_output_path(input_path: &Path) -> PathBuf {
        let file_stem = input_path.file_stem().unwrap_or_default().to_string_lossy();
        let extension = input_path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_else(|| DOCUMENT_EXTENSION.to_string());

        let filename = format!("{}{}.{}", file_stem, OPTIMIZED_SUFFIX, extension);
        let result = input_path.with_file_name(filename);
        debug!("Default output path: {} -> {}", input_path.display(), result.display());
        result
    }

    /// Batch output: same filename under `output_dir`
    pub fn batch_output_path(input_path: &Path, output_dir: &Path) -> PathBuf {
        match input_path.file_name() {
            Some(name) => output_dir.join(name),
            None => output_dir.to_path_buf(),
        }
    }

    /// Crea le directory (anche intermedie) se necessario
    pub async fn ensure_dir(dir: &Path) -> std::io::Result<()> {
        tokio::fs::create_dir_all(dir).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            PathResolver::default_output_path(Path::new("docs/report.pdf")),
            PathBuf::from("docs/report_optimized.pdf")
        );
        assert_eq!(
            PathResolver::default_output_path(Path::new("SCAN.PDF")),
            PathBuf::from("SCAN_optimized.PDF")
        );
        assert_eq!(
            PathResolver::default_output_path(Path::new("archive.v2.pdf")),
            PathBuf::from("archive.v2_optimized.pdf")
        );
    }

    #[test]
    fn test_default_output_path_without_extension() {
        assert_eq!(
            PathResolver::default_output_path(Path::new("/tmp/manual")),
            PathBuf::from("/tmp/manual_optimized.pdf")
        );
    }

    #[test]
    fn test_batch_output_path() {
        assert_eq!(
            PathResolver::batch_output_path(Path::new("in/a.pdf"), Path::new("out")),
            PathBuf::from("out/a.pdf")
        );
    }

    #[tokio::test]
    async fn test_ensure_dir_is_idempotent() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let nested = temp_dir.path().join("x").join("y").join("z");

        PathResolver::ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        PathResolver::ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }
}
