//! # File Management Module
//!
//! Questo modulo gestisce le operazioni sui file e la discovery dei documenti.
//!
//! ## Responsabilità:
//! - Discovery dei PDF direttamente contenuti in una directory (non ricorsiva)
//! - Riconoscimento dell'estensione `.pdf` case-insensitive
//! - Lettura della dimensione dei file
//! - Rimozione idempotente di file parziali
//!
//! ## Ordine:
//! I file vengono restituiti nell'ordine del listing del file system,
//! senza alcun riordinamento.
//!
//! ## Esempio:
//! ```ignore
//! let files = FileManager::find_documents(Path::new("/path/to/pdfs"))?;
//! for file in files {
//!     let size = FileManager::file_size(&file).await?;
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Extension of the documents this tool processes
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Manages file operations and discovery
pub struct FileManager;

impl FileManager {
    /// Size in bytes of a file
    pub async fn file_size(path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path).await?.len())
    }

    /// Whether `path` currently names a regular file
    pub async fn is_file(path: &Path) -> bool {
        fs::metadata(path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    /// Find the documents directly inside `dir`, in listing order.
    ///
    /// Symlinks are kept unless they point to a directory; a dangling link
    /// is returned too and fails later as a missing input.
    pub fn find_documents(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            let candidate = if entry.path_is_symlink() {
                !entry.path().is_dir()
            } else {
                entry.file_type().is_file()
            };
            if candidate && Self::is_document(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Check if a path has the document extension (case-insensitive)
    pub fn is_document(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(DOCUMENT_EXTENSION))
            .unwrap_or(false)
    }

    /// Remove a file if it exists; a missing file is not an error
    pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Whether two paths name the same existing file
    pub fn same_file(a: &Path, b: &Path) -> bool {
        match (a.canonicalize(), b.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_document() {
        assert!(FileManager::is_document(Path::new("report.pdf")));
        assert!(FileManager::is_document(Path::new("REPORT.PDF")));
        assert!(FileManager::is_document(Path::new("dir/scan.Pdf")));
        assert!(!FileManager::is_document(Path::new("notes.txt")));
        assert!(!FileManager::is_document(Path::new("pdf")));
        assert!(!FileManager::is_document(Path::new("archive.pdf.zip")));
    }

    #[test]
    fn test_find_documents_filters_and_does_not_recurse() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("a.pdf"), b"a").unwrap();
        std::fs::write(root.join("B.PDF"), b"b").unwrap();
        std::fs::write(root.join("notes.txt"), b"n").unwrap();
        std::fs::create_dir(root.join("nested.pdf")).unwrap();
        std::fs::write(root.join("nested.pdf").join("inner.pdf"), b"i").unwrap();

        let mut names: Vec<String> = FileManager::find_documents(root)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();

        assert_eq!(names, vec!["B.PDF".to_string(), "a.pdf".to_string()]);
    }

    #[test]
    fn test_find_documents_keeps_listing_order() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["c.pdf", "a.pdf", "b.pdf", "skip.txt"] {
            std::fs::write(temp_dir.path().join(name), name).unwrap();
        }

        let listing: Vec<PathBuf> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| FileManager::is_document(path))
            .collect();

        assert_eq!(FileManager::find_documents(temp_dir.path()).unwrap(), listing);
    }

    #[test]
    fn test_find_documents_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(FileManager::find_documents(&temp_dir.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_documents_includes_symlinked_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().join("store");
        let input = temp_dir.path().join("in");
        std::fs::create_dir(&store).unwrap();
        std::fs::create_dir(&input).unwrap();
        std::fs::write(store.join("real.pdf"), b"r").unwrap();
        std::fs::create_dir(store.join("folder.pdf")).unwrap();
        std::fs::write(input.join("plain.pdf"), b"p").unwrap();
        std::os::unix::fs::symlink(store.join("real.pdf"), input.join("linked.pdf")).unwrap();
        std::os::unix::fs::symlink(store.join("folder.pdf"), input.join("dir-link.pdf")).unwrap();
        std::os::unix::fs::symlink(store.join("gone.pdf"), input.join("dangling.pdf")).unwrap();

        let mut names: Vec<String> = FileManager::find_documents(&input)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();

        assert_eq!(names, vec!["dangling.pdf", "linked.pdf", "plain.pdf"]);
    }

    #[tokio::test]
    async fn test_file_size_and_remove() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.pdf");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        assert_eq!(FileManager::file_size(&path).await.unwrap(), 2048);
        assert!(FileManager::is_file(&path).await);
        assert!(!FileManager::is_file(temp_dir.path()).await);

        assert!(FileManager::remove_if_exists(&path).unwrap());
        assert!(!FileManager::remove_if_exists(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_same_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.pdf");
        std::fs::write(&path, b"x").unwrap();

        let dotted = temp_dir.path().join(".").join("doc.pdf");
        assert!(FileManager::same_file(&path, &dotted));
        assert!(!FileManager::same_file(&path, &temp_dir.path().join("other.pdf")));
    }
}
