//! # Output Guard Module
//!
//! Garanzia di cleanup dell'output parziale: la guardia viene armata sul
//! path di output prima di invocare il motore e, se non viene confermata
//! con `commit()`, rimuove il file al momento del drop. Vale per ogni
//! percorso di uscita, inclusi i `?` e gli early return.

use crate::file_manager::FileManager;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Removes the file at `path` on drop unless committed
#[derive(Debug)]
pub struct OutputGuard {
    path: PathBuf,
    committed: bool,
}

impl OutputGuard {
    pub fn arm(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            committed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the output: the run succeeded
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match FileManager::remove_if_exists(&self.path) {
            Ok(true) => debug!("Removed partial output: {}", self.path.display()),
            Ok(false) => {}
            Err(e) => warn!("Failed to remove partial output {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_uncommitted_guard_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.pdf");
        std::fs::write(&path, b"%PDF-1.4 trunc").unwrap();

        {
            let guard = OutputGuard::arm(&path);
            assert_eq!(guard.path(), path.as_path());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_committed_guard_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("done.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        OutputGuard::arm(&path).commit();
        assert!(path.exists());
    }

    #[test]
    fn test_guard_on_missing_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("never-written.pdf");
        drop(OutputGuard::arm(&path));
        assert!(!path.exists());
    }

    #[test]
    fn test_guard_runs_on_early_return() {
        fn run(path: &Path, crash: bool) -> Result<(), String> {
            let guard = OutputGuard::arm(path);
            std::fs::write(path, b"half").map_err(|e| e.to_string())?;
            if crash {
                return Err("engine crashed".to_string());
            }
            guard.commit();
            Ok(())
        }

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("early.pdf");
        assert!(run(&path, true).is_err());
        assert!(!path.exists());

        assert!(run(&path, false).is_ok());
        assert!(path.exists());
    }
}
