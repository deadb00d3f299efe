//! # Error Types Module
//!
//! Questo modulo definisce i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `OptimizeError` per tutti i fallimenti dell'ottimizzazione
//! - Definisce `EngineError` per i fallimenti del processo Ghostscript
//! - Messaggi su una sola riga, adatti allo stream di errore della CLI
//!
//! ## Categorie di errori:
//! - `DependencyMissing`: Ghostscript non invocabile (fatale, prima di ogni lavoro)
//! - `InputNotFound`: file di input assente (fatale solo per quel file in batch)
//! - `EngineInvocationFailed`: exit code non zero, timeout o launch fallito
//! - `OutputMissing`: il motore dice successo ma non ha scritto nulla
//! - `DirectoryNotFound`: directory di input del batch assente
//! - `InvalidOutput`: output coincide con l'input
//! - `Io`: errori di I/O generici
//!
//! ## Esempio:
//! ```ignore
//! if !input.is_file() {
//!     return Err(OptimizeError::InputNotFound(input.to_path_buf()));
//! }
//! ```

use std::path::PathBuf;
use std::time::Duration;

/// Failures of a single Ghostscript invocation
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Ghostscript failed with {}: {}", describe_code(.code), last_line(.diagnostics))]
    Exit {
        code: Option<i32>,
        diagnostics: String,
    },

    #[error("Ghostscript timed out after {}s", .0.as_secs_f64())]
    TimedOut(Duration),

    #[error("IO error while running Ghostscript: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Exit code of the engine process, when it exited on its own
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            EngineError::Exit { code, .. } => *code,
            _ => None,
        }
    }

    /// Full diagnostic text captured from the engine, if any
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            EngineError::Exit { diagnostics, .. } => Some(diagnostics),
            _ => None,
        }
    }
}

/// Custom error types for document optimization
#[derive(thiserror::Error, Debug)]
pub enum OptimizeError {
    #[error("Dependency missing: {0}")]
    DependencyMissing(String),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error(transparent)]
    EngineInvocationFailed(#[from] EngineError),

    #[error("Output file was not created: {}", .0.display())]
    OutputMissing(PathBuf),

    #[error("Input directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Output path would overwrite the input: {}", .0.display())]
    InvalidOutput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OptimizeError {
    /// Exit code carried by an engine failure
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            OptimizeError::EngineInvocationFailed(e) => e.exit_code(),
            _ => None,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

// Keeps Display on one line; the full text stays in `diagnostics`.
fn last_line(diagnostics: &str) -> &str {
    diagnostics
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("no diagnostic output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_error_is_one_line() {
        let err = EngineError::Exit {
            code: Some(1),
            diagnostics: "GPL Ghostscript 10.02\n**** Unable to open the initial device\n\n".to_string(),
        };
        let message = err.to_string();
        assert!(!message.contains('\n'));
        assert_eq!(
            message,
            "Ghostscript failed with code 1: **** Unable to open the initial device"
        );
        assert_eq!(err.exit_code(), Some(1));
        assert!(err.diagnostics().unwrap().starts_with("GPL Ghostscript"));
    }

    #[test]
    fn test_exit_error_without_output() {
        let err = EngineError::Exit {
            code: None,
            diagnostics: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "Ghostscript failed with no exit code (terminated by signal): no diagnostic output"
        );
    }

    #[test]
    fn test_exit_code_through_optimize_error() {
        let err: OptimizeError = EngineError::Exit {
            code: Some(255),
            diagnostics: "boom".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), Some(255));
        assert_eq!(OptimizeError::OutputMissing(PathBuf::from("x.pdf")).exit_code(), None);
    }
}
