//! # Ghostscript Engine Module
//!
//! Questo modulo gestisce l'invocazione del motore esterno (Ghostscript).
//!
//! ## Responsabilità:
//! - Verifica preliminare che Ghostscript sia invocabile (`Ghostscript::detect`)
//! - Costruzione del vettore di argomenti a partire dal preset
//! - Avvio del processo figlio con stdin/stdout/stderr in pipe
//! - Raccolta incrementale dello stream diagnostico (stderr)
//! - Risoluzione del risultato dall'exit code
//!
//! ## Argomenti Ghostscript:
//! - Device `pdfwrite`, compatibilità PDF 1.4, tier `-dPDFSETTINGS` del preset
//! - Stessa risoluzione per immagini a colori, grigi e monocromatiche
//! - Downsampling bicubico con soglia fissa 1.5
//! - Font embedded, subset e compressi; rilevamento immagini duplicate
//!
//! ## Stream diagnostico:
//! Lo stderr viene letto riga per riga mentre il processo gira, così un
//! output diagnostico grande non riempie la pipe bloccando il figlio.
//!
//! ## Esempio:
//! ```ignore
//! let engine = Ghostscript::detect(&config).await?;
//! engine.invoke(&input, &output, &QualityPreset::resolve(Some("web"))).await?;
//! ```

use crate::config::Config;
use crate::error::{EngineError, OptimizeError};
use crate::preset::QualityPreset;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{ChildStderr, Command};
use tracing::{debug, warn};

/// Flags shared by every preset
const FIXED_FLAGS: &[&str] = &[
    "-sDEVICE=pdfwrite",
    "-dCompatibilityLevel=1.4",
    "-dNOPAUSE",
    "-dQUIET",
    "-dBATCH",
];

const DOWNSAMPLE_THRESHOLD: &str = "1.5";

/// An external engine able to rewrite one document into another
#[async_trait]
pub trait Engine: Send + Sync {
    /// Rewrite `input` into `output` using the parameters of `preset`
    async fn invoke(
        &self,
        input: &Path,
        output: &Path,
        preset: &QualityPreset,
    ) -> Result<(), EngineError>;
}

/// Handle to a Ghostscript binary that passed the preflight check.
///
/// The only way to obtain one is [`Ghostscript::detect`].
#[derive(Debug, Clone)]
pub struct Ghostscript {
    program: String,
    version: String,
    timeout: Option<Duration>,
}

impl Ghostscript {
    /// Verify that the configured Ghostscript binary can be invoked
    pub async fn detect(config: &Config) -> Result<Self, OptimizeError> {
        let program = config.engine_program.clone();
        debug!("Checking for Ghostscript: {} --version", program);

        let output = Command::new(&program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                OptimizeError::DependencyMissing(format!("'{}' could not be started: {}", program, e))
            })?;

        if !output.status.success() {
            return Err(OptimizeError::DependencyMissing(format!(
                "'{} --version' exited with {}",
                program, output.status
            )));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("Ghostscript {} found at '{}'", version, program);

        Ok(Self {
            program,
            version,
            timeout: config.timeout(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Version string reported by `--version`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Build the full Ghostscript argument vector for one document
    pub fn build_args(input: &Path, output: &Path, preset: &QualityPreset) -> Vec<String> {
        let dpi = preset.dpi;
        let mut args: Vec<String> = FIXED_FLAGS.iter().map(|flag| flag.to_string()).collect();

        args.insert(2, format!("-dPDFSETTINGS={}", preset.tier.pdf_settings()));
        args.push(format!("-r{}", dpi));

        for channel in ["Color", "Gray", "Mono"] {
            args.push(format!("-d{}ImageResolution={}", channel, dpi));
        }
        for channel in ["Color", "Gray", "Mono"] {
            args.push(format!("-d{}ImageDownsampleType=/Bicubic", channel));
        }
        for channel in ["Color", "Gray", "Mono"] {
            args.push(format!("-d{}ImageDownsampleThreshold={}", channel, DOWNSAMPLE_THRESHOLD));
        }

        args.extend(
            [
                "-dOptimize=true",
                "-dEmbedAllFonts=true",
                "-dSubsetFonts=true",
                "-dCompressFonts=true",
                "-dDetectDuplicateImages=true",
            ]
            .map(String::from),
        );

        args.push(format!("-sOutputFile={}", output.display()));
        args.push(input.display().to_string());
        args
    }
}

#[async_trait]
impl Engine for Ghostscript {
    async fn invoke(
        &self,
        input: &Path,
        output: &Path,
        preset: &QualityPreset,
    ) -> Result<(), EngineError> {
        let args = Self::build_args(input, output, preset);
        debug!(
            "Running {} ({}, {} dpi) on {}",
            self.program,
            preset.level,
            preset.dpi,
            input.display()
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::Launch {
                program: self.program.clone(),
                source,
            })?;

        // Ghostscript runs with -dBATCH and never reads stdin.
        drop(child.stdin.take());

        let diagnostics_task = child.stderr.take().map(|stderr| tokio::spawn(collect_diagnostics(stderr)));
        let stdout_task = child.stdout.take().map(|mut stdout| {
            tokio::spawn(async move { tokio::io::copy(&mut stdout, &mut tokio::io::sink()).await })
        });

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status?,
                Err(_) => {
                    warn!("Ghostscript exceeded {:?} on {}, killing it", limit, input.display());
                    child.kill().await?;
                    return Err(EngineError::TimedOut(limit));
                }
            },
            None => child.wait().await?,
        };

        let diagnostics = match diagnostics_task {
            Some(task) => task
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??,
            None => String::new(),
        };
        if let Some(task) = stdout_task {
            let _ = task.await;
        }

        if status.success() {
            Ok(())
        } else {
            debug!("Ghostscript diagnostics for {}:\n{}", input.display(), diagnostics);
            Err(EngineError::Exit {
                code: status.code(),
                diagnostics,
            })
        }
    }
}

/// Accumulate the engine's stderr as it arrives
async fn collect_diagnostics(stderr: ChildStderr) -> std::io::Result<String> {
    let mut reader = BufReader::new(stderr);
    let mut diagnostics = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&line);
        debug!(target: "ghostscript", "{}", text.trim_end());
        diagnostics.push_str(&text);
    }

    Ok(diagnostics)
}
