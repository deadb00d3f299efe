//! # PDF Optimizer - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing` (su stderr)
//! - Controllo preliminare di Ghostscript prima di qualsiasi lavoro
//! - Dispatch tra modalità singolo file e modalità batch
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI; argomenti assenti o non validi: uso ed exit 1
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose)
//! 3. Verifica che Ghostscript sia invocabile, altrimenti istruzioni ed exit 1
//! 4. Ottimizza un file oppure tutti i PDF di una directory
//!
//! ## Esempio di utilizzo:
//! ```bash
//! pdf-optimizer document.pdf
//! pdf-optimizer document.pdf compressed.pdf high
//! pdf-optimizer --batch ./pdfs ./optimized web
//! ```

use anyhow::{anyhow, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};

use pdf_optimizer::accounting::humanize;
use pdf_optimizer::file_manager::FileManager;
use pdf_optimizer::json_output::{JsonMessage, JsonProgress};
use pdf_optimizer::optimizer::PathResolver;
use pdf_optimizer::progress::ConsoleProgress;
use pdf_optimizer::{platform, BatchOptimizer, Config, DocumentOptimizer, Ghostscript, QualityLevel};

#[derive(Parser)]
#[command(name = "pdf-optimizer", version)]
#[command(about = "Reduce PDF file size with Ghostscript quality presets")]
#[command(after_help = "Quality levels:
  high    150 dpi, /printer (minimal compression)
  medium  100 dpi, /ebook   (balanced, default)
  low      75 dpi, /screen  (maximum compression)
  web      75 dpi, /screen  (web viewing)

Examples:
  pdf-optimizer document.pdf
  pdf-optimizer document.pdf compressed.pdf high
  pdf-optimizer --batch ./pdfs ./optimized web")]
struct Args {
    /// Single file: <input> [output] [quality]. Batch: <input-dir> <output-dir> [quality]
    #[arg(value_name = "ARGS", num_args = 0..=3)]
    paths: Vec<String>,

    /// Optimize every PDF directly inside a directory
    #[arg(long)]
    batch: bool,

    /// Ghostscript executable to invoke
    #[arg(long, value_name = "PROGRAM", default_value = platform::default_engine_program())]
    gs: String,

    /// Abort a single Ghostscript run after this many seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Output progress and results as JSON lines on stdout
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return usage_error(e),
    };

    if args.paths.is_empty() {
        let _ = Args::command().print_help();
        return ExitCode::from(1);
    }

    // Logs go to stderr so that --json keeps stdout machine-readable
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let quality_arg = args.paths.get(2).cloned();
    let config = Config {
        quality: quality_arg.clone().unwrap_or_else(|| "medium".to_string()),
        engine_program: args.gs.clone(),
        timeout_secs: args.timeout,
        json_output: args.json,
        verbose: args.verbose,
    };

    match run(&args, &config, quality_arg.as_deref()).await {
        Ok(code) => code,
        Err(e) => {
            report_error(&config, &e.to_string());
            ExitCode::from(1)
        }
    }
}

async fn run(args: &Args, config: &Config, quality: Option<&str>) -> Result<ExitCode> {
    config.validate()?;

    if args.batch && args.paths.len() < 2 {
        return Err(anyhow!(
            "Batch mode requires input and output directories (--batch <input-dir> <output-dir> [quality])"
        ));
    }

    debug!("System: {}", platform::system_info());

    let engine = match Ghostscript::detect(config).await {
        Ok(engine) => engine,
        Err(e) => {
            debug!("Preflight failed: {}", e);
            if config.json_output {
                JsonMessage::error(e.to_string()).emit();
            } else {
                eprint!("{}", platform::missing_engine_report(&config.engine_program));
            }
            return Ok(ExitCode::from(1));
        }
    };
    debug!("Using Ghostscript {} ({})", engine.version(), engine.program());

    if let Some(identifier) = quality {
        if QualityLevel::parse(identifier).is_none() {
            warn!("Unknown quality level '{}', using medium", identifier);
        }
    }

    if args.batch {
        let input_dir = PathBuf::from(&args.paths[0]);
        let output_dir = PathBuf::from(&args.paths[1]);
        run_batch(engine, config, &input_dir, &output_dir).await
    } else {
        let input = PathBuf::from(&args.paths[0]);
        let output = args
            .paths
            .get(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathResolver::default_output_path(&input));
        run_single(engine, config, &input, &output).await
    }
}

async fn run_single(engine: Ghostscript, config: &Config, input: &Path, output: &Path) -> Result<ExitCode> {
    let optimizer = DocumentOptimizer::new(engine);
    let preset = config.preset();

    if !config.json_output {
        let name = input.file_name().unwrap_or(input.as_os_str());
        println!("Optimizing: {}", name.to_string_lossy());
        if let Ok(size) = FileManager::file_size(input).await {
            println!("Original size: {}", humanize(size));
        }
        println!("Quality level: {}", preset.level);
        println!("Processing...");
    }

    let result = optimizer.optimize(input, output, Some(config.quality.as_str())).await?;

    if config.json_output {
        JsonMessage::Optimized {
            input: input.to_path_buf(),
            result,
        }
        .emit();
    } else {
        println!("\nOptimization complete!");
        println!("{}", result.format_report());
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_batch(engine: Ghostscript, config: &Config, input_dir: &Path, output_dir: &Path) -> Result<ExitCode> {
    let batch = BatchOptimizer::new(engine);

    // Per-file failures are reported in the summary and do not change the exit code
    if config.json_output {
        let progress = JsonProgress::new(config.preset().level);
        batch.optimize_all(input_dir, output_dir, Some(config.quality.as_str()), &progress).await?;
    } else {
        let progress = ConsoleProgress::new();
        batch.optimize_all(input_dir, output_dir, Some(config.quality.as_str()), &progress).await?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Help and version exit 0; every other parse error is a one-line message and exit 1
fn usage_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            let rendered = e.to_string();
            let message = rendered.lines().next().unwrap_or("invalid arguments");
            eprintln!("Error: {}", message.trim_start_matches("error: "));
            ExitCode::from(1)
        }
    }
}

fn report_error(config: &Config, message: &str) {
    if config.json_output {
        JsonMessage::error(message).emit();
    } else {
        eprintln!("Error: {}", message);
    }
}
