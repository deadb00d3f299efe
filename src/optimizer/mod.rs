//! # Optimizer Module
//!
//! Modulo che separa le responsabilità in sottomoduli:
//! - `document_optimizer`: Ottimizzazione di un singolo documento
//! - `batch_optimizer`: Orchestratore per intere directory
//! - `output_guard`: Cleanup dell'output parziale su ogni percorso di errore
//! - `path_resolver`: Logica di calcolo path centralizzata

pub mod batch_optimizer;
pub mod document_optimizer;
pub mod output_guard;
pub mod path_resolver;

pub use batch_optimizer::BatchOptimizer;
pub use document_optimizer::DocumentOptimizer;
pub use output_guard::OutputGuard;
pub use path_resolver::PathResolver;
