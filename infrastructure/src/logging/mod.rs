//! Logging infrastructure: structured generation-event logging.
//!
//! Provides [`JsonlGenerationLogger`], a JSONL file writer that implements
//! the [`GenerationLogger`](dossier_application::GenerationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlGenerationLogger;
