//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generation_logger;
pub mod progress;
pub mod scorer;
pub mod text_model;
