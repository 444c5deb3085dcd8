//! Model service providers
//!
//! Each provider implements the [`TextModel`](dossier_application::TextModel) port.

pub mod vertex;
