//! Prompt domain
//!
//! Personas and the template that turns a scenario plus prior sections into
//! a section prompt.

pub mod persona;
mod template;

pub use persona::{BuiltinPersonas, PersonaStore, PersonaValidation, validate_persona};
pub use template::{HANDSHAKE_PROMPT, ReportPromptTemplate};
