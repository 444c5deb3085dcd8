//! Core domain concepts shared across all subdomains.
//!
//! - [`scenario::Scenario`]: the case a report is generated for
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod scenario;
