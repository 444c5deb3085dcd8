//! Report domain
//!
//! - [`section`]: the closed section catalogue and the fixed generation plan
//! - [`usage`]: token accounting and pricing
//! - [`entities`]: [`SectionResult`](entities::SectionResult) and [`Report`](entities::Report)
//! - [`summary`]: confidence and executive summary roll-ups

pub mod entities;
pub mod section;
pub mod summary;
pub mod usage;
