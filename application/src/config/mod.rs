//! Application-level configuration.
//!
//! - [`ReportParams`]: quality gate, retry budgets, sampling and pricing

pub mod report_params;

pub use report_params::ReportParams;
