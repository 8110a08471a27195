//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - plain: the canonical `K` / `P v1 .. vP` component listing
//! - json: JSON format for programmatic use
//! - human: styled console output with summary statistics

pub mod human;
pub mod json;
pub mod plain;

use crate::error::GraphSccError;
use crate::finder::ComponentFinder;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from component-finder results
    fn generate_report(&self, finder: &ComponentFinder) -> Result<String, GraphSccError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use plain::PlainReportGenerator;
