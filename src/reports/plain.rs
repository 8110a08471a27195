//! Canonical component-listing report generation
//!
//! First line is the component count `K`; each of the next `K` lines is
//! `P v1 v2 ... vP` for one component, components ordered by smallest
//! node index. This is the tool's default output format.

use std::fmt::Write;

use super::ReportGenerator;
use crate::error::GraphSccError;
use crate::finder::ComponentFinder;

pub struct PlainReportGenerator;

impl Default for PlainReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for PlainReportGenerator {
    fn generate_report(&self, finder: &ComponentFinder) -> Result<String, GraphSccError> {
        let mut output = String::new();

        writeln!(output, "{}", finder.component_count())?;
        for component in finder.components() {
            write!(output, "{}", component.len())?;
            for node in component.nodes() {
                write!(output, " {node}")?;
            }
            writeln!(output)?;
        }

        Ok(output)
    }
}
