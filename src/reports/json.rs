//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::error::GraphSccError;
use crate::finder::ComponentFinder;

#[derive(Serialize)]
struct ComponentRecord<'a> {
    size: usize,
    nodes: &'a [usize],
}

#[derive(Serialize)]
struct SccReport<'a> {
    component_count: usize,
    components: Vec<ComponentRecord<'a>>,
}

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, finder: &ComponentFinder) -> Result<String, GraphSccError> {
        // Components are already ordered by smallest node index, so the
        // JSON listing matches the plain format's ordering.
        let report = SccReport {
            component_count: finder.component_count(),
            components: finder
                .components()
                .iter()
                .map(|component| ComponentRecord {
                    size: component.len(),
                    nodes: component.nodes(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&report).map_err(GraphSccError::Json)
    }
}
