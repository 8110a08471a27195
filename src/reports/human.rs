//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::GraphSccError;
use crate::finder::{Component, ComponentFinder};
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_components: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_components: Option<usize>) -> Self {
        Self { max_components }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, finder: &ComponentFinder) -> Result<String, GraphSccError> {
        let mut output = String::new();

        if !finder.has_components() {
            write!(
                output,
                "\n{} The graph has no nodes, so there is nothing to partition.\n",
                style("ℹ").blue()
            )?;
            return Ok(output);
        }

        let total = finder.component_count();
        write!(
            output,
            "\n{} Found {} strongly connected {}:\n\n",
            style("✓").green().bold(),
            style(total).bold(),
            pluralize("component", total)
        )?;

        let showing_all = self.max_components.is_none_or(|limit| limit >= total);
        let shown = match self.max_components {
            Some(limit) => &finder.components()[..limit.min(total)],
            None => finder.components(),
        };

        for (i, component) in shown.iter().enumerate() {
            let nodes = component
                .nodes()
                .iter()
                .map(|node| node.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                output,
                "  {} #{} ({} {}): {}",
                style("•").dim(),
                i + 1,
                style(component.len()).yellow(),
                pluralize("node", component.len()),
                nodes
            )?;
        }

        if !showing_all {
            writeln!(
                output,
                "\n{} Showing {} of {} components. Use --max-components to see more.",
                style("ℹ").blue(),
                style(shown.len()).yellow(),
                style(total).yellow()
            )?;
        }

        let largest = finder
            .components()
            .iter()
            .map(Component::len)
            .max()
            .unwrap_or(0);
        let singletons = finder
            .components()
            .iter()
            .filter(|component| component.len() == 1)
            .count();

        writeln!(
            output,
            "\n{} Largest component: {} {}",
            style("→").dim(),
            style(largest).yellow(),
            pluralize("node", largest)
        )?;
        writeln!(
            output,
            "{} Singleton components: {}",
            style("→").dim(),
            style(singletons).yellow()
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeListGraph;

    fn finder_for(node_count: usize, edges: &[(usize, usize)]) -> ComponentFinder {
        let mut graph = EdgeListGraph::new(node_count);
        for &(from, to) in edges {
            graph.add_edge(from, to);
        }
        let mut finder = ComponentFinder::new();
        finder.find_components(&graph).unwrap();
        finder
    }

    #[test]
    fn test_human_report_empty_graph() {
        let finder = finder_for(0, &[]);
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&finder).unwrap();

        assert!(report.contains("nothing to partition"));
    }

    #[test]
    fn test_human_report_lists_every_component() {
        let finder = finder_for(4, &[(1, 2), (2, 1), (3, 4), (4, 3)]);
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&finder).unwrap();

        assert!(report.contains("strongly connected components"));
        assert!(report.contains("1 2"));
        assert!(report.contains("3 4"));
        assert!(!report.contains("--max-components"));
    }

    #[test]
    fn test_human_report_truncates_at_max_components() {
        let finder = finder_for(3, &[]);
        let generator = HumanReportGenerator::new(Some(2));

        let report = generator.generate_report(&finder).unwrap();

        assert!(report.contains("Showing"));
        assert!(report.contains("Use --max-components to see more"));
    }

    #[test]
    fn test_human_report_statistics() {
        let finder = finder_for(3, &[(1, 2), (2, 1)]);
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&finder).unwrap();

        assert!(report.contains("Largest component:"));
        assert!(report.contains("Singleton components:"));
    }
}
