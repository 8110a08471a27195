use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: None,
        }
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let mut frames: Vec<&str> = SPINNER_FRAMES.to_vec();
        frames.push("✓");

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(&frames),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_loading(&mut self, path: &Path) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Reading edge list from {}...",
            style("🔍").cyan(),
            style(path.display()).bold()
        );
        let spinner = self.create_spinner("Parsing header and edges...");
        self.current_bar = Some(spinner);
    }

    pub fn finish_loading(&mut self, node_count: usize, edge_count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "{} Loaded {} {} and {} {}",
            style("✓").green(),
            style(node_count).yellow().bold(),
            pluralize("node", node_count),
            style(edge_count).yellow().bold(),
            pluralize("edge", edge_count)
        );
    }

    pub fn start_search(&mut self) {
        eprintln!(
            "{} Computing strongly connected components...",
            style("🔄").yellow()
        );
        let spinner = self.create_spinner("Running the two-pass search...");
        self.current_bar = Some(spinner);
    }

    pub fn finish_search(&mut self, component_count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "{} Found {} strongly connected {}",
            style("✓").green().bold(),
            style(component_count).yellow().bold(),
            pluralize("component", component_count)
        );
    }
}
