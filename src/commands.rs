//! Analyze command execution

use std::fs;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::AnalyzeConfig;
use crate::finder::ComponentFinder;
use crate::graph::read_edge_list;
use crate::progress::ProgressReporter;
use crate::reports::{
    HumanReportGenerator, JsonReportGenerator, PlainReportGenerator, ReportGenerator,
};

/// Run one full analysis: read the graph, partition it, emit the report
pub fn execute_analyze(config: AnalyzeConfig) -> Result<()> {
    // Progress goes to stderr and only when it is an interactive terminal,
    // so piped report output stays clean.
    let mut progress = if !config.quiet && console::Term::stderr().is_term() {
        Some(ProgressReporter::new())
    } else {
        None
    };

    if let Some(p) = progress.as_mut() {
        p.start_loading(&config.input);
    }

    let graph = read_edge_list(&config.input).wrap_err("Failed to read input graph")?;

    if let Some(p) = progress.as_mut() {
        p.finish_loading(graph.node_count(), graph.edge_count());
        p.start_search();
    }

    let mut finder = ComponentFinder::new();
    finder
        .find_components(&graph)
        .wrap_err("Failed to compute strongly connected components")?;

    if let Some(p) = progress.as_mut() {
        p.finish_search(finder.component_count());
    }

    let report_result = match config.format {
        OutputFormat::Plain => PlainReportGenerator::new().generate_report(&finder),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(&finder),
        OutputFormat::Human => {
            HumanReportGenerator::new(config.max_components).generate_report(&finder)
        }
    };

    let report = report_result
        .into_diagnostic()
        .wrap_err("Failed to generate report")?;

    match &config.output {
        Some(path) => {
            fs::write(path, &report)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write report to '{}'", path.display()))?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).bold()
            );
        }
        None => print!("{report}"),
    }

    Ok(())
}
