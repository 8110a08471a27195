//! # graph-scc - Strongly Connected Components of Directed Graphs
//!
//! graph-scc partitions the nodes of a directed graph into strongly
//! connected components using Kosaraju's two-pass depth-first search. The
//! graph is read from an edge-list file (a header line `n m` followed by
//! `m` lines `u v`, nodes labeled `1..=n`), and the resulting components
//! are printed sorted by their smallest node index.
//!
//! ## Main Components
//!
//! - **Graph**: adjacency-list digraph with insertion-ordered successors
//!   and non-mutating transposition, plus the edge-list parser
//! - **Finder**: the Kosaraju engine - forward finish-order pass, then
//!   explorations of the transpose in reverse finish order
//! - **Reports**: plain (the canonical `K` / `P v1 .. vP` listing), JSON,
//!   and styled human output behind one trait
//!
//! ## Usage
//!
//! ### Partitioning a graph built in memory
//!
//! ```
//! use graph_scc::finder::ComponentFinder;
//! use graph_scc::graph::EdgeListGraph;
//!
//! # fn main() -> miette::Result<()> {
//! // 1 -> 2 -> 3 -> 1 forms one component; 4 hangs off the cycle
//! let mut graph = EdgeListGraph::new(4);
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//! graph.add_edge(3, 1);
//! graph.add_edge(3, 4);
//!
//! let mut finder = ComponentFinder::new();
//! finder.find_components(&graph)?;
//!
//! assert_eq!(finder.component_count(), 2);
//! assert_eq!(finder.components()[0].nodes(), &[1, 2, 3]);
//! assert_eq!(finder.components()[1].nodes(), &[4]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Parsing edge-list text and generating the canonical report
//!
//! ```
//! use graph_scc::finder::ComponentFinder;
//! use graph_scc::graph::parse_edge_list;
//! use graph_scc::reports::{PlainReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let graph = parse_edge_list("ring.txt", "3 3\n1 2\n2 3\n3 1\n")?;
//!
//! let mut finder = ComponentFinder::new();
//! finder.find_components(&graph)?;
//!
//! let report = PlainReportGenerator::new().generate_report(&finder)?;
//! assert_eq!(report, "1\n3 1 2 3\n");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod finder;
pub mod graph;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;
    use miette::IntoDiagnostic;

    use crate::commands::execute_analyze;
    use crate::config::AnalyzeConfig;

    let cli = cli::Cli::parse();
    let config = AnalyzeConfig::try_from(cli).into_diagnostic()?;

    execute_analyze(config)
}
