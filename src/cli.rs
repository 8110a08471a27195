use std::path::PathBuf;

use clap::Parser;

use crate::common::{DisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "graph-scc",
    about = "Find the strongly connected components of a directed graph",
    long_about = "graph-scc reads a directed graph as an edge list (a header line `n m` followed \
                  by m lines `u v`, nodes labeled 1..=n) and partitions its nodes into strongly \
                  connected components using Kosaraju's two-pass depth-first search. Components \
                  are printed sorted by their smallest node index, with each component's nodes in \
                  ascending order.",
    version
)]
pub struct Cli {
    /// Path to the edge-list input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "GRAPH_SCC_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Suppress progress reporting on stderr
    #[arg(short, long, env = "GRAPH_SCC_QUIET")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
    Human,
}
