use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Malformed edge list in '{file}': {message}")]
#[diagnostic(
    code(graph_scc::edge_list_parse_error),
    help("Expected a header line `n m` followed by m lines `u v` with nodes in 1..=n")
)]
pub struct EdgeListParseError {
    pub file: String,
    pub message: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid input here")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum GraphSccError {
    #[error("Failed to read input file '{path}'")]
    #[diagnostic(
        code(graph_scc::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    EdgeListParseError(Box<EdgeListParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(graph_scc::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(graph_scc::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(graph_scc::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(graph_scc::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(graph_scc::graph_error),
        help("This may be an internal error with component extraction")
    )]
    GraphError { message: String },
}
