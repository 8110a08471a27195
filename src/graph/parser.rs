//! Edge-list input parsing
//!
//! Parses the `n m` header plus `m` edge lines format into an
//! [`EdgeListGraph`], reporting malformed input as span-labeled
//! diagnostics against the original source text.
//!
//! Endpoint policy: edge endpoints outside `1..=n` are rejected here with
//! a labeled parse error rather than tolerated downstream. Duplicate
//! edges and self-loops are valid input.

use std::path::Path;

use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan};

use super::types::EdgeListGraph;
use crate::error::{EdgeListParseError, GraphSccError};

/// Read and parse an edge-list file from disk
pub fn read_edge_list(path: &Path) -> Result<EdgeListGraph> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| GraphSccError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })
        .into_diagnostic()?;

    parse_edge_list(&path.display().to_string(), &content).into_diagnostic()
}

/// Parse edge-list text into a graph.
///
/// `name` labels the source in diagnostics (typically the file path).
pub fn parse_edge_list(name: &str, content: &str) -> Result<EdgeListGraph, GraphSccError> {
    let mut lines = lines_with_offsets(content);

    let (header_offset, header_line) = lines
        .next()
        .ok_or_else(|| malformed(name, content, None, "missing header line".to_string()))?;
    let header_span = line_span(header_offset, header_line);

    let (node_count, edge_count) = parse_pair(header_line)
        .map_err(|message| malformed(name, content, Some(header_span), message))?;

    let mut graph = EdgeListGraph::new(node_count);

    for index in 0..edge_count {
        let (offset, line) = lines.next().ok_or_else(|| {
            malformed(
                name,
                content,
                Some(header_span),
                format!("header declares {edge_count} edges but only {index} edge lines follow"),
            )
        })?;
        let span = line_span(offset, line);

        let (from, to) =
            parse_pair(line).map_err(|message| malformed(name, content, Some(span), message))?;

        for endpoint in [from, to] {
            if endpoint < 1 || endpoint > node_count {
                return Err(malformed(
                    name,
                    content,
                    Some(span),
                    format!("node {endpoint} is out of range for a graph with {node_count} nodes"),
                ));
            }
        }

        graph.add_edge(from, to);
    }

    for (offset, line) in lines {
        if !line.trim().is_empty() {
            return Err(malformed(
                name,
                content,
                Some(line_span(offset, line)),
                format!("unexpected content after the {edge_count} declared edges"),
            ));
        }
    }

    Ok(graph)
}

/// Yield each line with its byte offset into the source text
fn lines_with_offsets(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.split_inclusive('\n').scan(0usize, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        Some((start, raw.trim_end_matches(['\n', '\r'])))
    })
}

fn line_span(offset: usize, line: &str) -> SourceSpan {
    SourceSpan::new(offset.into(), line.len().max(1))
}

fn malformed(name: &str, content: &str, span: Option<SourceSpan>, message: String) -> GraphSccError {
    GraphSccError::EdgeListParseError(Box::new(EdgeListParseError {
        file: name.to_string(),
        message,
        source_code: NamedSource::new(name, content.to_string()),
        span,
    }))
}

/// Parse a line of exactly two whitespace-separated non-negative integers
fn parse_pair(line: &str) -> std::result::Result<(usize, usize), String> {
    let mut fields = line.split_whitespace();

    let first = fields.next().ok_or_else(|| {
        "expected two whitespace-separated integers, found an empty line".to_string()
    })?;
    let second = fields
        .next()
        .ok_or_else(|| "expected two whitespace-separated integers, found one field".to_string())?;

    let extra = fields.count();
    if extra > 0 {
        return Err(format!(
            "expected two whitespace-separated integers, found {} fields",
            2 + extra
        ));
    }

    let parse = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| format!("invalid integer '{token}'"))
    };

    Ok((parse(first)?, parse(second)?))
}
