//! # Graph Representation Module
//!
//! This module provides the directed-graph representation consumed by the
//! component finder, together with the edge-list input parser.
//!
//! ## Components
//!
//! - **EdgeListGraph**: adjacency-list digraph over nodes `1..=n` with
//!   insertion-ordered successors and non-mutating transposition
//! - **parse_edge_list / read_edge_list**: turn `n m` header + edge-line
//!   text into a graph, with span-labeled diagnostics for malformed input
//!
//! ## Example
//!
//! ```
//! use graph_scc::graph::EdgeListGraph;
//!
//! let mut graph = EdgeListGraph::new(2);
//! graph.add_edge(1, 2);
//!
//! let transposed = graph.transpose();
//! assert_eq!(transposed.successors(2), &[1]);
//!
//! // Transposition never mutates the original
//! assert_eq!(graph.successors(1), &[2]);
//! ```

mod parser;
mod types;

pub use parser::{parse_edge_list, read_edge_list};
pub use types::EdgeListGraph;
