//! # Component Finder Module
//!
//! Implements Kosaraju's two-pass strongly-connected-components algorithm
//! over an [`EdgeListGraph`](crate::graph::EdgeListGraph).
//!
//! - **ComponentFinder**: runs the forward finish-order pass, transposes
//!   the graph, and extracts one component per exploration of the
//!   transpose
//! - **Component**: one strongly connected component, nodes sorted
//!   ascending

mod finder_impl;

pub use finder_impl::{Component, ComponentFinder};
