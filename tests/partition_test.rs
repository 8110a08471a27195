//! Partition and cross-check properties on generated graphs
//!
//! The component finder is checked against petgraph's Tarjan
//! implementation and against the mutual-reachability definition of a
//! strongly connected component.

use graph_scc::finder::ComponentFinder;
use graph_scc::graph::EdgeListGraph;
use petgraph::algo::{has_path_connecting, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};

/// Small deterministic linear congruential generator, so the "random"
/// graphs are identical on every run.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn generated_graph(node_count: usize, edge_count: usize, seed: u64) -> EdgeListGraph {
    let mut rng = Lcg::new(seed);
    let mut graph = EdgeListGraph::new(node_count);
    for _ in 0..edge_count {
        let from = rng.below(node_count as u64) as usize + 1;
        let to = rng.below(node_count as u64) as usize + 1;
        graph.add_edge(from, to);
    }
    graph
}

fn find_partition(graph: &EdgeListGraph) -> Vec<Vec<usize>> {
    let mut finder = ComponentFinder::new();
    finder.find_components(graph).unwrap();
    finder
        .components()
        .iter()
        .map(|component| component.nodes().to_vec())
        .collect()
}

/// Mirror an [`EdgeListGraph`] into a petgraph digraph, mapping node `i`
/// to index `i - 1`
fn to_petgraph(graph: &EdgeListGraph) -> DiGraph<usize, ()> {
    let mut mirrored = DiGraph::new();
    let indices: Vec<NodeIndex> = graph.nodes().map(|node| mirrored.add_node(node)).collect();
    for from in graph.nodes() {
        for &to in graph.successors(from) {
            mirrored.add_edge(indices[from - 1], indices[to - 1], ());
        }
    }
    mirrored
}

/// Canonicalize a tarjan_scc partition into the finder's output shape:
/// node labels, each component ascending, components by first element
fn canonical_tarjan_partition(mirrored: &DiGraph<usize, ()>) -> Vec<Vec<usize>> {
    let mut partition: Vec<Vec<usize>> = tarjan_scc(mirrored)
        .into_iter()
        .map(|component| {
            let mut nodes: Vec<usize> = component.iter().map(|&idx| mirrored[idx]).collect();
            nodes.sort_unstable();
            nodes
        })
        .collect();
    partition.sort_by_key(|nodes| nodes[0]);
    partition
}

const CASES: &[(usize, usize, u64)] = &[
    (1, 0, 1),
    (10, 5, 2),
    (10, 30, 3),
    (25, 25, 4),
    (25, 100, 5),
    (60, 40, 6),
    (60, 200, 7),
    (120, 500, 8),
];

#[test]
fn test_partition_covers_every_node_exactly_once() {
    for &(node_count, edge_count, seed) in CASES {
        let graph = generated_graph(node_count, edge_count, seed);
        let partition = find_partition(&graph);

        let mut all: Vec<usize> = partition.iter().flatten().copied().collect();
        all.sort_unstable();
        let expected: Vec<usize> = (1..=node_count).collect();
        assert_eq!(all, expected, "case ({node_count}, {edge_count}, {seed})");
    }
}

#[test]
fn test_components_are_strictly_ascending_inside_and_across() {
    for &(node_count, edge_count, seed) in CASES {
        let graph = generated_graph(node_count, edge_count, seed);
        let partition = find_partition(&graph);

        for nodes in &partition {
            assert!(nodes.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(partition.windows(2).all(|w| w[0][0] < w[1][0]));
    }
}

#[test]
fn test_partition_matches_tarjan() {
    for &(node_count, edge_count, seed) in CASES {
        let graph = generated_graph(node_count, edge_count, seed);
        let expected = canonical_tarjan_partition(&to_petgraph(&graph));

        assert_eq!(
            find_partition(&graph),
            expected,
            "case ({node_count}, {edge_count}, {seed})"
        );
    }
}

#[test]
fn test_nodes_in_one_component_are_mutually_reachable() {
    let graph = generated_graph(40, 120, 11);
    let mirrored = to_petgraph(&graph);
    let partition = find_partition(&graph);

    for nodes in &partition {
        let first = NodeIndex::new(nodes[0] - 1);
        for &node in &nodes[1..] {
            let other = NodeIndex::new(node - 1);
            assert!(has_path_connecting(&mirrored, first, other, None));
            assert!(has_path_connecting(&mirrored, other, first, None));
        }
    }
}

#[test]
fn test_nodes_across_components_are_not_mutually_reachable() {
    let graph = generated_graph(40, 120, 12);
    let mirrored = to_petgraph(&graph);
    let partition = find_partition(&graph);

    for (i, left) in partition.iter().enumerate() {
        for right in partition.iter().skip(i + 1) {
            let a = NodeIndex::new(left[0] - 1);
            let b = NodeIndex::new(right[0] - 1);
            let forward = has_path_connecting(&mirrored, a, b, None);
            let backward = has_path_connecting(&mirrored, b, a, None);
            assert!(
                !(forward && backward),
                "nodes {} and {} are in different components but mutually reachable",
                left[0],
                right[0]
            );
        }
    }
}

#[test]
fn test_generated_graphs_are_deterministic() {
    for &(node_count, edge_count, seed) in CASES {
        let first = find_partition(&generated_graph(node_count, edge_count, seed));
        let second = find_partition(&generated_graph(node_count, edge_count, seed));
        assert_eq!(first, second);
    }
}
