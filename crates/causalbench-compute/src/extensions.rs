//! Consistent extensions of a partially directed graph.
//!
//! A consistent extension orients every undirected edge so that the result
//! is a DAG. Orientations are enumerated by backtracking over the undirected
//! edges; an orientation is rejected as soon as it closes a cycle, checked by
//! DFS reachability before the edge is inserted.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use causalbench_core::errors::ExtensionError;
use causalbench_core::AdjacencyMatrix;

/// Every DAG consistent with `pdag`, where (i, j) != 0 with (j, i) = 0 is
/// i → j and both nonzero is an undirected edge.
///
/// Returns an empty list when no acyclic orientation exists: a self-loop or
/// a cycle among the directed edges. Undirected edges are visited in
/// row-major order and oriented row → column first, so the order of the
/// returned extensions is deterministic.
pub fn consistent_extensions(pdag: &AdjacencyMatrix) -> Vec<AdjacencyMatrix> {
    let n = pdag.dim();
    let mut graph = DiGraph::<(), ()>::with_capacity(n, n * n);
    let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
    let mut undirected = Vec::new();

    for i in 0..n {
        if pdag.get(i, i) != 0.0 {
            return Vec::new();
        }
        for j in 0..n {
            if i == j {
                continue;
            }
            let forward = pdag.get(i, j) != 0.0;
            let backward = pdag.get(j, i) != 0.0;
            if forward && backward {
                if i < j {
                    undirected.push((nodes[i], nodes[j]));
                }
            } else if forward {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
    }

    if is_cyclic_directed(&graph) {
        return Vec::new();
    }

    let template = pdag.zeros_like();
    let mut extensions = Vec::new();
    orient(&mut graph, &undirected, &template, &mut extensions);
    extensions
}

fn orient(
    graph: &mut DiGraph<(), ()>,
    undirected: &[(NodeIndex, NodeIndex)],
    template: &AdjacencyMatrix,
    out: &mut Vec<AdjacencyMatrix>,
) {
    let Some((&(a, b), rest)) = undirected.split_first() else {
        out.push(to_matrix(graph, template));
        return;
    };
    for (from, to) in [(a, b), (b, a)] {
        if would_create_cycle(graph, from, to) {
            continue;
        }
        let edge = graph.add_edge(from, to, ());
        orient(graph, rest, template, out);
        // Last edge in, first out: indices of the remaining edges are stable.
        graph.remove_edge(edge);
    }
}

/// Whether adding `source → target` would close a directed cycle.
fn would_create_cycle(graph: &DiGraph<(), ()>, source: NodeIndex, target: NodeIndex) -> bool {
    if source == target {
        return true;
    }
    has_path(graph, target, source)
}

fn has_path(graph: &DiGraph<(), ()>, from: NodeIndex, to: NodeIndex) -> bool {
    let mut dfs = Dfs::new(graph, from);
    while let Some(node) = dfs.next(graph) {
        if node == to {
            return true;
        }
    }
    false
}

fn to_matrix(graph: &DiGraph<(), ()>, template: &AdjacencyMatrix) -> AdjacencyMatrix {
    let mut matrix = template.clone();
    for edge in graph.raw_edges() {
        matrix.set(edge.source().index(), edge.target().index(), 1.0);
    }
    matrix
}

/// Element-wise mean of a non-empty list of extensions.
pub fn average_extension(extensions: &[AdjacencyMatrix]) -> Result<AdjacencyMatrix, ExtensionError> {
    if extensions.is_empty() {
        return Err(ExtensionError::NoExtensions);
    }
    let refs: Vec<&AdjacencyMatrix> = extensions.iter().collect();
    Ok(AdjacencyMatrix::mean_of(&refs)?)
}
