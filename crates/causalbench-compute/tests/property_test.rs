//! Property tests for consistent extensions and sortability.

use proptest::prelude::*;

use causalbench_compute::extensions::{average_extension, consistent_extensions};
use causalbench_compute::sortability::var_sortability;
use causalbench_core::{AdjacencyMatrix, Frame};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("x{i}")).collect()
}

/// Partially directed graph over `n` nodes whose directed part follows the
/// node order, so it is always acyclic. `(i, j, true)` is undirected.
fn build_pdag(n: usize, edges: &[(usize, usize, bool)]) -> AdjacencyMatrix {
    let mut pdag = AdjacencyMatrix::zeros(&labels(n)).unwrap();
    for &(a, b, undirected) in edges {
        let (i, j) = (a.min(b), a.max(b));
        if i == j || i >= n || j >= n {
            continue;
        }
        pdag.set(i, j, 1.0);
        if undirected {
            pdag.set(j, i, 1.0);
        }
    }
    pdag
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, bool)>> {
    prop::collection::vec((0..n, 0..n, any::<bool>()), 0..8)
}

proptest! {
    #[test]
    fn extensions_are_dags_respecting_the_pdag(edges in edge_strategy(6)) {
        let pdag = build_pdag(6, &edges);
        let extensions = consistent_extensions(&pdag);
        prop_assert!(!extensions.is_empty(), "order-compatible PDAG must extend");

        for ext in &extensions {
            prop_assert!(ext.is_binary());
            // A DAG is its only extension.
            prop_assert_eq!(&consistent_extensions(ext), &vec![ext.clone()]);
            for i in 0..6 {
                for j in 0..6 {
                    let forward = pdag.get(i, j) != 0.0;
                    let backward = pdag.get(j, i) != 0.0;
                    match (forward, backward) {
                        (true, false) => {
                            prop_assert_eq!(ext.get(i, j), 1.0);
                        }
                        (true, true) => {
                            prop_assert_eq!(ext.get(i, j) + ext.get(j, i), 1.0);
                        }
                        (false, false) => {
                            prop_assert_eq!(ext.get(i, j), 0.0);
                        }
                        (false, true) => {}
                    }
                }
            }
        }

        let average = average_extension(&extensions).unwrap();
        prop_assert!(average.is_fractional());
    }
}

proptest! {
    #[test]
    fn extensions_are_distinct(edges in edge_strategy(5)) {
        let extensions = consistent_extensions(&build_pdag(5, &edges));
        for (k, a) in extensions.iter().enumerate() {
            for b in &extensions[k + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }
}

proptest! {
    #[test]
    fn sortability_is_a_share(
        edges in edge_strategy(4),
        data in prop::collection::vec(prop::collection::vec(-100.0_f64..100.0, 4), 3..20),
    ) {
        let dag = build_pdag(4, &edges.iter().map(|&(a, b, _)| (a, b, false)).collect::<Vec<_>>());
        let frame = Frame::new(labels(4), data).unwrap();
        if let Ok(score) = var_sortability(&frame, &dag) {
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
