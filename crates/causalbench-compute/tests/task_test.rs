//! Tests for single-replicate causal inference tasks.

use causalbench_compute::algorithm::{AlgorithmConfig, CausalAlgorithm, OracleAlgorithm};
use causalbench_compute::CausalInferenceTask;
use causalbench_core::errors::{AlgorithmError, TaskError};
use causalbench_core::{AdjacencyMatrix, Frame};

fn chain_graph() -> AdjacencyMatrix {
    AdjacencyMatrix::from_edges(&["A", "B", "C"], &[("A", "B"), ("B", "C")]).unwrap()
}

fn chain_frame(n: usize) -> Frame {
    let rows = (0..n)
        .map(|i| {
            let a = ((i * 7) % 11) as f64 - 5.0;
            let b = 2.0 * a + ((i * 5) % 3) as f64 * 0.5;
            let c = 2.0 * b + ((i * 3) % 5) as f64 * 0.3;
            vec![a, b, c]
        })
        .collect();
    Frame::new(vec!["A".into(), "B".into(), "C".into()], rows).unwrap()
}

/// Fails every fit with a numerical error.
#[derive(Clone)]
struct NonConverging;

impl CausalAlgorithm for NonConverging {
    fn name(&self) -> &str {
        "NonConverging"
    }
    fn config(&self) -> AlgorithmConfig {
        AlgorithmConfig::NoTears(Default::default())
    }
    fn fit(&mut self, _data: &[Frame]) -> Result<AdjacencyMatrix, AlgorithmError> {
        Err(AlgorithmError::NonConvergence {
            algorithm: "NonConverging".into(),
            message: "h(W) above tolerance".into(),
        })
    }
    fn clone_boxed(&self) -> Box<dyn CausalAlgorithm> {
        Box::new(self.clone())
    }
}

/// Returns a directed cycle over the input columns.
#[derive(Clone)]
struct Cyclic;

impl CausalAlgorithm for Cyclic {
    fn name(&self) -> &str {
        "Cyclic"
    }
    fn config(&self) -> AlgorithmConfig {
        AlgorithmConfig::VarSortRegress
    }
    fn fit(&mut self, data: &[Frame]) -> Result<AdjacencyMatrix, AlgorithmError> {
        let cols = data[0].columns();
        let edges: Vec<(&str, &str)> = (0..cols.len())
            .map(|i| (cols[i].as_str(), cols[(i + 1) % cols.len()].as_str()))
            .collect();
        Ok(AdjacencyMatrix::from_edges(cols, &edges).unwrap())
    }
    fn clone_boxed(&self) -> Box<dyn CausalAlgorithm> {
        Box::new(self.clone())
    }
}

#[test]
fn test_oracle_task() {
    let task = CausalInferenceTask::new(
        0,
        Box::new(OracleAlgorithm::new(chain_graph())),
        vec![chain_frame(30), chain_frame(20)],
        chain_graph(),
    )
    .unwrap();
    let done = task.run();

    assert!(!done.algorithm_crashed());
    assert!(!done.no_consistent_extensions());
    assert_eq!(done.estimated_graph(), &chain_graph());
    assert_eq!(done.extensions().len(), 1);
    assert_eq!(done.average_extension(), Some(&chain_graph()));
    assert!(done.runtime_secs() >= 0.0);
    assert_eq!(done.var_sortability(), 1.0);
    assert!((0.0..=1.0).contains(&done.r2_sortability()));
}

#[test]
fn test_crash_is_contained() {
    let task =
        CausalInferenceTask::new(4, Box::new(NonConverging), vec![chain_frame(10)], chain_graph()).unwrap();
    let done = task.run();

    assert_eq!(done.replicate(), 4);
    assert!(done.algorithm_crashed());
    assert!(done.crash_reason().unwrap().contains("did not converge"));
    assert_eq!(done.runtime_secs(), 0.0);
    assert_eq!(done.estimated_graph(), &chain_graph().zeros_like());
    // The empty graph is its own single extension.
    assert_eq!(done.average_extension(), Some(&chain_graph().zeros_like()));
}

#[test]
fn test_cyclic_output_has_no_extensions() {
    let task = CausalInferenceTask::new(0, Box::new(Cyclic), vec![chain_frame(10)], chain_graph()).unwrap();
    let done = task.run();
    assert!(!done.algorithm_crashed());
    assert!(done.no_consistent_extensions());
    assert!(done.extensions().is_empty());
    assert_eq!(done.average_extension(), None);
}

#[test]
fn test_degenerate_data_scores_zero() {
    let constant = Frame::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![vec![1.0, 1.0, 1.0]; 5],
    )
    .unwrap();
    let task = CausalInferenceTask::new(
        0,
        Box::new(OracleAlgorithm::new(chain_graph())),
        vec![constant],
        chain_graph(),
    )
    .unwrap();
    let done = task.run();
    assert_eq!(done.var_sortability(), 0.0);
    assert_eq!(done.r2_sortability(), 0.0);
    assert!(!done.algorithm_crashed());
}

#[test]
fn test_columns_must_match_true_graph() {
    let reordered = Frame::new(vec!["B".into(), "A".into(), "C".into()], vec![vec![0.0; 3]]).unwrap();
    let result = CausalInferenceTask::new(
        0,
        Box::new(OracleAlgorithm::new(chain_graph())),
        vec![reordered],
        chain_graph(),
    );
    assert!(matches!(result, Err(TaskError::VariableMismatch { .. })));

    let result = CausalInferenceTask::new(0, Box::new(NonConverging), vec![], chain_graph());
    assert!(matches!(result, Err(TaskError::Data(_))));
}
