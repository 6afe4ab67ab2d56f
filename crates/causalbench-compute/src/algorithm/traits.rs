//! The adapter contract every causal discovery method implements.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

use causalbench_core::data::same_columns;
use causalbench_core::errors::AlgorithmError;
use causalbench_core::{AdjacencyMatrix, Frame};

use super::AlgorithmConfig;

/// A causal discovery method behind a uniform interface.
///
/// `fit` receives frames sharing columns and column order and returns a
/// graph over those columns: (i, j) = 1 with (j, i) = 0 is i → j, both 1 is
/// an undirected edge. Adapters may keep state between calls, which is why
/// every replicate works on its own `clone_boxed` copy.
pub trait CausalAlgorithm: Send {
    fn name(&self) -> &str;

    /// Hyperparameters, recorded with every snapshot.
    fn config(&self) -> AlgorithmConfig;

    fn fit(&mut self, data: &[Frame]) -> Result<AdjacencyMatrix, AlgorithmError>;

    /// Independent deep copy for one replicate.
    fn clone_boxed(&self) -> Box<dyn CausalAlgorithm>;
}

/// Output of a successful fit with the time it took.
#[derive(Debug, Clone)]
pub struct TimedFit {
    pub graph: AdjacencyMatrix,
    pub runtime: Duration,
}

/// Run `algorithm.fit(data)` and time it.
///
/// Fails fast when the frames disagree on columns, turns a panic inside the
/// adapter into `AlgorithmError::Panicked`, and rejects output whose labels
/// are not the input columns.
pub fn fit_timed(
    algorithm: &mut dyn CausalAlgorithm,
    data: &[Frame],
) -> Result<TimedFit, AlgorithmError> {
    let columns = match data.first() {
        Some(frame) => frame.columns().to_vec(),
        None => return Err(AlgorithmError::Precondition("no frames passed".to_string())),
    };
    if !same_columns(data).unwrap_or(false) {
        return Err(AlgorithmError::Precondition(
            "not all frames share the same columns".to_string(),
        ));
    }

    let start = Instant::now();
    let result = catch_unwind(AssertUnwindSafe(|| algorithm.fit(data)));
    let runtime = start.elapsed();

    let graph = match result {
        Ok(fitted) => fitted?,
        Err(payload) => {
            return Err(AlgorithmError::Panicked {
                algorithm: algorithm.name().to_string(),
                message: panic_message(payload.as_ref()),
            })
        }
    };

    if graph.labels() != columns.as_slice() {
        return Err(AlgorithmError::OutputMismatch {
            algorithm: algorithm.name().to_string(),
            expected: columns,
            found: graph.labels().to_vec(),
        });
    }

    Ok(TimedFit { graph, runtime })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
