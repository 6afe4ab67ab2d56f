//! Sanity baseline that always answers with the ground truth.

use causalbench_core::errors::AlgorithmError;
use causalbench_core::{AdjacencyMatrix, Frame};

use super::{AlgorithmConfig, CausalAlgorithm};

/// Returns the true graph restricted to, and ordered like, the data columns.
#[derive(Debug, Clone)]
pub struct OracleAlgorithm {
    true_graph: AdjacencyMatrix,
}

impl OracleAlgorithm {
    pub fn new(true_graph: AdjacencyMatrix) -> Self {
        Self { true_graph }
    }
}

impl CausalAlgorithm for OracleAlgorithm {
    fn name(&self) -> &str {
        "Oracle"
    }

    fn config(&self) -> AlgorithmConfig {
        AlgorithmConfig::Oracle
    }

    fn fit(&mut self, data: &[Frame]) -> Result<AdjacencyMatrix, AlgorithmError> {
        let columns = data
            .first()
            .map(Frame::columns)
            .ok_or_else(|| AlgorithmError::Precondition("no frames passed".to_string()))?;
        self.true_graph
            .select(columns)
            .map_err(|e| AlgorithmError::Internal {
                algorithm: self.name().to_string(),
                message: e.to_string(),
            })
    }

    fn clone_boxed(&self) -> Box<dyn CausalAlgorithm> {
        Box::new(self.clone())
    }
}
