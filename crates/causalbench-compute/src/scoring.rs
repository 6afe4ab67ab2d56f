//! Edge-level comparison of estimated graphs against the true graph.
//!
//! This is the numeric side of graph rendering: which edges to draw for a
//! given edge class and with which weight. Drawing itself lives elsewhere.

use serde::{Deserialize, Serialize};

use causalbench_core::errors::MatrixError;
use causalbench_core::AdjacencyMatrix;

/// Weight an averaged edge must exceed to be shown.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Absolute change between two averaged graphs that must be exceeded.
pub const DEFAULT_CHANGE_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeClass {
    /// Any edge above the threshold.
    Discovered,
    /// Above the threshold and present in the true graph.
    TruePositive,
    /// Above the threshold and absent from the true graph.
    FalsePositive,
    /// Change above the threshold in absolute value, edge in the true graph.
    TruePositiveChange,
    /// Change above the threshold in absolute value, edge not in the true graph.
    FalsePositiveChange,
}

impl EdgeClass {
    pub fn is_change(self) -> bool {
        matches!(self, Self::TruePositiveChange | Self::FalsePositiveChange)
    }

    pub fn default_threshold(self) -> f64 {
        if self.is_change() {
            DEFAULT_CHANGE_THRESHOLD
        } else {
            DEFAULT_THRESHOLD
        }
    }

    fn accepts(self, value: f64, truth: f64, threshold: f64) -> bool {
        match self {
            Self::Discovered => value > threshold,
            Self::TruePositive => value > threshold && truth > 0.0,
            Self::FalsePositive => value > threshold && truth == 0.0,
            Self::TruePositiveChange => value.abs() > threshold && truth > 0.0,
            Self::FalsePositiveChange => value.abs() > threshold && truth == 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Edges of `graph` that belong to `class`.
///
/// `graph` must be a sub-matrix of `true_graph`; the true graph is reduced
/// to `graph`'s variables first. Edges come out in row-major order.
pub fn select_edges(
    graph: &AdjacencyMatrix,
    true_graph: &AdjacencyMatrix,
    class: EdgeClass,
    threshold: f64,
) -> Result<Vec<WeightedEdge>, MatrixError> {
    let truth = true_graph.reduce_to(graph)?;
    let labels = graph.labels();
    let mut edges = Vec::new();
    for (i, from) in labels.iter().enumerate() {
        for (j, to) in labels.iter().enumerate() {
            let value = graph.get(i, j);
            if class.accepts(value, truth.value(from, to)?, threshold) {
                edges.push(WeightedEdge {
                    from: from.clone(),
                    to: to.clone(),
                    weight: value,
                });
            }
        }
    }
    Ok(edges)
}

/// Edge counts of an averaged graph at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeCounts {
    pub discovered: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    /// True edges at or below the threshold.
    pub false_negatives: usize,
}

impl EdgeCounts {
    pub fn compute(
        graph: &AdjacencyMatrix,
        true_graph: &AdjacencyMatrix,
        threshold: f64,
    ) -> Result<Self, MatrixError> {
        let true_positives = select_edges(graph, true_graph, EdgeClass::TruePositive, threshold)?.len();
        let true_edges = true_graph.reduce_to(graph)?.nonzero_entries().count();
        Ok(Self {
            discovered: select_edges(graph, true_graph, EdgeClass::Discovered, threshold)?.len(),
            true_positives,
            false_positives: select_edges(graph, true_graph, EdgeClass::FalsePositive, threshold)?.len(),
            false_negatives: true_edges - true_positives,
        })
    }

    /// Share of discovered edges that are true. `None` without discoveries.
    pub fn precision(&self) -> Option<f64> {
        (self.discovered > 0).then(|| self.true_positives as f64 / self.discovered as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truth() -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(&["a", "b", "c"], &[("a", "b"), ("b", "c")]).unwrap()
    }

    fn averaged() -> AdjacencyMatrix {
        AdjacencyMatrix::new(
            vec!["a".into(), "b".into()],
            vec![vec![0.0, 0.9], vec![0.3, 0.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_true_and_false_positives() {
        let tp = select_edges(&averaged(), &truth(), EdgeClass::TruePositive, 0.2).unwrap();
        assert_eq!(tp.len(), 1);
        assert_eq!((tp[0].from.as_str(), tp[0].to.as_str(), tp[0].weight), ("a", "b", 0.9));

        let fp = select_edges(&averaged(), &truth(), EdgeClass::FalsePositive, 0.2).unwrap();
        assert_eq!(fp.len(), 1);
        assert_eq!(fp[0].from, "b");

        let none = select_edges(&averaged(), &truth(), EdgeClass::FalsePositive, 0.5).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_change_classes_use_magnitude() {
        let delta = AdjacencyMatrix::new(
            vec!["a".into(), "b".into()],
            vec![vec![0.0, -0.4], vec![0.06, 0.0]],
        )
        .unwrap();
        let tp = select_edges(&delta, &truth(), EdgeClass::TruePositiveChange, DEFAULT_CHANGE_THRESHOLD).unwrap();
        assert_eq!(tp[0].weight, -0.4);
        let fp = select_edges(&delta, &truth(), EdgeClass::FalsePositiveChange, DEFAULT_CHANGE_THRESHOLD).unwrap();
        assert_eq!(fp[0].weight, 0.06);
    }

    #[test]
    fn test_graph_must_be_sub_matrix() {
        let foreign = AdjacencyMatrix::zeros(&["z"]).unwrap();
        assert!(select_edges(&foreign, &truth(), EdgeClass::Discovered, 0.2).is_err());
    }

    #[test]
    fn test_counts() {
        let counts = EdgeCounts::compute(&averaged(), &truth(), DEFAULT_THRESHOLD).unwrap();
        assert_eq!(
            counts,
            EdgeCounts {
                discovered: 2,
                true_positives: 1,
                false_positives: 1,
                false_negatives: 0,
            }
        );
        assert_eq!(counts.precision(), Some(0.5));
    }
}
