//! Labeled square adjacency matrices.
//!
//! Entry (i, j) = 1 with (j, i) = 0 is a directed edge i → j, both 1 is an
//! undirected edge, both 0 is no edge. Averaged matrices hold edge
//! frequencies in [0, 1], differences of averages live in [-1, 1].

pub mod adjacency;
pub mod ops;

pub use adjacency::AdjacencyMatrix;
