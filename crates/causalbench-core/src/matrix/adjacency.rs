//! `AdjacencyMatrix`: a square matrix whose rows and columns carry the same
//! variable labels in the same order.

use serde::{Deserialize, Serialize};

use crate::errors::MatrixError;
use crate::types::variables;

/// Square, labeled matrix of edge weights. Row and column labels are
/// identical by construction, unique, and every entry is finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    /// Row-major, `labels.len()²` entries.
    values: Vec<f64>,
}

/// Serialized form. Deserialization re-runs every invariant check.
#[derive(Serialize, Deserialize)]
struct RawMatrix {
    variables: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TryFrom<RawMatrix> for AdjacencyMatrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        AdjacencyMatrix::new(raw.variables, raw.rows)
    }
}

impl From<AdjacencyMatrix> for RawMatrix {
    fn from(matrix: AdjacencyMatrix) -> Self {
        RawMatrix {
            rows: matrix.to_rows(),
            variables: matrix.labels,
        }
    }
}

impl AdjacencyMatrix {
    /// Validating constructor from separate row and column labels.
    ///
    /// Rejects labels that differ between the axes (content or order),
    /// duplicate labels, non-square data and non-finite entries.
    pub fn from_labeled(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, MatrixError> {
        if row_labels != col_labels {
            return Err(MatrixError::LabelMismatch {
                rows: row_labels,
                cols: col_labels,
            });
        }
        if variables::has_duplicates(&row_labels) {
            return Err(MatrixError::DuplicateLabels { labels: row_labels });
        }
        let dim = row_labels.len();
        if rows.len() != dim {
            return Err(MatrixError::RowCount {
                rows: rows.len(),
                expected: dim,
            });
        }
        let mut values = Vec::with_capacity(dim * dim);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(MatrixError::NotSquare {
                    rows: dim,
                    row: i,
                    width: row.len(),
                    expected: dim,
                });
            }
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatrixError::EntryOutOfRange {
                        row: row_labels[i].clone(),
                        col: row_labels[j].clone(),
                        value: *value,
                        range: "finite values",
                    });
                }
            }
            values.extend(row);
        }
        Ok(Self {
            labels: row_labels,
            values,
        })
    }

    /// Matrix whose rows and columns share `labels`.
    pub fn new(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        Self::from_labeled(labels.clone(), labels, rows)
    }

    /// All-zero matrix over `labels`.
    pub fn zeros<S: AsRef<str>>(labels: &[S]) -> Result<Self, MatrixError> {
        let labels: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        if variables::has_duplicates(&labels) {
            return Err(MatrixError::DuplicateLabels { labels });
        }
        let dim = labels.len();
        Ok(Self {
            labels,
            values: vec![0.0; dim * dim],
        })
    }

    /// All-zero matrix over this matrix's labels.
    pub fn zeros_like(&self) -> Self {
        Self {
            labels: self.labels.clone(),
            values: vec![0.0; self.values.len()],
        }
    }

    /// Binary matrix with a 1 for every `(from, to)` pair.
    pub fn from_edges<S: AsRef<str>>(labels: &[S], edges: &[(&str, &str)]) -> Result<Self, MatrixError> {
        let mut matrix = Self::zeros(labels)?;
        for (from, to) in edges {
            matrix.set_by_label(from, to, 1.0)?;
        }
        Ok(matrix)
    }

    pub(crate) fn from_parts_unchecked(labels: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), labels.len() * labels.len());
        Self { labels, values }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of variables.
    pub fn dim(&self) -> usize {
        self.labels.len()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Entry at (row, col). Panics when out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.dim() + col]
    }

    /// Set the entry at (row, col). Panics when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let dim = self.dim();
        self.values[row * dim + col] = value;
    }

    /// Entry for the edge `from → to`.
    pub fn value(&self, from: &str, to: &str) -> Result<f64, MatrixError> {
        let i = self.require_index(from)?;
        let j = self.require_index(to)?;
        Ok(self.get(i, j))
    }

    pub fn set_by_label(&mut self, from: &str, to: &str, value: f64) -> Result<(), MatrixError> {
        let i = self.require_index(from)?;
        let j = self.require_index(to)?;
        self.set(i, j, value);
        Ok(())
    }

    fn require_index(&self, label: &str) -> Result<usize, MatrixError> {
        self.index_of(label)
            .ok_or_else(|| MatrixError::UnknownVariable(label.to_string()))
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let dim = self.dim();
        &self.values[row * dim..(row + 1) * dim]
    }

    /// Row-major raw entries.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.dim()).map(|i| self.row(i).to_vec()).collect()
    }

    /// Every nonzero entry as `(row, col, value)`, row-major.
    pub fn nonzero_entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let dim = self.dim();
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(move |(k, v)| (k / dim, k % dim, *v))
    }

    pub fn transpose(&self) -> Self {
        let dim = self.dim();
        let mut values = vec![0.0; dim * dim];
        for i in 0..dim {
            for j in 0..dim {
                values[j * dim + i] = self.get(i, j);
            }
        }
        Self::from_parts_unchecked(self.labels.clone(), values)
    }

    /// Copy with every nonzero entry set to 1.
    pub fn binarized(&self) -> Self {
        let values = self
            .values
            .iter()
            .map(|v| if *v != 0.0 { 1.0 } else { 0.0 })
            .collect();
        Self::from_parts_unchecked(self.labels.clone(), values)
    }

    /// Whether all entries are 0 or 1.
    pub fn is_binary(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0 || *v == 1.0)
    }

    /// Whether all entries lie in [0, 1].
    pub fn is_fractional(&self) -> bool {
        self.values.iter().all(|v| (0.0..=1.0).contains(v))
    }

    /// Whether all entries lie in [-1, 1].
    pub fn is_signed_fractional(&self) -> bool {
        self.values.iter().all(|v| (-1.0..=1.0).contains(v))
    }

    pub fn enforce_binary(&self) -> Result<(), MatrixError> {
        self.enforce_range(|v| v == 0.0 || v == 1.0, "{0, 1}")
    }

    pub fn enforce_fractional(&self) -> Result<(), MatrixError> {
        self.enforce_range(|v| (0.0..=1.0).contains(&v), "[0, 1]")
    }

    pub fn enforce_signed_fractional(&self) -> Result<(), MatrixError> {
        self.enforce_range(|v| (-1.0..=1.0).contains(&v), "[-1, 1]")
    }

    fn enforce_range(&self, ok: impl Fn(f64) -> bool, range: &'static str) -> Result<(), MatrixError> {
        let dim = self.dim();
        match self.values.iter().position(|v| !ok(*v)) {
            None => Ok(()),
            Some(k) => Err(MatrixError::EntryOutOfRange {
                row: self.labels[k / dim].clone(),
                col: self.labels[k % dim].clone(),
                value: self.values[k],
                range,
            }),
        }
    }

    /// Whether both matrices carry the same labels in the same order.
    pub fn same_variables(&self, other: &AdjacencyMatrix) -> bool {
        self.labels == other.labels
    }
}
