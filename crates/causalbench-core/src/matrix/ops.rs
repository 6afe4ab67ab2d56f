//! Set-like operations between adjacency matrices over nested variable sets.

use super::AdjacencyMatrix;
use crate::errors::MatrixError;
use crate::types::variables;

impl AdjacencyMatrix {
    /// Whether this matrix's variables are a (non-strict) subset of `larger`'s.
    /// Incomparable variable sets are simply not sub-matrices.
    pub fn is_sub_matrix_of(&self, larger: &AdjacencyMatrix) -> bool {
        variables::variables_increase(self.labels(), larger.labels()).unwrap_or(false)
    }

    pub fn enforce_sub_matrix_of(&self, larger: &AdjacencyMatrix) -> Result<(), MatrixError> {
        if self.is_sub_matrix_of(larger) {
            Ok(())
        } else {
            Err(MatrixError::NotSubMatrix {
                variables: variables::removed_variables(self.labels(), larger.labels()),
            })
        }
    }

    /// Sub-matrix over `labels`, in the order given.
    pub fn select<S: AsRef<str>>(&self, labels: &[S]) -> Result<AdjacencyMatrix, MatrixError> {
        let indices = labels
            .iter()
            .map(|l| {
                self.index_of(l.as_ref())
                    .ok_or_else(|| MatrixError::UnknownVariable(l.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let owned: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        if variables::has_duplicates(&owned) {
            return Err(MatrixError::DuplicateLabels { labels: owned });
        }
        let mut values = Vec::with_capacity(indices.len() * indices.len());
        for &i in &indices {
            for &j in &indices {
                values.push(self.get(i, j));
            }
        }
        Ok(AdjacencyMatrix::from_parts_unchecked(owned, values))
    }

    /// Drop every row/column whose variable is not in `target`.
    /// `target` must be a sub-matrix of `self`; the result keeps `self`'s order.
    pub fn reduce_to(&self, target: &AdjacencyMatrix) -> Result<AdjacencyMatrix, MatrixError> {
        target.enforce_sub_matrix_of(self)?;
        let common: Vec<&String> = self
            .labels()
            .iter()
            .filter(|l| target.index_of(l).is_some())
            .collect();
        self.select(&common)
    }

    /// Add zero rows/columns so the result has exactly `target`'s variables,
    /// in `target`'s order. `self` must be a sub-matrix of `target`.
    pub fn pad_zeros_to(&self, target: &AdjacencyMatrix) -> Result<AdjacencyMatrix, MatrixError> {
        self.enforce_sub_matrix_of(target)?;
        let positions: Vec<Option<usize>> =
            target.labels().iter().map(|l| self.index_of(l)).collect();
        let dim = target.dim();
        let mut values = vec![0.0; dim * dim];
        for (ti, si) in positions.iter().enumerate() {
            let Some(si) = si else { continue };
            for (tj, sj) in positions.iter().enumerate() {
                if let Some(sj) = sj {
                    values[ti * dim + tj] = self.get(*si, *sj);
                }
            }
        }
        Ok(AdjacencyMatrix::from_parts_unchecked(
            target.labels().to_vec(),
            values,
        ))
    }

    /// Element-wise `self - other`; both must share labels and order.
    pub fn sub(&self, other: &AdjacencyMatrix) -> Result<AdjacencyMatrix, MatrixError> {
        if !self.same_variables(other) {
            return Err(MatrixError::LabelMismatch {
                rows: self.labels().to_vec(),
                cols: other.labels().to_vec(),
            });
        }
        let values = self
            .values()
            .iter()
            .zip(other.values())
            .map(|(a, b)| a - b)
            .collect();
        Ok(AdjacencyMatrix::from_parts_unchecked(
            self.labels().to_vec(),
            values,
        ))
    }

    /// Change from `reference` to `new`: `new - reference`, after padding
    /// whichever matrix has fewer variables with zeros.
    pub fn delta(
        reference: &AdjacencyMatrix,
        new: &AdjacencyMatrix,
    ) -> Result<AdjacencyMatrix, MatrixError> {
        if reference.same_variables(new) {
            new.sub(reference)
        } else if reference.is_sub_matrix_of(new) {
            new.sub(&reference.pad_zeros_to(new)?)
        } else if new.is_sub_matrix_of(reference) {
            new.pad_zeros_to(reference)?.sub(reference)
        } else {
            Err(MatrixError::NotSubMatrix {
                variables: variables::removed_variables(reference.labels(), new.labels()),
            })
        }
    }

    /// Element-wise mean. All matrices must share labels and order.
    pub fn mean_of(matrices: &[&AdjacencyMatrix]) -> Result<AdjacencyMatrix, MatrixError> {
        let first = matrices.first().ok_or(MatrixError::EmptyAverage)?;
        let mut sums = vec![0.0; first.values().len()];
        for matrix in matrices {
            if !matrix.same_variables(first) {
                return Err(MatrixError::LabelMismatch {
                    rows: first.labels().to_vec(),
                    cols: matrix.labels().to_vec(),
                });
            }
            for (sum, v) in sums.iter_mut().zip(matrix.values()) {
                *sum += v;
            }
        }
        let n = matrices.len() as f64;
        let values = sums.into_iter().map(|s| s / n).collect();
        Ok(AdjacencyMatrix::from_parts_unchecked(
            first.labels().to_vec(),
            values,
        ))
    }
}
