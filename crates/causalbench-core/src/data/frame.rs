//! `Frame`: observations × variables with named columns.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::errors::DataError;
use crate::types::variables;

/// A rectangular block of finite observations with unique column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawFrame {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TryFrom<RawFrame> for Frame {
    type Error = DataError;

    fn try_from(raw: RawFrame) -> Result<Self, Self::Error> {
        Frame::new(raw.columns, raw.rows)
    }
}

impl Frame {
    /// Build a frame from named columns and row-major observations.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        if variables::has_duplicates(&columns) {
            return Err(DataError::DuplicateColumns(columns));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DataError::RaggedRow {
                    row: r,
                    width: row.len(),
                    expected: columns.len(),
                });
            }
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFinite {
                    row: r,
                    column: columns[c].clone(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Build a frame from `(name, values)` columns of equal length.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self, DataError> {
        let nrows = columns.first().map_or(0, |(_, v)| v.len());
        let mut rows = vec![Vec::with_capacity(columns.len()); nrows];
        let mut names = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            if values.len() != nrows {
                return Err(DataError::RaggedRow {
                    row: values.len().min(nrows),
                    width: names.len(),
                    expected: names.len() + 1,
                });
            }
            for (row, v) in rows.iter_mut().zip(values) {
                row.push(v);
            }
            names.push(name);
        }
        Self::new(names, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of column `index`, top to bottom.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[index]).collect()
    }

    pub fn column_by_name(&self, name: &str) -> Option<Vec<f64>> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.column(i))
    }

    /// New frame made of the rows at `indices` (repeats allowed).
    pub fn take_rows(&self, indices: &[usize]) -> Frame {
        Frame {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Column-wise standardization to mean 0 and sample standard deviation 1.
    ///
    /// A column whose standard deviation is zero (or undefined, with fewer
    /// than two rows) is only centered: its divisor is 1.
    pub fn standardize(&self) -> Frame {
        let mut rows = self.rows.clone();
        for c in 0..self.ncols() {
            let column = self.column(c);
            let mean = column.iter().mean();
            let sd = column.iter().std_dev();
            let divisor = if sd.is_finite() && sd > 0.0 { sd } else { 1.0 };
            let mean = if mean.is_finite() { mean } else { 0.0 };
            for row in rows.iter_mut() {
                row[c] = (row[c] - mean) / divisor;
            }
        }
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// Whether every frame carries the same columns in the same order.
/// Errors on an empty slice.
pub fn same_columns(frames: &[Frame]) -> Result<bool, DataError> {
    let first = frames.first().ok_or(DataError::NoFrames)?;
    Ok(frames.iter().all(|f| f.columns == first.columns))
}

/// Error naming the first frame whose columns differ from `expected`.
pub fn enforce_columns<S: AsRef<str>>(frames: &[Frame], expected: &[S]) -> Result<(), DataError> {
    if frames.is_empty() {
        return Err(DataError::NoFrames);
    }
    for (index, frame) in frames.iter().enumerate() {
        let matches = frame.columns.len() == expected.len()
            && frame
                .columns
                .iter()
                .zip(expected)
                .all(|(a, b)| a == b.as_ref());
        if !matches {
            return Err(DataError::ColumnMismatch {
                index,
                expected: expected.iter().map(|e| e.as_ref().to_string()).collect(),
                found: frame.columns.clone(),
            });
        }
    }
    Ok(())
}

/// Concatenate the rows of frames that share columns and column order.
pub fn pool(frames: &[Frame]) -> Result<Frame, DataError> {
    let first = frames.first().ok_or(DataError::NoFrames)?;
    enforce_columns(frames, &first.columns)?;
    let rows = frames.iter().flat_map(|f| f.rows.iter().cloned()).collect();
    Ok(Frame {
        columns: first.columns.clone(),
        rows,
    })
}

/// Standardize every frame independently.
pub fn standardize_all(frames: &[Frame]) -> Vec<Frame> {
    frames.iter().map(Frame::standardize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(values: &[[f64; 2]]) -> Frame {
        Frame::new(
            vec!["a".into(), "b".into()],
            values.iter().map(|r| r.to_vec()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Frame::new(vec!["a".into(), "b".into()], vec![vec![1.0]]).unwrap_err();
        assert!(matches!(err, DataError::RaggedRow { row: 0, .. }));
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let err = Frame::new(vec!["a".into(), "a".into()], vec![]).unwrap_err();
        assert!(matches!(err, DataError::DuplicateColumns(_)));
    }

    #[test]
    fn test_pool_concatenates() {
        let pooled = pool(&[frame(&[[1.0, 2.0]]), frame(&[[3.0, 4.0], [5.0, 6.0]])]).unwrap();
        assert_eq!(pooled.nrows(), 3);
        assert_eq!(pooled.column(0), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_pool_rejects_mismatch() {
        let other = Frame::new(vec!["b".into(), "a".into()], vec![vec![0.0, 0.0]]).unwrap();
        assert!(matches!(
            pool(&[frame(&[[1.0, 2.0]]), other]),
            Err(DataError::ColumnMismatch { index: 1, .. })
        ));
        assert_eq!(pool(&[]).unwrap_err(), DataError::NoFrames);
    }

    #[test]
    fn test_standardize() {
        let std = frame(&[[1.0, 7.0], [2.0, 7.0], [3.0, 7.0]]).standardize();
        assert_eq!(std.column(0), vec![-1.0, 0.0, 1.0]);
        // Zero variance: centered only.
        assert_eq!(std.column(1), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_columns() {
        let f = Frame::from_columns(vec![
            ("x".into(), vec![1.0, 2.0]),
            ("y".into(), vec![3.0, 4.0]),
        ])
        .unwrap();
        assert_eq!(f.rows(), &[vec![1.0, 3.0], vec![2.0, 4.0]]);
        assert_eq!(f.column_by_name("y"), Some(vec![3.0, 4.0]));
    }
}
