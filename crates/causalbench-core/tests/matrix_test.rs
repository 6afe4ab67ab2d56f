//! Tests for labeled adjacency matrices.

use causalbench_core::errors::MatrixError;
use causalbench_core::AdjacencyMatrix;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_rejects_mismatched_axes() {
    let err = AdjacencyMatrix::from_labeled(
        labels(&["a", "b"]),
        labels(&["b", "a"]),
        vec![vec![0.0, 1.0], vec![0.0, 0.0]],
    )
    .unwrap_err();
    assert!(matches!(err, MatrixError::LabelMismatch { .. }));
}

#[test]
fn test_rejects_duplicates_and_shape() {
    let err = AdjacencyMatrix::new(labels(&["a", "a"]), vec![vec![0.0; 2]; 2]).unwrap_err();
    assert!(matches!(err, MatrixError::DuplicateLabels { .. }));

    let err = AdjacencyMatrix::new(labels(&["a", "b"]), vec![vec![0.0; 2]]).unwrap_err();
    assert_eq!(err, MatrixError::RowCount { rows: 1, expected: 2 });

    let err = AdjacencyMatrix::new(labels(&["a", "b"]), vec![vec![0.0; 2], vec![0.0]]).unwrap_err();
    assert!(matches!(err, MatrixError::NotSquare { row: 1, width: 1, .. }));
}

#[test]
fn test_rejects_non_finite() {
    let err = AdjacencyMatrix::new(labels(&["a"]), vec![vec![f64::NAN]]).unwrap_err();
    assert!(matches!(err, MatrixError::EntryOutOfRange { .. }));
}

#[test]
fn test_deserialization_revalidates() {
    let ok: AdjacencyMatrix =
        serde_json::from_str(r#"{"variables":["x","y"],"rows":[[0,1],[0,0]]}"#).unwrap();
    assert_eq!(ok.value("x", "y").unwrap(), 1.0);

    let bad = serde_json::from_str::<AdjacencyMatrix>(r#"{"variables":["x","y"],"rows":[[0,1]]}"#);
    assert!(bad.is_err());
}

#[test]
fn test_range_checks() {
    let binary = AdjacencyMatrix::from_edges(&["a", "b", "c"], &[("a", "b"), ("b", "c")]).unwrap();
    assert!(binary.is_binary());
    assert!(binary.enforce_fractional().is_ok());

    let signed = AdjacencyMatrix::new(labels(&["a", "b"]), vec![vec![0.0, -0.5], vec![0.5, 0.0]]).unwrap();
    assert!(!signed.is_fractional());
    assert!(signed.enforce_signed_fractional().is_ok());
    assert!(signed.enforce_binary().is_err());
}

#[test]
fn test_pad_and_reduce() {
    let small = AdjacencyMatrix::from_edges(&["a", "c"], &[("a", "c")]).unwrap();
    let big = AdjacencyMatrix::from_edges(&["a", "b", "c"], &[("a", "b")]).unwrap();

    let padded = small.pad_zeros_to(&big).unwrap();
    assert_eq!(padded.labels(), big.labels());
    assert_eq!(padded.value("a", "c").unwrap(), 1.0);
    assert_eq!(padded.value("a", "b").unwrap(), 0.0);

    let reduced = big.reduce_to(&small).unwrap();
    assert_eq!(reduced.labels(), small.labels());
    assert_eq!(reduced.value("a", "c").unwrap(), 0.0);

    assert!(big.pad_zeros_to(&small).is_err());
}

#[test]
fn test_delta_pads_smaller_side() {
    let reference = AdjacencyMatrix::from_edges(&["a", "b"], &[("a", "b")]).unwrap();
    let new = AdjacencyMatrix::from_edges(&["a", "b", "c"], &[("b", "c")]).unwrap();

    let delta = AdjacencyMatrix::delta(&reference, &new).unwrap();
    assert_eq!(delta.labels(), new.labels());
    assert_eq!(delta.value("a", "b").unwrap(), -1.0);
    assert_eq!(delta.value("b", "c").unwrap(), 1.0);

    let back = AdjacencyMatrix::delta(&new, &reference).unwrap();
    assert_eq!(back.value("a", "b").unwrap(), 1.0);
    assert_eq!(back.value("b", "c").unwrap(), -1.0);
}

#[test]
fn test_delta_incomparable() {
    let a = AdjacencyMatrix::zeros(&["a", "b"]).unwrap();
    let b = AdjacencyMatrix::zeros(&["c"]).unwrap();
    assert!(matches!(
        AdjacencyMatrix::delta(&a, &b),
        Err(MatrixError::NotSubMatrix { .. })
    ));
}

#[test]
fn test_mean_of() {
    let a = AdjacencyMatrix::from_edges(&["a", "b"], &[("a", "b")]).unwrap();
    let b = AdjacencyMatrix::from_edges(&["a", "b"], &[("b", "a")]).unwrap();
    let mean = AdjacencyMatrix::mean_of(&[&a, &b, &a, &a]).unwrap();
    assert_eq!(mean.value("a", "b").unwrap(), 0.75);
    assert_eq!(mean.value("b", "a").unwrap(), 0.25);
    assert!(mean.is_fractional());
    assert_eq!(AdjacencyMatrix::mean_of(&[]).unwrap_err(), MatrixError::EmptyAverage);
}
