//! Tests for frames, pooling, standardization and resampling.

use causalbench_core::data::{bootstrap_sample, pool, standardize_all, Frame, SampleSize};
use causalbench_core::errors::DataError;

fn frame(columns: &[&str], rows: Vec<Vec<f64>>) -> Frame {
    Frame::new(columns.iter().map(|c| c.to_string()).collect(), rows).unwrap()
}

#[test]
fn test_constant_column_standardizes_finite() {
    let f = frame(&["x", "c"], vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]]);
    let s = f.standardize();
    for row in s.rows() {
        assert!(row.iter().all(|v| v.is_finite()));
        assert_eq!(row[1], 0.0);
    }
    let x = s.column(0);
    assert!((x[0] + 1.0).abs() < 1e-12);
    assert!((x[2] - 1.0).abs() < 1e-12);
}

#[test]
fn test_single_row_standardizes_finite() {
    let f = frame(&["x"], vec![vec![4.0]]);
    assert_eq!(f.standardize().rows(), &[vec![0.0]]);
}

#[test]
fn test_pool_requires_same_columns() {
    let a = frame(&["x", "y"], vec![vec![1.0, 2.0]]);
    let b = frame(&["x", "y"], vec![vec![3.0, 4.0], vec![5.0, 6.0]]);
    assert_eq!(pool(&[a.clone(), b]).unwrap().nrows(), 3);

    let c = frame(&["y", "x"], vec![vec![1.0, 2.0]]);
    assert!(matches!(
        pool(&[a, c]),
        Err(DataError::ColumnMismatch { index: 1, .. })
    ));
    assert!(matches!(pool(&[]), Err(DataError::NoFrames)));
}

#[test]
fn test_rejects_non_finite_observations() {
    let err = Frame::new(vec!["x".into()], vec![vec![f64::INFINITY]]).unwrap_err();
    assert!(matches!(err, DataError::NonFinite { row: 0, .. }));
}

#[test]
fn test_sampling_reproducible_across_calls() {
    let frames = standardize_all(&[
        frame(&["x", "y"], (0..30).map(|i| vec![i as f64, (i % 7) as f64]).collect()),
        frame(&["x", "y"], (0..12).map(|i| vec![-(i as f64), 1.0]).collect()),
    ]);
    let sizes = [SampleSize::Fraction(0.5), SampleSize::Count(100)];
    for replicate in 0..5 {
        let first = bootstrap_sample(&frames, &sizes, replicate).unwrap();
        let second = bootstrap_sample(&frames, &sizes, replicate).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].nrows(), 15);
        assert_eq!(first[1].nrows(), 100);
    }
}

#[test]
fn test_invalid_sample_size_rejected() {
    let frames = [frame(&["x"], vec![vec![1.0], vec![2.0]])];
    let err = bootstrap_sample(&frames, &[SampleSize::Count(1)], 0).unwrap_err();
    assert!(matches!(err, DataError::InvalidSampleSize { .. }));
}

#[test]
fn test_empty_frame_cannot_be_sampled() {
    let frames = [frame(&["x"], vec![])];
    let err = bootstrap_sample(&frames, &[SampleSize::Count(4)], 0).unwrap_err();
    assert_eq!(err, DataError::EmptyFrame { index: 0 });
}
