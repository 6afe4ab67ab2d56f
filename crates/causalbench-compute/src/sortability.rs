//! Variance- and R²-sortability of a dataset against a true graph.
//!
//! Sortability is the share of ordered pairs (i, j) connected by a directed
//! path in the true graph for which the score of j strictly exceeds the
//! score of i. Pairs are counted once per path length 1..d-1, ties count
//! zero. A value near 1 means that sorting variables by the score recovers
//! the causal order.

use nalgebra::{DMatrix, DVector};
use statrs::statistics::Statistics;

use causalbench_core::errors::SortabilityError;
use causalbench_core::{AdjacencyMatrix, Frame};

/// Sortability by marginal (population) variance.
pub fn var_sortability(pooled: &Frame, true_graph: &AdjacencyMatrix) -> Result<f64, SortabilityError> {
    check_inputs(pooled, true_graph)?;
    let scores = variances(pooled)?;
    sortability(true_graph, &scores)
}

/// Sortability by the R² of regressing each variable on all others.
pub fn r2_sortability(pooled: &Frame, true_graph: &AdjacencyMatrix) -> Result<f64, SortabilityError> {
    check_inputs(pooled, true_graph)?;
    variances(pooled)?;
    let scores = r2_scores(pooled)?;
    sortability(true_graph, &scores)
}

fn check_inputs(pooled: &Frame, true_graph: &AdjacencyMatrix) -> Result<(), SortabilityError> {
    if pooled.columns() != true_graph.labels() {
        return Err(SortabilityError::VariableMismatch {
            data: pooled.columns().to_vec(),
            graph: true_graph.labels().to_vec(),
        });
    }
    if pooled.nrows() < 2 {
        return Err(SortabilityError::TooFewObservations {
            needed: 2,
            got: pooled.nrows(),
        });
    }
    Ok(())
}

fn sortability(true_graph: &AdjacencyMatrix, scores: &[f64]) -> Result<f64, SortabilityError> {
    for (column, score) in true_graph.labels().iter().zip(scores) {
        if !score.is_finite() {
            return Err(SortabilityError::NonFiniteScore {
                column: column.clone(),
            });
        }
    }

    let d = true_graph.dim();
    let edges: Vec<bool> = true_graph.values().iter().map(|v| *v != 0.0).collect();
    let mut reach = edges.clone();
    let mut n_paths = 0usize;
    let mut n_sorted = 0usize;

    for _ in 1..d {
        for i in 0..d {
            for j in 0..d {
                if reach[i * d + j] {
                    n_paths += 1;
                    if scores[j] / scores[i] > 1.0 {
                        n_sorted += 1;
                    }
                }
            }
        }
        reach = bool_product(&reach, &edges, d);
    }

    if n_paths == 0 {
        return Err(SortabilityError::NoPaths);
    }
    Ok(n_sorted as f64 / n_paths as f64)
}

/// Boolean matrix product: pairs joined by a path one edge longer.
fn bool_product(left: &[bool], right: &[bool], d: usize) -> Vec<bool> {
    let mut out = vec![false; d * d];
    for i in 0..d {
        for k in 0..d {
            if !left[i * d + k] {
                continue;
            }
            for j in 0..d {
                if right[k * d + j] {
                    out[i * d + j] = true;
                }
            }
        }
    }
    out
}

fn variances(pooled: &Frame) -> Result<Vec<f64>, SortabilityError> {
    (0..pooled.ncols())
        .map(|c| {
            let var = pooled.column(c).population_variance();
            if var > 0.0 {
                Ok(var)
            } else {
                Err(SortabilityError::ZeroVariance {
                    column: pooled.columns()[c].clone(),
                })
            }
        })
        .collect()
}

fn data_matrix(pooled: &Frame) -> DMatrix<f64> {
    let rows = pooled.rows();
    DMatrix::from_fn(pooled.nrows(), pooled.ncols(), |r, c| rows[r][c])
}

/// R² of each column regressed on all others: `1 - 1 / diag(R⁻¹)` with `R`
/// the correlation matrix, or explicit least squares when `R` is singular.
fn r2_scores(pooled: &Frame) -> Result<Vec<f64>, SortabilityError> {
    let x = data_matrix(pooled);
    let corr = correlation(&x);
    match inverse_diagonal(&corr) {
        Some(diag) if diag.iter().all(|v| v.is_finite() && *v != 0.0) => {
            Ok(diag.into_iter().map(|v| 1.0 - 1.0 / v).collect())
        }
        _ => {
            tracing::debug!("correlation matrix singular, falling back to least squares");
            (0..x.ncols())
                .map(|k| {
                    regression_r2(&x, k).ok_or_else(|| SortabilityError::NonFiniteScore {
                        column: pooled.columns()[k].clone(),
                    })
                })
                .collect()
        }
    }
}

fn correlation(x: &DMatrix<f64>) -> DMatrix<f64> {
    let (n, d) = x.shape();
    let means = x.row_mean();
    let centered = DMatrix::from_fn(n, d, |r, c| x[(r, c)] - means[c]);
    let cov = centered.transpose() * &centered / (n as f64 - 1.0);
    let sd: Vec<f64> = cov.diagonal().iter().map(|v| v.sqrt()).collect();
    DMatrix::from_fn(cov.nrows(), cov.ncols(), |i, j| cov[(i, j)] / (sd[i] * sd[j]))
}

fn inverse_diagonal(m: &DMatrix<f64>) -> Option<Vec<f64>> {
    let n = m.nrows();
    if let Some(chol) = m.clone().cholesky() {
        let mut out = vec![0.0; n];
        for idx in 0..n {
            let mut e = DVector::<f64>::zeros(n);
            e[idx] = 1.0;
            out[idx] = chol.solve(&e)[idx];
        }
        return Some(out);
    }
    let lu = m.clone().lu();
    let mut out = vec![0.0; n];
    for idx in 0..n {
        let mut e = DVector::<f64>::zeros(n);
        e[idx] = 1.0;
        out[idx] = lu.solve(&e)?[idx];
    }
    Some(out)
}

/// R² of an intercept-plus-linear least-squares fit of column `k` on the others.
fn regression_r2(x: &DMatrix<f64>, k: usize) -> Option<f64> {
    let (n, d) = x.shape();
    let design = DMatrix::from_fn(n, d, |r, c| match c {
        0 => 1.0,
        c if c <= k => x[(r, c - 1)],
        c => x[(r, c)],
    });
    let y = x.column(k).into_owned();
    let beta = design.clone().svd(true, true).solve(&y, 1e-12).ok()?;
    let residuals = &y - &design * beta;
    let mean = y.sum() / n as f64;
    let ss_tot: f64 = y.iter().map(|v| (v - mean).powi(2)).sum();
    let r2 = 1.0 - residuals.norm_squared() / ss_tot;
    r2.is_finite().then_some(r2)
}
