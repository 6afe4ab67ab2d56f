use criterion::{criterion_group, criterion_main, Criterion};

use causalbench_compute::extensions::consistent_extensions;
use causalbench_compute::sortability::{r2_sortability, var_sortability};
use causalbench_core::{AdjacencyMatrix, Frame};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("x{i}")).collect()
}

/// Undirected chain x0 - x1 - ... - x(n-1): n extensions.
fn undirected_chain(n: usize) -> AdjacencyMatrix {
    let mut pdag = AdjacencyMatrix::zeros(&labels(n)).unwrap();
    for i in 0..n - 1 {
        pdag.set(i, i + 1, 1.0);
        pdag.set(i + 1, i, 1.0);
    }
    pdag
}

/// Fully undirected graph on n nodes: n! extensions.
fn undirected_complete(n: usize) -> AdjacencyMatrix {
    let mut pdag = AdjacencyMatrix::zeros(&labels(n)).unwrap();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                pdag.set(i, j, 1.0);
            }
        }
    }
    pdag
}

/// Chain x0 → x1 → ... with 1000 rows of data whose variance grows downstream.
fn chain_data(n: usize) -> (Frame, AdjacencyMatrix) {
    let mut truth = AdjacencyMatrix::zeros(&labels(n)).unwrap();
    for i in 0..n - 1 {
        truth.set(i, i + 1, 1.0);
    }
    let rows = (0..1000)
        .map(|r| {
            let mut value = ((r * 7919) % 101) as f64 / 10.0;
            (0..n)
                .map(|k| {
                    if k > 0 {
                        value = 1.5 * value + ((r * (k + 3)) % 13) as f64 / 13.0;
                    }
                    value
                })
                .collect()
        })
        .collect();
    (Frame::new(labels(n), rows).unwrap(), truth)
}

fn bench_extensions(c: &mut Criterion) {
    let chain = undirected_chain(12);
    c.bench_function("extensions_undirected_chain_12", |b| {
        b.iter(|| consistent_extensions(&chain));
    });

    let complete = undirected_complete(6);
    c.bench_function("extensions_undirected_complete_6", |b| {
        b.iter(|| consistent_extensions(&complete));
    });
}

fn bench_sortability(c: &mut Criterion) {
    let (frame, truth) = chain_data(10);
    c.bench_function("var_sortability_10_vars_1k_rows", |b| {
        b.iter(|| var_sortability(&frame, &truth));
    });
    c.bench_function("r2_sortability_10_vars_1k_rows", |b| {
        b.iter(|| r2_sortability(&frame, &truth));
    });
}

criterion_group!(benches, bench_extensions, bench_sortability);
criterion_main!(benches);
