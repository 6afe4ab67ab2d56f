//! `BootstrapComparison`: an ordered sequence of bootstraps whose variable
//! sets only ever grow.

use std::collections::BTreeMap;

use serde::Serialize;

use causalbench_core::errors::ComparisonError;
use causalbench_core::tracing::metrics;
use causalbench_core::types::variables;
use causalbench_core::AdjacencyMatrix;

use crate::bootstrap::{Bootstrap, Statistic};

/// Bootstraps compared under one theme, e.g. a growing sample size or a
/// growing set of observed variables.
///
/// Each added bootstrap must use a (non-strict) superset of the previous
/// bootstrap's variables, with the shared variables in the same relative
/// order. The last bootstrap therefore carries the union of all variables.
pub struct BootstrapComparison {
    name: String,
    bootstraps: Vec<Bootstrap>,
}

/// Per-bootstrap scalars for tables and plots, keyed by export column name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub bootstrap: String,
    pub scalars: BTreeMap<&'static str, Statistic<f64>>,
}

impl SummaryRow {
    pub fn get(&self, key: &str) -> Option<&Statistic<f64>> {
        self.scalars.get(key)
    }
}

impl BootstrapComparison {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bootstraps: Vec::new(),
        }
    }

    /// Append `bootstrap`. Rejected when it drops a variable of the previous
    /// bootstrap or reorders the shared ones.
    pub fn add(&mut self, bootstrap: Bootstrap) -> Result<(), ComparisonError> {
        if let Some(previous) = self.bootstraps.last() {
            let old = previous.variables();
            let new = bootstrap.variables();
            if !variables::variables_increase(old, new).unwrap_or(false) {
                return Err(ComparisonError::VariablesRemoved {
                    added: bootstrap.name().to_string(),
                    removed: variables::removed_variables(old, new),
                });
            }
            if !variables::same_order(old, new)? {
                return Err(ComparisonError::OrderChanged {
                    previous: old.to_vec(),
                    new: new.to_vec(),
                });
            }
        }
        tracing::debug!(
            comparison = %self.name,
            bootstrap = %bootstrap.name(),
            variables = bootstrap.variables().len(),
            "bootstrap added"
        );
        self.bootstraps.push(bootstrap);
        Ok(())
    }

    /// Run every bootstrap, one after the other. Parallelism, if any, lives
    /// inside each bootstrap.
    pub fn run(&mut self) -> Result<(), ComparisonError> {
        tracing::info!(comparison = %self.name, bootstraps = self.bootstraps.len(), "comparison started");
        for bootstrap in &mut self.bootstraps {
            let name = bootstrap.name().to_string();
            bootstrap
                .run()
                .map_err(|source| ComparisonError::Bootstrap { name, source })?;
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bootstraps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bootstraps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Bootstrap> {
        self.bootstraps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bootstrap> {
        self.bootstraps.iter()
    }

    pub fn bootstraps(&self) -> &[Bootstrap] {
        &self.bootstraps
    }

    /// Variables of the most recently added, and hence largest, bootstrap.
    pub fn all_variables(&self) -> &[String] {
        self.bootstraps.last().map(Bootstrap::variables).unwrap_or(&[])
    }

    /// True graph over `all_variables`.
    pub fn all_var_true_graph(&self) -> Option<&AdjacencyMatrix> {
        self.bootstraps.last().map(Bootstrap::true_graph)
    }

    /// Summary scalars per bootstrap, in order. Bootstraps that have not run
    /// report every scalar as failed.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.bootstraps
            .iter()
            .map(|bootstrap| {
                let scalars = match bootstrap.summary() {
                    Some(summary) => summary
                        .scalars()
                        .into_iter()
                        .map(|(key, stat)| (key, stat.clone()))
                        .collect(),
                    None => not_run_scalars(),
                };
                SummaryRow {
                    bootstrap: bootstrap.name().to_string(),
                    scalars,
                }
            })
            .collect()
    }

    /// Change of the averaged graph from each bootstrap to the next, over
    /// the larger variable set of each pair.
    pub fn deltas(&self) -> Result<Vec<AdjacencyMatrix>, ComparisonError> {
        let averages = self
            .bootstraps
            .iter()
            .map(|bootstrap| {
                bootstrap
                    .summary()
                    .and_then(|s| s.avg_avg_extension.value())
                    .ok_or_else(|| ComparisonError::MissingAverage {
                        name: bootstrap.name().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        averages
            .windows(2)
            .map(|pair| Ok(AdjacencyMatrix::delta(pair[0], pair[1])?))
            .collect()
    }
}

fn not_run_scalars() -> BTreeMap<&'static str, Statistic<f64>> {
    metrics::SUMMARY_SCALARS
        .into_iter()
        .map(|key| {
            let failed = Statistic::Failed {
                reason: "bootstrap has not run".to_string(),
            };
            (key, failed)
        })
        .collect()
}

impl<'a> IntoIterator for &'a BootstrapComparison {
    type Item = &'a Bootstrap;
    type IntoIter = std::slice::Iter<'a, Bootstrap>;

    fn into_iter(self) -> Self::IntoIter {
        self.bootstraps.iter()
    }
}
