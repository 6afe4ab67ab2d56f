//! `Bootstrap`: resample one dataset many times, fit one algorithm per
//! replicate and aggregate the outcomes.

pub mod options;
pub mod statistic;
pub mod summary;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use rayon::prelude::*;

use causalbench_core::data::{bootstrap_sample, enforce_columns, standardize_all};
use causalbench_core::errors::{BootstrapError, DataError};
use causalbench_core::{AdjacencyMatrix, BenchConfig, Frame, SampleSize};

pub use options::BootstrapOptions;
pub use statistic::Statistic;
pub use summary::BootstrapSummary;

use crate::algorithm::{AlgorithmConfig, CausalAlgorithm};
use crate::task::{CausalInferenceTask, CompletedTask};

/// `nr_bootstraps` resampled replicates of one (algorithm, dataset, true
/// graph) triple.
///
/// All configuration is validated by `new`; `run` only fails on internal
/// inconsistencies. Replicate `k` draws frame `f` with seed
/// `k * frame_count + f`, so identical configurations resample identically.
pub struct Bootstrap {
    name: String,
    algorithm: Box<dyn CausalAlgorithm>,
    frames: Vec<Frame>,
    sample_sizes: Vec<SampleSize>,
    nr_bootstraps: usize,
    true_graph: AdjacencyMatrix,
    options: BootstrapOptions,
    tasks: Vec<CompletedTask>,
    summary: Option<BootstrapSummary>,
}

impl Bootstrap {
    pub fn new(
        name: impl Into<String>,
        algorithm: Box<dyn CausalAlgorithm>,
        frames: Vec<Frame>,
        sample_sizes: Vec<SampleSize>,
        nr_bootstraps: usize,
        true_graph: AdjacencyMatrix,
        options: BootstrapOptions,
    ) -> Result<Self, BootstrapError> {
        let name = name.into();

        if frames.is_empty() {
            return Err(BootstrapError::NoData { name });
        }
        enforce_columns(&frames, true_graph.labels()).map_err(|e| match e {
            DataError::ColumnMismatch { .. } => BootstrapError::VariableMismatch {
                name: name.clone(),
                message: e.to_string(),
            },
            other => BootstrapError::Data(other),
        })?;
        if sample_sizes.len() != frames.len() {
            return Err(BootstrapError::SampleSizeCountMismatch {
                sizes: sample_sizes.len(),
                frames: frames.len(),
            });
        }
        for (index, (size, frame)) in sample_sizes.iter().zip(&frames).enumerate() {
            size.validate()
                .map_err(|e| BootstrapError::InvalidSampleSize {
                    index,
                    message: e.to_string(),
                })?;
            if frame.is_empty() {
                return Err(BootstrapError::InvalidSampleSize {
                    index,
                    message: "frame has no rows to resample".to_string(),
                });
            }
            if size.resolve(frame.nrows()) == 0 {
                return Err(BootstrapError::InvalidSampleSize {
                    index,
                    message: format!("{size} of {} rows draws no rows", frame.nrows()),
                });
            }
        }
        if nr_bootstraps < 1 {
            return Err(BootstrapError::TooFewReplicates(nr_bootstraps));
        }
        algorithm
            .config()
            .validate(true_graph.labels(), frames.len())
            .map_err(|e| BootstrapError::InvalidAlgorithmConfig {
                name: name.clone(),
                message: e.to_string(),
            })?;

        let frames = if options.standardize {
            standardize_all(&frames)
        } else {
            frames
        };

        Ok(Self {
            name,
            algorithm,
            frames,
            sample_sizes,
            nr_bootstraps,
            true_graph,
            options,
            tasks: Vec::new(),
            summary: None,
        })
    }

    /// Like `new`, with the replicate count and options taken from the
    /// resolved `[bootstrap]` configuration.
    pub fn from_config(
        name: impl Into<String>,
        algorithm: Box<dyn CausalAlgorithm>,
        frames: Vec<Frame>,
        sample_sizes: Vec<SampleSize>,
        true_graph: AdjacencyMatrix,
        config: &BenchConfig,
    ) -> Result<Self, BootstrapError> {
        Self::new(
            name,
            algorithm,
            frames,
            sample_sizes,
            config.bootstrap.effective_nr_bootstraps(),
            true_graph,
            BootstrapOptions::from_config(config),
        )
    }

    /// Resample, run every replicate and aggregate. Running again replaces
    /// earlier results with identical ones.
    pub fn run(&mut self) -> Result<&BootstrapSummary, BootstrapError> {
        let start = Instant::now();
        tracing::info!(
            bootstrap = %self.name,
            nr_bootstraps = self.nr_bootstraps,
            workers = self.options.workers,
            "bootstrap started"
        );

        let tasks = self.create_tasks()?;
        let mut completed = self.execute(tasks)?;
        if completed.len() != self.nr_bootstraps {
            return Err(BootstrapError::IncompleteRun {
                name: self.name.clone(),
                expected: self.nr_bootstraps,
                completed: completed.len(),
            });
        }
        completed.sort_by_key(CompletedTask::replicate);

        let summary = BootstrapSummary::aggregate(&self.name, &completed, &self.true_graph);
        tracing::info!(
            bootstrap = %self.name,
            run_duration_ms = start.elapsed().as_millis() as u64,
            crash_rate = summary.crash_rate.value_or_sentinel(),
            no_extension_rate = summary.no_extension_rate.value_or_sentinel(),
            "bootstrap finished"
        );

        self.tasks = completed;
        Ok(&*self.summary.insert(summary))
    }

    fn create_tasks(&self) -> Result<Vec<CausalInferenceTask>, BootstrapError> {
        (0..self.nr_bootstraps)
            .map(|replicate| {
                let sample = bootstrap_sample(&self.frames, &self.sample_sizes, replicate)?;
                let task = CausalInferenceTask::new(
                    replicate,
                    self.algorithm.clone_boxed(),
                    sample,
                    self.true_graph.clone(),
                )?;
                Ok(task)
            })
            .collect()
    }

    /// Run every task, sequentially or on a dedicated pool of
    /// `options.workers` threads. Tasks that panic outside the adapter are
    /// dropped, which the caller detects as an incomplete run.
    fn execute(&self, tasks: Vec<CausalInferenceTask>) -> Result<Vec<CompletedTask>, BootstrapError> {
        if self.options.is_sequential() {
            return Ok(tasks.into_iter().filter_map(run_guarded).collect());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.workers)
            .thread_name(|i| format!("causalbench-worker-{i}"))
            .build()
            .map_err(|e| BootstrapError::WorkerPool(e.to_string()))?;
        Ok(pool.install(|| tasks.into_par_iter().filter_map(run_guarded).collect()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variables of the true graph and of every frame, in order.
    pub fn variables(&self) -> &[String] {
        self.true_graph.labels()
    }

    pub fn true_graph(&self) -> &AdjacencyMatrix {
        &self.true_graph
    }

    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }

    pub fn algorithm_config(&self) -> AlgorithmConfig {
        self.algorithm.config()
    }

    /// Frames replicates are drawn from, standardized if requested.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn sample_sizes(&self) -> &[SampleSize] {
        &self.sample_sizes
    }

    pub fn nr_bootstraps(&self) -> usize {
        self.nr_bootstraps
    }

    pub fn options(&self) -> BootstrapOptions {
        self.options
    }

    /// Completed replicates ordered by replicate index. Empty before `run`.
    pub fn tasks(&self) -> &[CompletedTask] {
        &self.tasks
    }

    pub fn summary(&self) -> Option<&BootstrapSummary> {
        self.summary.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }
}

fn run_guarded(task: CausalInferenceTask) -> Option<CompletedTask> {
    let replicate = task.replicate();
    match catch_unwind(AssertUnwindSafe(|| task.run())) {
        Ok(done) => Some(done),
        Err(_) => {
            tracing::error!(replicate, "task panicked outside the algorithm");
            None
        }
    }
}
