//! Typed hyperparameters for every supported causal discovery method.
//!
//! Each method gets its own struct with `deny_unknown_fields`, so a
//! misspelled or unsupported hyperparameter fails at deserialization
//! instead of being carried along silently.

use serde::{Deserialize, Serialize};

use causalbench_core::errors::ConfigError;
use causalbench_core::AdjacencyMatrix;

/// Configuration of one algorithm adapter, externally tagged by method name.
///
/// ```toml
/// [algorithm.Pc]
/// alpha = 0.01
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlgorithmConfig {
    Pc(PcConfig),
    Ges(GesConfig),
    Gies(GiesConfig),
    Gnies(GniesConfig),
    NoTears(NoTearsConfig),
    Golem(GolemConfig),
    Icp(IcpConfig),
    UtIgsp(UtIgspConfig),
    VarSortRegress,
    R2SortRegress,
    /// Returns the true graph restricted to the data columns.
    Oracle,
}

impl AlgorithmConfig {
    /// Display name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pc(_) => "PC",
            Self::Ges(_) => "GES",
            Self::Gies(_) => "GIES",
            Self::Gnies(_) => "GNIES",
            Self::NoTears(_) => "NOTEARS",
            Self::Golem(_) => "GOLEM",
            Self::Icp(_) => "ICP",
            Self::UtIgsp(_) => "UT-IGSP",
            Self::VarSortRegress => "VarSortRegress",
            Self::R2SortRegress => "R2SortRegress",
            Self::Oracle => "Oracle",
        }
    }

    /// Whether the method consumes intervention targets.
    pub fn is_interventional(&self) -> bool {
        matches!(self, Self::Gies(_) | Self::Gnies(_) | Self::UtIgsp(_) | Self::Icp(_))
    }

    /// Check hyperparameter ranges and that every named variable is one of
    /// `columns`. `frame_count` is the number of frames the method will fit.
    pub fn validate(&self, columns: &[String], frame_count: usize) -> Result<(), ConfigError> {
        match self {
            Self::Pc(c) => check_level("Pc.alpha", c.alpha),
            Self::Ges(c) => check_phases("Ges.phases", &c.phases),
            Self::Gies(c) => {
                if c.interventions.len() != frame_count {
                    return Err(invalid(
                        "Gies.interventions",
                        format!(
                            "{} target lists given for {} frames",
                            c.interventions.len(),
                            frame_count
                        ),
                    ));
                }
                for targets in &c.interventions {
                    check_known("Gies.interventions", targets, columns)?;
                }
                if let Some(initial) = &c.initial_graph {
                    if initial.labels() != columns {
                        return Err(invalid(
                            "Gies.initial_graph",
                            format!("variables {:?} differ from data columns", initial.labels()),
                        ));
                    }
                }
                check_phases("Gies.phases", &c.phases)
            }
            Self::Gnies(c) => {
                if let Some(lmbda) = c.lmbda {
                    check_positive("Gnies.lmbda", lmbda)?;
                }
                check_known("Gnies.known_targets", &c.known_targets, columns)?;
                check_known("Gnies.initial_targets", &c.initial_targets, columns)?;
                check_phases("Gnies.ges_phases", &c.ges_phases)
            }
            Self::NoTears(c) => {
                check_non_negative("NoTears.lambda1", c.lambda1)?;
                check_positive("NoTears.h_tol", c.h_tol)?;
                check_positive("NoTears.rho_max", c.rho_max)?;
                check_non_negative("NoTears.w_threshold", c.w_threshold)?;
                if c.max_iter == 0 {
                    return Err(invalid("NoTears.max_iter", "must be at least 1".to_string()));
                }
                Ok(())
            }
            Self::Golem(c) => {
                if c.lambda_1.is_some() != c.lambda_2.is_some() {
                    return Err(invalid(
                        "Golem.lambda_1",
                        "lambda_1 and lambda_2 must be given together".to_string(),
                    ));
                }
                let (l1, l2) = c.effective_lambdas();
                check_non_negative("Golem.lambda_1", l1)?;
                check_non_negative("Golem.lambda_2", l2)?;
                check_positive("Golem.learning_rate", c.learning_rate)?;
                check_non_negative("Golem.postproc_threshold", c.postproc_threshold)
            }
            Self::Icp(c) => {
                check_level("Icp.alpha", c.alpha)?;
                check_known("Icp.target", std::slice::from_ref(&c.target), columns)?;
                for set in c.sets.iter().flatten() {
                    check_known("Icp.sets", set, columns)?;
                }
                Ok(())
            }
            Self::UtIgsp(c) => {
                check_level("UtIgsp.alpha_ci", c.alpha_ci)?;
                check_level("UtIgsp.alpha_inv", c.alpha_inv)?;
                if c.obs_idx >= frame_count {
                    return Err(invalid(
                        "UtIgsp.obs_idx",
                        format!("index {} out of range for {} frames", c.obs_idx, frame_count),
                    ));
                }
                Ok(())
            }
            Self::VarSortRegress | Self::R2SortRegress | Self::Oracle => Ok(()),
        }
    }
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message,
    }
}

fn check_level(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("significance level {value} not in (0, 1)")))
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be positive")))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be non-negative")))
    }
}

fn check_phases(field: &str, phases: &[GesPhase]) -> Result<(), ConfigError> {
    if phases.is_empty() {
        Err(invalid(field, "at least one phase required".to_string()))
    } else {
        Ok(())
    }
}

fn check_known(field: &str, names: &[String], columns: &[String]) -> Result<(), ConfigError> {
    match names.iter().find(|n| !columns.contains(n)) {
        Some(unknown) => Err(invalid(field, format!("unknown variable {unknown}"))),
        None => Ok(()),
    }
}

/// Conditional independence test used by PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndepTest {
    /// Fisher's Z test.
    #[default]
    FisherZ,
    ChiSq,
    GSq,
    /// Kernel-based test.
    Kci,
}

/// Search phases of the greedy equivalence search family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesPhase {
    Forward,
    Backward,
    Turning,
}

fn all_phases() -> Vec<GesPhase> {
    vec![GesPhase::Forward, GesPhase::Backward, GesPhase::Turning]
}

fn forward_backward() -> Vec<GesPhase> {
    vec![GesPhase::Forward, GesPhase::Backward]
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PcConfig {
    pub alpha: f64,
    #[serde(default)]
    pub indep_test: IndepTest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GesConfig {
    #[serde(default = "all_phases")]
    pub phases: Vec<GesPhase>,
    #[serde(default)]
    pub iterate: bool,
    #[serde(default)]
    pub debug: u8,
}

impl Default for GesConfig {
    fn default() -> Self {
        Self {
            phases: all_phases(),
            iterate: false,
            debug: 0,
        }
    }
}

/// GIES: one list of intervention targets per frame, by variable name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GiesConfig {
    pub interventions: Vec<Vec<String>>,
    /// Starting graph of the search. Empty graph when absent.
    #[serde(default)]
    pub initial_graph: Option<AdjacencyMatrix>,
    #[serde(default = "all_phases")]
    pub phases: Vec<GesPhase>,
    #[serde(default = "yes")]
    pub iterate: bool,
    #[serde(default)]
    pub debug: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GniesApproach {
    #[default]
    Greedy,
    Rank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GniesConfig {
    /// Penalization of the score. Library default when absent.
    #[serde(default)]
    pub lmbda: Option<f64>,
    #[serde(default)]
    pub known_targets: Vec<String>,
    #[serde(default)]
    pub approach: GniesApproach,
    /// Initial intervention target set of the outer search.
    #[serde(default)]
    pub initial_targets: Vec<String>,
    #[serde(default = "forward_backward")]
    pub phases: Vec<GesPhase>,
    #[serde(default)]
    pub direction: SearchDirection,
    #[serde(default = "yes")]
    pub center: bool,
    #[serde(default = "yes")]
    pub ges_iterate: bool,
    #[serde(default = "all_phases")]
    pub ges_phases: Vec<GesPhase>,
    #[serde(default)]
    pub debug: u8,
}

impl Default for GniesConfig {
    fn default() -> Self {
        Self {
            lmbda: None,
            known_targets: Vec::new(),
            approach: GniesApproach::Greedy,
            initial_targets: Vec::new(),
            phases: forward_backward(),
            direction: SearchDirection::Forward,
            center: true,
            ges_iterate: true,
            ges_phases: all_phases(),
            debug: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LossType {
    #[default]
    L2,
    Logistic,
    Poisson,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct NoTearsConfig {
    /// Convert the returned DAG to its CPDAG.
    pub return_cpdag: bool,
    pub lambda1: f64,
    pub loss_type: LossType,
    pub max_iter: u32,
    pub h_tol: f64,
    pub rho_max: f64,
    pub w_threshold: f64,
}

impl Default for NoTearsConfig {
    fn default() -> Self {
        Self {
            return_cpdag: false,
            lambda1: 0.1,
            loss_type: LossType::L2,
            max_iter: 100,
            h_tol: 1e-8,
            rho_max: 1e16,
            w_threshold: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GolemConfig {
    /// Equal noise variances: MSE objective. Otherwise Gaussian likelihood.
    pub equal_variances: bool,
    #[serde(default)]
    pub return_cpdag: bool,
    #[serde(default)]
    pub lambda_1: Option<f64>,
    #[serde(default)]
    pub lambda_2: Option<f64>,
    #[serde(default = "GolemConfig::default_postproc_threshold")]
    pub postproc_threshold: f64,
    #[serde(default = "GolemConfig::default_num_iter")]
    pub num_iter: u64,
    #[serde(default = "GolemConfig::default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "GolemConfig::default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub checkpoint_iter: Option<u64>,
}

impl GolemConfig {
    fn default_postproc_threshold() -> f64 {
        0.3
    }

    fn default_num_iter() -> u64 {
        100_000
    }

    fn default_learning_rate() -> f64 {
        1e-3
    }

    fn default_seed() -> u64 {
        1
    }

    pub fn new(equal_variances: bool) -> Self {
        Self {
            equal_variances,
            return_cpdag: false,
            lambda_1: None,
            lambda_2: None,
            postproc_threshold: Self::default_postproc_threshold(),
            num_iter: Self::default_num_iter(),
            learning_rate: Self::default_learning_rate(),
            seed: Self::default_seed(),
            checkpoint_iter: None,
        }
    }

    /// L1 and L2 penalties, falling back to the recommended pair for the
    /// chosen variance assumption.
    pub fn effective_lambdas(&self) -> (f64, f64) {
        match (self.lambda_1, self.lambda_2) {
            (Some(l1), Some(l2)) => (l1, l2),
            _ if self.equal_variances => (2e-2, 5.0),
            _ => (2e-3, 5.0),
        }
    }
}

/// ICP: estimates the parents of a single `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IcpConfig {
    pub target: String,
    #[serde(default = "IcpConfig::default_alpha")]
    pub alpha: f64,
    /// Candidate parent sets. All subsets when absent.
    #[serde(default)]
    pub sets: Option<Vec<Vec<String>>>,
    #[serde(default = "yes")]
    pub precompute: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl IcpConfig {
    fn default_alpha() -> f64 {
        0.05
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    Gies,
    #[default]
    Gnies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvarianceTest {
    #[default]
    Hsic,
    Gauss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UtIgspConfig {
    /// Level of the conditional independence test.
    pub alpha_ci: f64,
    /// Level of the invariance test.
    pub alpha_inv: f64,
    #[serde(default)]
    pub debug: u8,
    #[serde(default)]
    pub completion: Completion,
    #[serde(default)]
    pub test: InvarianceTest,
    /// Index of the observational frame.
    #[serde(default)]
    pub obs_idx: usize,
}
