//! Top-level benchmark configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BootstrapConfig, OutputConfig};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "causalbench.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CAUSALBENCH_*`)
/// 3. Project config (`causalbench.toml` in project root)
/// 4. User config (`~/.causalbench/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    pub bootstrap: BootstrapConfig,
    pub output: OutputConfig,
}

/// Override arguments supplied by a driver program.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub nr_bootstraps: Option<usize>,
    pub workers: Option<usize>,
    pub standardize: Option<bool>,
    pub results_dir: Option<String>,
    pub overwrite: Option<bool>,
}

impl BenchConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &BenchConfig) -> Result<(), ConfigError> {
        if config.bootstrap.nr_bootstraps == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "bootstrap.nr_bootstraps".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(dir) = &config.output.results_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.results_dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".causalbench").join("config.toml"))
    }

    fn merge_toml_file(config: &mut BenchConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BenchConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut BenchConfig, other: &BenchConfig) {
        if other.bootstrap.nr_bootstraps.is_some() {
            base.bootstrap.nr_bootstraps = other.bootstrap.nr_bootstraps;
        }
        if other.bootstrap.workers.is_some() {
            base.bootstrap.workers = other.bootstrap.workers;
        }
        if other.bootstrap.standardize.is_some() {
            base.bootstrap.standardize = other.bootstrap.standardize;
        }
        if other.output.results_dir.is_some() {
            base.output.results_dir = other.output.results_dir.clone();
        }
        if other.output.overwrite.is_some() {
            base.output.overwrite = other.output.overwrite;
        }
    }

    /// Pattern: `CAUSALBENCH_BOOTSTRAP_WORKERS`, `CAUSALBENCH_OUTPUT_RESULTS_DIR`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut BenchConfig) {
        if let Ok(val) = std::env::var("CAUSALBENCH_BOOTSTRAP_NR_BOOTSTRAPS") {
            if let Ok(v) = val.parse::<usize>() {
                config.bootstrap.nr_bootstraps = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSALBENCH_BOOTSTRAP_WORKERS") {
            if let Ok(v) = val.parse::<usize>() {
                config.bootstrap.workers = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSALBENCH_BOOTSTRAP_STANDARDIZE") {
            if let Ok(v) = val.parse::<bool>() {
                config.bootstrap.standardize = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSALBENCH_OUTPUT_RESULTS_DIR") {
            config.output.results_dir = Some(val);
        }
        if let Ok(val) = std::env::var("CAUSALBENCH_OUTPUT_OVERWRITE") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.overwrite = Some(v);
            }
        }
    }

    fn apply_overrides(config: &mut BenchConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.nr_bootstraps {
            config.bootstrap.nr_bootstraps = Some(v);
        }
        if let Some(v) = overrides.workers {
            config.bootstrap.workers = Some(v);
        }
        if let Some(v) = overrides.standardize {
            config.bootstrap.standardize = Some(v);
        }
        if let Some(ref v) = overrides.results_dir {
            config.output.results_dir = Some(v.clone());
        }
        if let Some(v) = overrides.overwrite {
            config.output.overwrite = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
