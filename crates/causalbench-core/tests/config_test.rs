//! Tests for the configuration system.

use std::sync::Mutex;

use causalbench_core::config::{BenchConfig, ConfigOverrides};
use causalbench_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env_vars() {
    for key in [
        "CAUSALBENCH_BOOTSTRAP_NR_BOOTSTRAPS",
        "CAUSALBENCH_BOOTSTRAP_WORKERS",
        "CAUSALBENCH_BOOTSTRAP_STANDARDIZE",
        "CAUSALBENCH_OUTPUT_RESULTS_DIR",
        "CAUSALBENCH_OUTPUT_OVERWRITE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("causalbench.toml"),
        r#"
[bootstrap]
nr_bootstraps = 20
workers = 4
standardize = true

[output]
results_dir = "out"
"#,
    )
    .unwrap();

    std::env::set_var("CAUSALBENCH_BOOTSTRAP_WORKERS", "8");
    let overrides = ConfigOverrides {
        nr_bootstraps: Some(50),
        ..Default::default()
    };

    let config = BenchConfig::load(dir.path(), Some(&overrides)).unwrap();
    // Override beats project file.
    assert_eq!(config.bootstrap.effective_nr_bootstraps(), 50);
    // Env beats project file.
    assert_eq!(config.bootstrap.effective_workers(), 8);
    // Project file beats defaults.
    assert!(config.bootstrap.effective_standardize());
    assert_eq!(
        config.output.effective_results_dir(),
        std::path::PathBuf::from("out")
    );

    clear_env_vars();
}

#[test]
fn test_overwrite_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("causalbench.toml"), "[output]\noverwrite = true\n").unwrap();
    std::env::set_var("CAUSALBENCH_OUTPUT_OVERWRITE", "true");

    let overrides = ConfigOverrides {
        overwrite: Some(false),
        ..Default::default()
    };
    let config = BenchConfig::load(dir.path(), Some(&overrides)).unwrap();
    // Override beats both env and project file.
    assert!(!config.output.effective_overwrite());

    let config = BenchConfig::load(dir.path(), None).unwrap();
    assert!(config.output.effective_overwrite());

    clear_env_vars();
}

#[test]
fn test_defaults_without_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = BenchConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.bootstrap.effective_nr_bootstraps(), 100);
    assert_eq!(config.bootstrap.effective_workers(), 0);
    assert!(!config.bootstrap.effective_standardize());
    assert!(config.output.effective_overwrite());
}

#[test]
fn test_invalid_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("CAUSALBENCH_BOOTSTRAP_WORKERS", "many");
    let dir = tempfile::TempDir::new().unwrap();
    let config = BenchConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.bootstrap.workers, None);

    clear_env_vars();
}

#[test]
fn test_malformed_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("causalbench.toml"), "[bootstrap\nworkers = ").unwrap();
    let err = BenchConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_replicates_rejected() {
    let err = BenchConfig::from_toml("[bootstrap]\nnr_bootstraps = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "bootstrap.nr_bootstraps"));
}

#[test]
fn test_toml_round_trip() {
    let config = BenchConfig::from_toml("[bootstrap]\nworkers = 3\n[output]\noverwrite = false\n").unwrap();
    let back = BenchConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(config, back);
    assert!(!back.output.effective_overwrite());
}
