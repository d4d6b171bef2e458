//! Integration tests for configuration loading
//!
//! Tests the end-to-end path from a config file to a working estimation
//! service.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use workload_core::{EstimationService, JobDraft};
use workload_domain::{JobType, WorkloadError};
use workload_infra::{bootstrap, config, FileRateSource};

fn write_config(contents: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_toml_rates_drive_estimates() {
    let path = write_config(
        r#"
[estimator.matching]
trim = true
case_insensitive = true

[[estimator.job_types]]
job_type = "DX"
default_unit = "week"
flat_hours = 220.0

[[estimator.rates]]
job_type = "Dev"
task = "Backend"
hours = 5.0
unit = "week"

[[estimator.rates]]
job_type = "Non Dev"
task = "GA"
hours = 0.5

[[estimator.aliases]]
alias = "Server"
task = "Backend"
"#,
        "toml",
    );

    let service = EstimationService::from_source(&FileRateSource::new(&path))
        .expect("rate table should load");

    assert_eq!(service.estimate(Some(JobType::Dev), "Backend", Some(2.0)), 10.0);
    assert_eq!(service.estimate(Some(JobType::Dev), " backend ", Some(2.0)), 10.0);
    assert_eq!(service.estimate(Some(JobType::Dev), "server", Some(3.0)), 15.0);
    assert_eq!(service.estimate(Some(JobType::NonDev), "GA", Some(0.0)), 0.5);
    assert_eq!(service.estimate(Some(JobType::Dx), "Portal", Some(9.0)), 220.0);
    // Rates from the file replace the built-in list
    assert_eq!(service.estimate(Some(JobType::Dev), "HDMI", Some(1.0)), 0.0);

    assert_eq!(service.suggest_unit(Some(JobType::Dx), "Portal"), "week");
    assert_eq!(service.suggest_unit(Some(JobType::NonDev), "GA"), "time");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_json_logging_only_keeps_built_in_rates() {
    let path = write_config(r#"{ "logging": { "level": "debug", "json": true } }"#, "json");

    let loaded = config::load_from_file(Some(path.clone())).expect("config should load");
    assert_eq!(loaded.logging.level, "debug");
    assert!(loaded.logging.json);

    let runtime = bootstrap::from_config(loaded).expect("runtime should build");
    assert_eq!(runtime.estimation.estimate(Some(JobType::Dev), "HDMI", Some(2.0)), 80.0);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_rates_rejected() {
    let path = write_config(
        r#"
[[estimator.rates]]
job_type = "Dev"
task = "Backend"
hours = -3.0
"#,
        "toml",
    );

    let result = EstimationService::from_source(&FileRateSource::new(&path));
    assert!(matches!(result, Err(WorkloadError::Config(_))));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_unsupported_extension_rejected() {
    let path = write_config("estimator: {}", "yaml");

    let result = config::load_from_file(Some(path.clone()));
    assert!(matches!(result, Err(WorkloadError::Config(msg)) if msg.contains("yaml")));

    std::fs::remove_file(path).ok();
}

// ============================================================================
// Draft Integration Tests
// ============================================================================

#[test]
fn test_draft_uses_configured_rates() {
    let path = write_config(
        r#"
[[estimator.rates]]
job_type = "Dev"
task = "Firmware"
hours = 12.5
unit = "board"
"#,
        "toml",
    );
    let service = EstimationService::from_source(&FileRateSource::new(&path))
        .expect("rate table should load");

    let mut draft = JobDraft::new(service);
    draft.apply_form("user_name", "Dana").unwrap();
    draft.apply_form("task_name", "Firmware").unwrap();
    draft.apply_form("quantity", "3").unwrap();

    assert_eq!(draft.unit(), "board");
    assert_eq!(draft.estimated_duration(), 37.5);
    assert_eq!(draft.task_options(), vec!["Firmware".to_string()]);

    std::fs::remove_file(path).ok();
}
