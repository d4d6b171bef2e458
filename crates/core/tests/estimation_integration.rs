//! Integration tests for duration estimation
//!
//! Exercises the estimator over the whole built-in rate table, then walks the
//! job form and dashboard flows end to end.

use workload_core::{DurationEstimator, EstimationService, JobDraft, WorkloadSummary};
use workload_domain::{
    round_hours, EstimatorConfig, JobType, RateTable, SummaryFilter, TaskAliasEntry, TaskMatching,
};

fn built_in() -> (RateTable, DurationEstimator) {
    (RateTable::default(), DurationEstimator::default())
}

// ============================================================================
// Estimator Properties
// ============================================================================

/// Every configured key scales linearly with whole quantities
#[test]
fn test_every_key_scales_with_quantity() {
    let (table, estimator) = built_in();
    assert_eq!(table.len(), 24);

    for key in table.keys() {
        let base = table.rate(key.job_type, &key.task).map(|rate| rate.hours).unwrap_or_default();
        for quantity in 1..=12 {
            let q = f64::from(quantity);
            assert_eq!(
                estimator.estimate(Some(key.job_type), &key.task, Some(q)),
                round_hours(base * q),
                "{key} x {quantity}"
            );
        }
    }
}

/// Non-positive and non-finite quantities behave like one
#[test]
fn test_non_positive_quantity_behaves_like_one() {
    let (table, estimator) = built_in();

    for key in table.keys() {
        let once = estimator.estimate(Some(key.job_type), &key.task, Some(1.0));
        for quantity in [0.0, -1.0, -250.0, f64::NAN, f64::NEG_INFINITY] {
            assert_eq!(estimator.estimate(Some(key.job_type), &key.task, Some(quantity)), once);
        }
        assert_eq!(estimator.estimate(Some(key.job_type), &key.task, None), once);
    }
}

/// Names outside the table always estimate to zero
#[test]
fn test_unknown_names_estimate_zero() {
    let (_, estimator) = built_in();

    for job_type in JobType::ALL {
        for task in ["", "Unknown", "bom", "Backend ", "Portal"] {
            let hours = estimator.estimate(Some(job_type), task, Some(7.0));
            assert_eq!(hours, 0.0, "{job_type}/{task}");
        }
    }
    // Tasks are scoped by job type
    assert_eq!(estimator.estimate(Some(JobType::NonDev), "Backend", Some(1.0)), 0.0);
    assert_eq!(estimator.estimate(Some(JobType::Dev), "GA", Some(1.0)), 0.0);
}

/// Estimates never carry more than one decimal place
#[test]
fn test_estimates_have_one_decimal() {
    let (table, estimator) = built_in();

    for key in table.keys() {
        for quantity in [1.0, 1.5, 2.25, 3.7, 11.0] {
            let hours = estimator.estimate(Some(key.job_type), &key.task, Some(quantity));
            assert_eq!(round_hours(hours), hours);
        }
    }
}

#[test]
fn test_backend_reference_values() {
    let (_, estimator) = built_in();

    assert_eq!(
        estimator.estimate(Some(JobType::Dev), "High Grade Project Management", Some(1.0)),
        160.0
    );
    assert_eq!(estimator.estimate(Some(JobType::Dev), "Sending Sample", Some(4.0)), 12.0);
    assert_eq!(estimator.estimate(Some(JobType::NonDev), "GA", Some(3.0)), 1.5);
    assert_eq!(estimator.estimate(Some(JobType::NonDev), "GA", Some(0.0)), 0.5);
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_configured_matching_and_aliases() {
    let config = EstimatorConfig {
        matching: TaskMatching { trim: true, case_insensitive: true },
        aliases: vec![TaskAliasEntry {
            alias: "PM".to_string(),
            task: "D_VA Project Management".to_string(),
            job_type: Some(JobType::Dev),
        }],
        ..EstimatorConfig::default()
    };
    let service = EstimationService::from_table(RateTable::from_config(&config).unwrap());

    assert_eq!(service.estimate(Some(JobType::Dev), "  hdmi ", Some(2.0)), 80.0);
    assert_eq!(service.estimate(Some(JobType::Dev), "pm", Some(2.0)), 10.0);
    assert_eq!(service.suggest_unit(Some(JobType::Dev), "pm"), "project");
    assert_eq!(service.estimate(Some(JobType::NonDev), "PM", Some(2.0)), 0.0);
}

// ============================================================================
// Form And Dashboard Flow
// ============================================================================

/// Fill the form, submit, then aggregate the saved jobs
#[test]
fn test_form_to_dashboard_flow() {
    let service = EstimationService::default();
    let mut jobs = Vec::new();

    let entries = [
        ("Alice", "Dev", "Backend", "2"),
        ("alice", "Non Dev", "Education", "1"),
        ("Bob", "Dev", "EMI", "3"),
        ("Bob", "DX", "Portal rollout", "1"),
    ];

    for (user, job_type, task, quantity) in entries {
        let mut draft = JobDraft::new(service.clone());
        draft.apply_form("user_name", user).unwrap();
        draft.apply_form("job_type", job_type).unwrap();
        draft.apply_form("task_name", task).unwrap();
        draft.apply_form("quantity", quantity).unwrap();
        jobs.push(draft.to_job().unwrap());
    }

    assert_eq!(jobs[0].estimated_duration, 80.0);
    assert_eq!(jobs[0].unit.as_deref(), Some("week"));
    assert_eq!(jobs[2].estimated_duration, 12.0);
    assert_eq!(jobs[2].unit.as_deref(), Some("tv"));
    assert_eq!(jobs[3].estimated_duration, 0.0);
    assert_eq!(jobs[3].unit.as_deref(), Some("time"));

    let summary = WorkloadSummary::new(&jobs);
    assert_eq!(summary.job_count(), 4);
    assert_eq!(summary.distinct_users(), 2);
    assert_eq!(summary.total_hours(), 95.0);

    let by_user = summary.hours_by_user();
    assert_eq!(by_user[0].label, "alice");
    assert_eq!(by_user[0].hours, 83.0);
    assert_eq!(by_user[1].hours, 12.0);

    let dev_only = summary.by_user_and_type(&SummaryFilter::default().with_job_type(JobType::Dev));
    assert_eq!(dev_only.len(), 2);
    assert_eq!(dev_only[1].total_quantity, 3);
}

/// Editing a saved job keeps the saved estimate until an input changes
#[test]
fn test_edit_existing_job() {
    let service = EstimationService::default();
    let mut draft = JobDraft::new(service.clone());
    draft.apply_form("user_name", "Carol").unwrap();
    draft.apply_form("task_name", "BOM").unwrap();
    draft.apply_form("quantity", "2").unwrap();
    let mut job = draft.to_job().unwrap();
    job.id = Some(7);
    job.estimated_duration = 4.5;

    let mut edit = JobDraft::from_job(service, &job);
    assert!(edit.is_editing());
    assert_eq!(edit.estimated_duration(), 4.5);

    edit.apply_form("quantity", "5").unwrap();
    assert_eq!(edit.estimated_duration(), 10.0);
    assert_eq!(edit.to_job().unwrap().id, Some(7));
}
