//! Workload summary - aggregations behind the dashboard charts
//!
//! User names are grouped case-insensitively (lower-cased, trimmed); a blank
//! name is grouped under `"unknown"`. Hour totals are rounded to one decimal
//! place after summing.

use std::collections::{BTreeMap, BTreeSet};

use workload_domain::constants::UNKNOWN_USER_LABEL;
use workload_domain::{
    round_hours, Job, JobType, LabeledHours, SummaryFilter, UserSummary, UserTypeSummary,
};

/// Read-only aggregations over a slice of jobs
#[derive(Debug, Clone, Copy)]
pub struct WorkloadSummary<'a> {
    jobs: &'a [Job],
}

#[derive(Default)]
struct Totals {
    hours: f64,
    quantity: u64,
    jobs: u64,
}

impl Totals {
    fn add(&mut self, job: &Job) {
        self.hours = add_hours(self.hours, job_hours(job));
        self.quantity += u64::from(job.quantity);
        self.jobs += 1;
    }
}

impl<'a> WorkloadSummary<'a> {
    /// Summarize the given jobs
    pub const fn new(jobs: &'a [Job]) -> Self {
        Self { jobs }
    }

    /// Number of jobs
    pub const fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Number of distinct users
    pub fn distinct_users(&self) -> usize {
        self.jobs.iter().map(|job| user_key(&job.user_name)).collect::<BTreeSet<_>>().len()
    }

    /// Sum of all estimates
    pub fn total_hours(&self) -> f64 {
        round_hours(self.jobs.iter().map(job_hours).fold(0.0, add_hours))
    }

    /// Hours per user, sorted by user
    pub fn hours_by_user(&self) -> Vec<LabeledHours> {
        let mut hours: BTreeMap<String, f64> = BTreeMap::new();
        for job in self.jobs {
            let total = hours.entry(user_key(&job.user_name)).or_default();
            *total = add_hours(*total, job_hours(job));
        }
        hours
            .into_iter()
            .map(|(label, hours)| LabeledHours { label, hours: round_hours(hours) })
            .collect()
    }

    /// Hours per job type, in job type order
    pub fn hours_by_type(&self) -> Vec<LabeledHours> {
        let mut hours: BTreeMap<JobType, f64> = BTreeMap::new();
        for job in self.jobs {
            let total = hours.entry(job.job_type).or_default();
            *total = add_hours(*total, job_hours(job));
        }
        hours
            .into_iter()
            .map(|(job_type, hours)| LabeledHours {
                label: job_type.to_string(),
                hours: round_hours(hours),
            })
            .collect()
    }

    /// Per-user totals, sorted by user
    pub fn by_user(&self) -> Vec<UserSummary> {
        let mut totals: BTreeMap<String, Totals> = BTreeMap::new();
        for job in self.jobs {
            totals.entry(user_key(&job.user_name)).or_default().add(job);
        }
        totals
            .into_iter()
            .map(|(user_name, t)| UserSummary {
                user_name,
                total_estimated_duration: round_hours(t.hours),
                total_quantity: t.quantity,
                total_jobs: t.jobs,
            })
            .collect()
    }

    /// Per (user, job type) totals after filtering, sorted by user then type
    pub fn by_user_and_type(&self, filter: &SummaryFilter) -> Vec<UserTypeSummary> {
        // A blank user filter means no filter
        let wanted_user =
            filter.user_name.as_deref().filter(|name| !name.trim().is_empty()).map(user_key);

        let mut totals: BTreeMap<(String, JobType), Totals> = BTreeMap::new();
        for job in self.jobs {
            if filter.job_type.is_some_and(|job_type| job_type != job.job_type) {
                continue;
            }
            let user = user_key(&job.user_name);
            if wanted_user.as_ref().is_some_and(|wanted| *wanted != user) {
                continue;
            }
            totals.entry((user, job.job_type)).or_default().add(job);
        }

        totals
            .into_iter()
            .map(|((user_name, job_type), t)| UserTypeSummary {
                user_name,
                job_type,
                total_jobs: t.jobs,
                total_quantity: t.quantity,
                total_estimated_duration: round_hours(t.hours),
            })
            .collect()
    }
}

fn user_key(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        UNKNOWN_USER_LABEL.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

fn add_hours(total: f64, hours: f64) -> f64 {
    (total + hours).clamp(f64::MIN, f64::MAX)
}

fn job_hours(job: &Job) -> f64 {
    if job.estimated_duration.is_finite() {
        job.estimated_duration
    } else {
        0.0
    }
}
