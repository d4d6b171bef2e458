//! Job draft: the state behind the add/edit job form
//!
//! Every edit to the job type, task name or quantity re-runs the estimator,
//! so `estimated_duration` always reflects the current inputs. The value is
//! advisory; the backend recomputes it on save.

use tracing::trace;
use workload_domain::constants::{DATE_FORMAT, MIN_QUANTITY, PLACEHOLDER_UNIT};
use workload_domain::{
    Job, JobStatus, JobType, Result, ValidationError, ValidationResult, Validator, WorkloadError,
};

use crate::estimation::EstimationService;

/// One edited form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    UserName(String),
    JobType(Option<JobType>),
    TaskName(String),
    Description(String),
    /// `None` when the input is empty or not a number
    Quantity(Option<f64>),
    Unit(String),
    StartDate(String),
    DueDate(String),
    Status(JobStatus),
}

impl FieldChange {
    /// Build a change from a form field name and its raw value
    ///
    /// # Errors
    /// Returns `WorkloadError::InvalidInput` for unknown or read-only fields
    /// and for an unrecognized status.
    pub fn from_form(name: &str, value: &str) -> Result<Self> {
        let change = match name {
            "user_name" => Self::UserName(value.to_string()),
            "job_type" => Self::JobType(JobType::parse_optional(value)),
            "task_name" => Self::TaskName(value.to_string()),
            "description" => Self::Description(value.to_string()),
            "quantity" => Self::Quantity(value.trim().parse::<f64>().ok()),
            "unit" => Self::Unit(value.to_string()),
            "start_date" => Self::StartDate(value.to_string()),
            "due_date" => Self::DueDate(value.to_string()),
            "status" => Self::Status(value.parse()?),
            "estimated_duration" => {
                return Err(WorkloadError::InvalidInput(
                    "estimated_duration is calculated automatically".to_string(),
                ))
            }
            other => {
                return Err(WorkloadError::InvalidInput(format!("Unknown job field: {other}")))
            }
        };
        Ok(change)
    }
}

/// Editable job state with a live duration estimate
#[derive(Debug, Clone)]
pub struct JobDraft {
    service: EstimationService,
    id: Option<i64>,
    user_name: String,
    job_type: Option<JobType>,
    task_name: String,
    description: String,
    quantity: Option<f64>,
    unit: String,
    start_date: String,
    due_date: String,
    status: JobStatus,
    estimated_duration: f64,
}

impl JobDraft {
    /// Blank form: `Dev`, quantity `0`, status `Open`
    pub fn new(service: EstimationService) -> Self {
        let mut draft = Self {
            service,
            id: None,
            user_name: String::new(),
            job_type: Some(JobType::Dev),
            task_name: String::new(),
            description: String::new(),
            quantity: Some(0.0),
            unit: String::new(),
            start_date: String::new(),
            due_date: String::new(),
            status: JobStatus::Open,
            estimated_duration: 0.0,
        };
        draft.recompute_estimate();
        draft
    }

    /// Load an existing job for editing
    ///
    /// Keeps the backend's `estimated_duration` until an input changes.
    pub fn from_job(service: EstimationService, job: &Job) -> Self {
        let format_date = |date: Option<chrono::NaiveDate>| {
            date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
        };

        Self {
            service,
            id: job.id,
            user_name: job.user_name.clone(),
            job_type: Some(job.job_type),
            task_name: job.task_name.clone(),
            description: job.description.clone().unwrap_or_default(),
            quantity: Some(f64::from(job.quantity)),
            unit: job.unit.clone().unwrap_or_default(),
            start_date: format_date(job.start_date),
            due_date: format_date(job.due_date),
            status: job.status,
            estimated_duration: job.estimated_duration,
        }
    }

    /// Apply one field edit
    pub fn apply(&mut self, change: FieldChange) {
        let mut reestimate = false;
        let mut resuggest = false;

        match change {
            FieldChange::UserName(value) => self.user_name = value,
            FieldChange::JobType(value) => {
                self.job_type = value;
                reestimate = true;
                resuggest = true;
            }
            FieldChange::TaskName(value) => {
                self.task_name = value;
                reestimate = true;
                resuggest = true;
            }
            FieldChange::Description(value) => self.description = value,
            FieldChange::Quantity(value) => {
                self.quantity = value;
                reestimate = true;
            }
            FieldChange::Unit(value) => self.unit = value,
            FieldChange::StartDate(value) => self.start_date = value,
            FieldChange::DueDate(value) => self.due_date = value,
            FieldChange::Status(value) => self.status = value,
        }

        if resuggest && self.unit_is_replaceable() {
            self.unit = self.service.suggest_unit(self.job_type, &self.task_name);
        }
        if reestimate {
            self.recompute_estimate();
        }
    }

    /// Apply a raw form edit (`name`, `value`)
    ///
    /// # Errors
    /// See [`FieldChange::from_form`].
    pub fn apply_form(&mut self, name: &str, value: &str) -> Result<()> {
        self.apply(FieldChange::from_form(name, value)?);
        Ok(())
    }

    /// Check the draft without consuming it
    ///
    /// # Errors
    /// Returns every failing field at once.
    pub fn validate(&self) -> ValidationResult<()> {
        self.checked().map(|_| ())
    }

    /// Validate and build the payload submitted to the backend
    ///
    /// # Errors
    /// Returns `WorkloadError::Validation` listing the failing fields.
    pub fn to_job(&self) -> Result<Job> {
        let checked = self.checked()?;

        Ok(Job {
            id: self.id,
            user_name: self.user_name.trim().to_string(),
            job_type: checked.job_type,
            task_name: self.task_name.trim().to_string(),
            description: non_blank(&self.description),
            quantity: checked.quantity,
            estimated_duration: self.estimated_duration,
            unit: non_blank(&self.unit),
            start_date: checked.start_date,
            due_date: checked.due_date,
            status: self.status,
        })
    }

    /// Back to a blank form
    pub fn reset(&mut self) {
        *self = Self::new(self.service.clone());
    }

    /// Whether the draft edits an existing job
    pub const fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Backend id when editing a saved job
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// User name as typed
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Selected job type; `None` when cleared
    pub const fn job_type(&self) -> Option<JobType> {
        self.job_type
    }

    /// Task name as typed or selected
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Free-text description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parsed quantity; `None` when the input is not a number
    pub const fn quantity(&self) -> Option<f64> {
        self.quantity
    }

    /// Unit the quantity is counted in
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Raw start date input (`YYYY-MM-DD` or empty)
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Raw due date input (`YYYY-MM-DD` or empty)
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Completion status
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Current advisory estimate in hours
    pub const fn estimated_duration(&self) -> f64 {
        self.estimated_duration
    }

    /// Task names for the select list; empty means free text
    pub fn task_options(&self) -> Vec<String> {
        self.job_type.map(|job_type| self.service.task_options(job_type)).unwrap_or_default()
    }

    fn unit_is_replaceable(&self) -> bool {
        self.unit.is_empty() || self.unit == PLACEHOLDER_UNIT
    }

    fn recompute_estimate(&mut self) {
        self.estimated_duration =
            self.service.estimate(self.job_type, &self.task_name, self.quantity);
        trace!(
            job_type = ?self.job_type,
            task = %self.task_name,
            quantity = ?self.quantity,
            hours = self.estimated_duration,
            "draft estimate recalculated"
        );
    }

    fn checked(&self) -> ValidationResult<CheckedFields> {
        let mut validator = Validator::new();

        validator.require_not_blank("user_name", &self.user_name, "User name is required");
        validator.require_not_blank("task_name", &self.task_name, "Task name is required");
        if self.job_type.is_none() {
            validator.add_error("job_type", "Job type is required");
        }

        let quantity = match self.quantity {
            Some(q) if is_whole_quantity(q) => Some(q as u32),
            _ => {
                validator.add_error("quantity", "Quantity must be a whole number of at least 1");
                None
            }
        };

        let start_date = validator.optional_date("start_date", &self.start_date);
        let due_date = validator.optional_date("due_date", &self.due_date);
        if let (Some(start), Some(due)) = (start_date, due_date) {
            if due < start {
                validator.add_error("due_date", "Due date must be on or after the start date");
            }
        }

        validator.finalize()?;

        match (self.job_type, quantity) {
            (Some(job_type), Some(quantity)) => {
                Ok(CheckedFields { job_type, quantity, start_date, due_date })
            }
            // finalize() already failed when either is missing
            _ => Err(ValidationError::field("_internal", "incomplete draft")),
        }
    }
}

struct CheckedFields {
    job_type: JobType,
    quantity: u32,
    start_date: Option<chrono::NaiveDate>,
    due_date: Option<chrono::NaiveDate>,
}

fn is_whole_quantity(q: f64) -> bool {
    q.is_finite() && q >= MIN_QUANTITY && q.fract() == 0.0 && q <= f64::from(u32::MAX)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
