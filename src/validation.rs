//! Input validation for simulation task sets.
//!
//! The policy functions assume well-formed tasks. This module is the
//! boundary that guarantees it, either by rejecting bad input or by
//! clamping it into range. Detects:
//! - Empty and duplicate IDs
//! - Negative arrival times
//! - Zero or negative burst times (would stall tick-driven policies)
//! - Negative priorities
//! - Task sets whose time horizon does not fit in `i64`

use crate::models::Task;
use std::collections::HashSet;
use std::fmt;

use tracing::warn;

/// Upper bound [`clamp_task`] applies to arrival and burst times.
pub const MAX_TIME: i64 = 1 << 40;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has an empty ID.
    EmptyId,
    /// Arrival time below zero.
    NegativeArrival,
    /// Burst time of zero or less.
    NonPositiveBurst,
    /// Priority below zero.
    NegativePriority,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationErrorKind {
    /// Whether [`clamp_task`] can repair this kind of error.
    pub fn is_clampable(&self) -> bool {
        matches!(
            self,
            ValidationErrorKind::NegativeArrival
                | ValidationErrorKind::NonPositiveBurst
                | ValidationErrorKind::NegativePriority
        )
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a task set.
///
/// Checks:
/// 1. No empty task IDs
/// 2. No duplicate task IDs
/// 3. Arrival ≥ 0
/// 4. Burst ≥ 1
/// 5. Priority ≥ 0 (when present)
/// 6. `max(arrival) + sum(burst)` fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = validate_identities(tasks);

    for task in tasks {
        if task.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Task '{}' has negative arrival time {}",
                    task.id, task.arrival_time
                ),
            ));
        }
        if task.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Task '{}' has non-positive burst time {}",
                    task.id, task.burst_time
                ),
            ));
        }
        if let Some(priority) = task.priority.filter(|&p| p < 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Task '{}' has negative priority {}", task.id, priority),
            ));
        }
    }

    if time_horizon(tasks).is_none() {
        errors.push(horizon_error());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks only the ID rules (empty, duplicate), which clamping cannot fix.
pub fn validate_identities(tasks: &[Task]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for task in tasks {
        if task.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Task with empty ID",
            ));
        } else if !seen.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
    }

    errors
}

/// Latest tick any policy can reach: `max(arrival) + sum(burst)`.
///
/// Every simulated time value is bounded by this. `None` on `i64` overflow.
/// Negative fields count as 0.
pub fn time_horizon(tasks: &[Task]) -> Option<i64> {
    let latest_arrival = tasks
        .iter()
        .map(|t| t.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    tasks
        .iter()
        .try_fold(latest_arrival, |acc, t| acc.checked_add(t.burst_time.max(0)))
}

pub(crate) fn horizon_error() -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::TimeOverflow,
        "Latest arrival plus total burst time overflows i64",
    )
}

/// Returns a copy of `task` with arrival in `0..=MAX_TIME`, burst in
/// `1..=MAX_TIME` and priority ≥ 0.
pub fn clamp_task(task: &Task) -> Task {
    let mut clamped = task.clone();
    clamped.arrival_time = task.arrival_time.clamp(0, MAX_TIME);
    clamped.burst_time = task.burst_time.clamp(1, MAX_TIME);
    clamped.priority = task.priority.map(|p| p.max(0));

    if clamped != *task {
        warn!(
            task = %task.id,
            arrival = task.arrival_time,
            burst = task.burst_time,
            priority = ?task.priority,
            "clamped out-of-range task parameters"
        );
    }
    clamped
}

/// Clamps every task in the slice; see [`clamp_task`].
pub fn normalize_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().map(clamp_task).collect()
}
