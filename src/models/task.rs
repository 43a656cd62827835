//! Task (process) model.
//!
//! A task is a single CPU burst that becomes eligible at its arrival time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A task (process) to be scheduled on the simulated CPU.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// The engine never mutates a caller's tasks; simulations work on borrowed
/// slices and keep their own bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Tick at which the task becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required (ticks).
    pub burst_time: i64,
    /// Scheduling priority (higher = more important). `None` = 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Display bookkeeping; not read by any policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_burst_time: Option<i64>,
}

impl Task {
    /// Creates a task with arrival 0, burst 1 and priority 0.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            arrival_time: 0,
            burst_time: 1,
            priority: Some(0),
            original_burst_time: None,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Clears the priority (treated as 0).
    pub fn without_priority(mut self) -> Self {
        self.priority = None;
        self
    }

    /// Sets the original burst time bookkeeping field.
    pub fn with_original_burst(mut self, burst_time: i64) -> Self {
        self.original_burst_time = Some(burst_time);
        self
    }

    /// Priority with the absent case mapped to 0.
    #[inline]
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }

    /// Earliest possible completion: `arrival + burst`, saturating at `i64::MAX`.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time.saturating_add(self.burst_time)
    }
}
