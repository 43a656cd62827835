//! Execution timeline (Gantt) model.
//!
//! A timeline is the ordered list of intervals during which a task held the
//! CPU. Gaps between intervals are idle time.

use serde::{Deserialize, Serialize};

/// One contiguous slice of CPU time given to a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionInterval {
    /// Task occupying the CPU.
    pub task_id: String,
    /// Start tick (inclusive).
    pub start_time: i64,
    /// End tick (exclusive).
    pub end_time: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(task_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            task_id: task_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Ordered, non-overlapping execution intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval without merging.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Appends `[start, end)` for `task_id`, or extends the last interval
    /// when it belongs to the same task and ends exactly at `start`.
    pub fn extend_or_push(&mut self, task_id: &str, start_time: i64, end_time: i64) {
        if let Some(last) = self.intervals.last_mut() {
            if last.task_id == task_id && last.end_time == start_time {
                last.end_time = end_time;
                return;
            }
        }
        self.intervals
            .push(ExecutionInterval::new(task_id, start_time, end_time));
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timeline has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterates intervals in start order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Intervals as a slice.
    pub fn as_slice(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Total CPU-busy time (sum of interval durations).
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(ExecutionInterval::duration).sum()
    }

    /// Latest end time, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end_time).max().unwrap_or(0)
    }

    /// Idle ticks between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Returns all intervals for a given task.
    pub fn intervals_for_task(&self, task_id: &str) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.task_id == task_id)
            .collect()
    }

    /// Whether every interval has positive length and intervals are sorted
    /// by start time without overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|i| i.end_time > i.start_time)
            && self
                .intervals
                .windows(2)
                .all(|w| w[0].end_time <= w[1].start_time)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl From<Vec<ExecutionInterval>> for Timeline {
    fn from(intervals: Vec<ExecutionInterval>) -> Self {
        Self { intervals }
    }
}
