//! First-Come-First-Served.
//!
//! # Algorithm
//! 1. Stable-sort tasks by arrival (input order breaks ties).
//! 2. Run each to completion at `max(current, arrival)`.
//!
//! # Complexity
//! O(n log n)

use tracing::trace;

use crate::models::{CompletionLog, ExecutionInterval, SimulationResult, Task, Timeline};

/// Simulates FCFS. Each task produces exactly one interval.
pub fn schedule_fcfs(tasks: &[Task]) -> SimulationResult {
    let mut order: Vec<&Task> = tasks.iter().collect();
    order.sort_by_key(|t| t.arrival_time);

    let mut timeline = Timeline::new();
    let mut log = CompletionLog::new();
    let mut current_time = 0;

    for task in order {
        let start = current_time.max(task.arrival_time);
        if start > current_time {
            trace!(from = current_time, to = start, "cpu idle");
        }
        let end = start + task.burst_time;
        trace!(task = %task.id, start, end, "dispatch");

        timeline.push(ExecutionInterval::new(&task.id, start, end));
        log.record(task, end);
        current_time = end;
    }

    log.finish(timeline, tasks.len())
}
