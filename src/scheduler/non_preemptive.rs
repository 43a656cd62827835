//! Non-preemptive decision-loop policies: SJF and Priority.
//!
//! # Algorithm
//! 1. Among unscheduled tasks with `arrival <= current`, pick the best by
//!    the policy's rule (ties → lowest input index).
//! 2. If none has arrived, jump to the earliest pending arrival.
//! 3. Run the pick to completion; repeat.
//!
//! # Complexity
//! O(n²)

use tracing::trace;

use crate::models::{CompletionLog, ExecutionInterval, SimulationResult, Task, Timeline};
use crate::selection::{rules, select_best, Candidate, SelectionRule};

/// Simulates non-preemptive Shortest Job First.
pub fn schedule_sjf(tasks: &[Task]) -> SimulationResult {
    run_to_completion(tasks, &rules::ShortestBurst)
}

/// Simulates non-preemptive Priority (higher value runs first).
pub fn schedule_priority(tasks: &[Task]) -> SimulationResult {
    run_to_completion(tasks, &rules::HighestPriority)
}

fn run_to_completion<R: SelectionRule>(tasks: &[Task], rule: &R) -> SimulationResult {
    let mut pending: Vec<usize> = (0..tasks.len()).collect();
    let mut timeline = Timeline::new();
    let mut log = CompletionLog::new();
    let mut current_time = 0;

    while !pending.is_empty() {
        let ready = pending
            .iter()
            .map(|&i| Candidate::fresh(i, &tasks[i]))
            .filter(|c| c.task.arrival_time <= current_time);

        let Some(chosen) = select_best(rule, ready) else {
            let next_arrival = pending
                .iter()
                .map(|&i| tasks[i].arrival_time)
                .min()
                .unwrap_or(current_time);
            trace!(from = current_time, to = next_arrival, "cpu idle");
            current_time = next_arrival;
            continue;
        };

        let task = chosen.task;
        let start = current_time;
        let end = start + task.burst_time;
        trace!(rule = rule.name(), task = %task.id, start, end, "dispatch");

        timeline.push(ExecutionInterval::new(&task.id, start, end));
        log.record(task, end);
        pending.retain(|&i| i != chosen.index);
        current_time = end;
    }

    log.finish(timeline, tasks.len())
}
