//! Round Robin.
//!
//! # Algorithm
//! 1. Stable-sort tasks by arrival into a pending list.
//! 2. Admit arrivals (`arrival <= current`) to the FIFO ready queue.
//! 3. Dispatch the head for `min(remaining, quantum)`.
//! 4. Admit arrivals again, then re-append the head if it has work left.
//! 5. With an empty queue, fast-forward to the next arrival.
//!
//! Arrivals at the exact end of a slice are queued ahead of the task that
//! was just preempted.

use std::collections::VecDeque;

use tracing::trace;

use crate::models::{CompletionLog, ExecutionInterval, SimulationResult, Task, Timeline};

/// Quantum used when none (or a non-positive one) is supplied.
pub const DEFAULT_TIME_QUANTUM: i64 = 2;

/// Simulates Round Robin. One interval per dispatch; slices are never merged.
///
/// A non-positive `time_quantum` is replaced by [`DEFAULT_TIME_QUANTUM`].
pub fn schedule_round_robin(tasks: &[Task], time_quantum: i64) -> SimulationResult {
    let quantum = if time_quantum > 0 {
        time_quantum
    } else {
        DEFAULT_TIME_QUANTUM
    };

    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by_key(|&i| tasks[i].arrival_time);

    // Per-call remaining work, indexed like `tasks`.
    let mut remaining: Vec<i64> = tasks.iter().map(|t| t.burst_time).collect();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut next_pending = 0;
    let mut timeline = Timeline::new();
    let mut log = CompletionLog::new();
    let mut current_time = 0;

    let admit = |queue: &mut VecDeque<usize>, next_pending: &mut usize, now: i64| {
        while *next_pending < order.len() && tasks[order[*next_pending]].arrival_time <= now {
            queue.push_back(order[*next_pending]);
            *next_pending += 1;
        }
    };

    while next_pending < order.len() || !queue.is_empty() {
        admit(&mut queue, &mut next_pending, current_time);

        let Some(idx) = queue.pop_front() else {
            let idx = order[next_pending];
            trace!(from = current_time, to = tasks[idx].arrival_time, "cpu idle");
            current_time = tasks[idx].arrival_time;
            queue.push_back(idx);
            next_pending += 1;
            continue;
        };

        let task = &tasks[idx];
        let slice = remaining[idx].min(quantum);
        let start = current_time;
        let end = start + slice;
        trace!(task = %task.id, start, end, "dispatch");

        timeline.push(ExecutionInterval::new(&task.id, start, end));
        remaining[idx] -= slice;
        current_time = end;

        admit(&mut queue, &mut next_pending, current_time);

        if remaining[idx] > 0 {
            queue.push_back(idx);
        } else {
            trace!(task = %task.id, at = end, "complete");
            log.record(task, end);
        }
    }

    log.finish(timeline, tasks.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, arrival: i64, burst: i64) -> Task {
        Task::new(id).with_arrival(arrival).with_burst(burst)
    }

    #[test]
    fn test_rr_interleaves() {
        let tasks = vec![task("P1", 0, 4), task("P2", 0, 3)];
        let result = schedule_round_robin(&tasks, 2);
        assert_eq!(
            result.timeline.as_slice(),
            &[
                ExecutionInterval::new("P1", 0, 2),
                ExecutionInterval::new("P2", 2, 4),
                ExecutionInterval::new("P1", 4, 6),
                ExecutionInterval::new("P2", 6, 7),
            ]
        );
        assert!((result.waiting_time["P1"] - 2.0).abs() < 1e-10);
        // turnaround 7 - burst 3
        assert!((result.waiting_time["P2"] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_rr_slices_are_not_merged() {
        let tasks = vec![task("solo", 0, 5)];
        let result = schedule_round_robin(&tasks, 2);
        assert_eq!(result.timeline.len(), 3);
        assert_eq!(
            result.timeline.as_slice()[2],
            ExecutionInterval::new("solo", 4, 5)
        );
        assert!((result.completion_time["solo"] - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_rr_boundary_arrival_queued_before_preempted_task() {
        // P2 arrives exactly when P1's first slice ends.
        let tasks = vec![task("P1", 0, 4), task("P2", 2, 2)];
        let result = schedule_round_robin(&tasks, 2);
        let order: Vec<&str> = result.timeline.iter().map(|i| i.task_id.as_str()).collect();
        assert_eq!(order, vec!["P1", "P2", "P1"]);
    }

    #[test]
    fn test_rr_fast_forwards_when_idle() {
        let tasks = vec![task("P1", 0, 1), task("P2", 6, 3)];
        let result = schedule_round_robin(&tasks, 2);
        assert_eq!(
            result.timeline.as_slice(),
            &[
                ExecutionInterval::new("P1", 0, 1),
                ExecutionInterval::new("P2", 6, 8),
                ExecutionInterval::new("P2", 8, 9),
            ]
        );
        assert!((result.waiting_time["P2"] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_rr_non_positive_quantum_uses_default() {
        let tasks = vec![task("P1", 0, 4), task("P2", 0, 3)];
        assert_eq!(
            schedule_round_robin(&tasks, 0),
            schedule_round_robin(&tasks, DEFAULT_TIME_QUANTUM)
        );
        assert_eq!(
            schedule_round_robin(&tasks, -3),
            schedule_round_robin(&tasks, DEFAULT_TIME_QUANTUM)
        );
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs_order() {
        let tasks = vec![task("P1", 0, 3), task("P2", 1, 2), task("P3", 2, 1)];
        let result = schedule_round_robin(&tasks, 100);
        let fcfs = crate::scheduler::schedule_fcfs(&tasks);
        assert_eq!(result.timeline, fcfs.timeline);
    }
}
