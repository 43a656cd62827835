//! Tick-driven preemptive policies: SRTF and Preemptive Priority.
//!
//! # Algorithm
//! Every unit tick:
//! 1. Among arrived, unfinished tasks pick the best by the policy's rule,
//!    scanning in input order (ties → lowest input index).
//! 2. Run it for one tick and decrement its remaining work.
//! 3. Extend the previous interval if the same task ran the previous tick,
//!    otherwise open a new interval.
//!
//! With nothing ready, time jumps to the earliest arrival among unfinished
//! tasks.
//!
//! # Complexity
//! O(n · total_burst)

use tracing::trace;

use crate::models::{CompletionLog, SimulationResult, Task, Timeline};
use crate::selection::{rules, select_best, Candidate, SelectionRule};

/// Simulates Shortest Remaining Time First.
pub fn schedule_srtf(tasks: &[Task]) -> SimulationResult {
    run_tick_driven(tasks, &rules::ShortestRemaining)
}

/// Simulates Preemptive Priority (higher value runs first).
pub fn schedule_preemptive_priority(tasks: &[Task]) -> SimulationResult {
    run_tick_driven(tasks, &rules::HighestPriority)
}

fn run_tick_driven<R: SelectionRule>(tasks: &[Task], rule: &R) -> SimulationResult {
    // Per-call remaining work, indexed like `tasks`.
    let mut remaining: Vec<i64> = tasks.iter().map(|t| t.burst_time).collect();
    let mut unfinished = remaining.iter().filter(|&&r| r > 0).count();
    let mut timeline = Timeline::new();
    let mut log = CompletionLog::new();
    let mut current_time = 0;
    let mut running: Option<usize> = None;

    while unfinished > 0 {
        let ready = tasks
            .iter()
            .enumerate()
            .filter(|&(i, t)| t.arrival_time <= current_time && remaining[i] > 0)
            .map(|(i, t)| Candidate::new(i, t, remaining[i]));

        let Some(chosen) = select_best(rule, ready) else {
            let next_arrival = tasks
                .iter()
                .enumerate()
                .filter(|&(i, t)| t.arrival_time > current_time && remaining[i] > 0)
                .map(|(_, t)| t.arrival_time)
                .min()
                .unwrap_or(current_time + 1);
            trace!(from = current_time, to = next_arrival, "cpu idle");
            current_time = next_arrival;
            running = None;
            continue;
        };

        let idx = chosen.index;
        let task = chosen.task;
        if running != Some(idx) {
            if let Some(prev) = running.filter(|&p| remaining[p] > 0) {
                trace!(
                    rule = rule.name(),
                    at = current_time,
                    preempted = %tasks[prev].id,
                    by = %task.id,
                    "preempt"
                );
            }
            running = Some(idx);
        }

        let end = current_time + 1;
        timeline.extend_or_push(&task.id, current_time, end);
        remaining[idx] -= 1;
        current_time = end;

        if remaining[idx] == 0 {
            trace!(task = %task.id, at = end, "complete");
            log.record(task, end);
            unfinished -= 1;
        }
    }

    log.finish(timeline, tasks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    fn task(id: &str, arrival: i64, burst: i64) -> Task {
        Task::new(id).with_arrival(arrival).with_burst(burst)
    }

    #[test]
    fn test_srtf_preempts_at_arrival() {
        let tasks = vec![task("P1", 0, 8), task("P2", 1, 4)];
        let result = schedule_srtf(&tasks);
        assert_eq!(
            result.timeline.as_slice(),
            &[
                ExecutionInterval::new("P1", 0, 1),
                ExecutionInterval::new("P2", 1, 5),
                ExecutionInterval::new("P1", 5, 12),
            ]
        );
        assert!((result.completion_time["P2"] - 5.0).abs() < 1e-10);
        assert!((result.waiting_time["P1"] - 4.0).abs() < 1e-10);
        assert!((result.waiting_time["P2"] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_classic_workload() {
        let tasks = vec![
            task("P1", 0, 8),
            task("P2", 1, 4),
            task("P3", 2, 9),
            task("P4", 3, 5),
        ];
        let result = schedule_srtf(&tasks);
        let order: Vec<(&str, i64, i64)> = result
            .timeline
            .iter()
            .map(|i| (i.task_id.as_str(), i.start_time, i.end_time))
            .collect();
        assert_eq!(
            order,
            vec![("P1", 0, 1), ("P2", 1, 5), ("P4", 5, 10), ("P1", 10, 17), ("P3", 17, 26)]
        );
        // (9 + 0 + 15 + 2) / 4
        assert!((result.avg_waiting_time - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_no_preemption_on_equal_remaining() {
        // At t=2 P1 has 2 left and P2 has 2; P1 keeps the CPU (lower index).
        let tasks = vec![task("P1", 0, 4), task("P2", 2, 2)];
        let result = schedule_srtf(&tasks);
        assert_eq!(
            result.timeline.as_slice(),
            &[
                ExecutionInterval::new("P1", 0, 4),
                ExecutionInterval::new("P2", 4, 6),
            ]
        );
    }

    #[test]
    fn test_srtf_idle_jump_and_no_merge_across_gap() {
        let tasks = vec![task("P1", 0, 2), task("P1b", 5, 1)];
        let result = schedule_srtf(&tasks);
        assert_eq!(
            result.timeline.as_slice(),
            &[
                ExecutionInterval::new("P1", 0, 2),
                ExecutionInterval::new("P1b", 5, 6),
            ]
        );
    }

    #[test]
    fn test_srtf_same_task_across_idle_gap_not_merged() {
        // Only one task, arriving late: one interval starting at arrival.
        let tasks = vec![task("P1", 3, 3)];
        let result = schedule_srtf(&tasks);
        assert_eq!(
            result.timeline.as_slice(),
            &[ExecutionInterval::new("P1", 3, 6)]
        );
    }

    #[test]
    fn test_preemptive_priority_splits_interval() {
        let tasks = vec![
            task("P1", 0, 5).with_priority(1),
            task("P2", 2, 2).with_priority(3),
        ];
        let result = schedule_preemptive_priority(&tasks);
        assert_eq!(
            result.timeline.as_slice(),
            &[
                ExecutionInterval::new("P1", 0, 2),
                ExecutionInterval::new("P2", 2, 4),
                ExecutionInterval::new("P1", 4, 7),
            ]
        );
        assert!((result.completion_time["P1"] - 7.0).abs() < 1e-10);
        assert!((result.waiting_time["P1"] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_preemptive_priority_equal_priority_does_not_preempt() {
        let tasks = vec![
            task("P1", 0, 3).with_priority(2),
            task("P2", 1, 3).with_priority(2),
        ];
        let result = schedule_preemptive_priority(&tasks);
        assert_eq!(result.timeline.len(), 2);
        assert_eq!(
            result.timeline.as_slice()[0],
            ExecutionInterval::new("P1", 0, 3)
        );
    }

    #[test]
    fn test_preemptive_priority_absent_priority_is_lowest() {
        let tasks = vec![
            task("anon", 0, 3).without_priority(),
            task("vip", 1, 1).with_priority(1),
        ];
        let result = schedule_preemptive_priority(&tasks);
        let ids: Vec<&str> = result.timeline.iter().map(|i| i.task_id.as_str()).collect();
        assert_eq!(ids, vec!["anon", "vip", "anon"]);
    }
}
