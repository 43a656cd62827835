//! Simulation result model and metric aggregation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Tick at which the task's last unit of work finished |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Task, Timeline};

/// Output of one simulation run.
///
/// Metric maps are keyed by task id. `BTreeMap` keeps iteration and
/// serialization order stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Execution intervals ordered by start time.
    pub timeline: Timeline,
    /// Waiting time per task.
    pub waiting_time: BTreeMap<String, f64>,
    /// Turnaround time per task.
    pub turnaround_time: BTreeMap<String, f64>,
    /// Completion time per task.
    pub completion_time: BTreeMap<String, f64>,
    /// Mean waiting time over all input tasks.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over all input tasks.
    pub avg_turnaround_time: f64,
}

impl SimulationResult {
    /// Degenerate result for an empty task set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of tasks that reached completion.
    pub fn completed_count(&self) -> usize {
        self.completion_time.len()
    }

    /// Whether every task in `tasks` has a completion entry.
    pub fn is_complete_for(&self, tasks: &[Task]) -> bool {
        tasks
            .iter()
            .all(|t| self.completion_time.contains_key(&t.id))
    }
}

/// Records task completions during a simulation and folds them into a
/// [`SimulationResult`].
#[derive(Debug, Clone, Default)]
pub struct CompletionLog {
    waiting_time: BTreeMap<String, f64>,
    turnaround_time: BTreeMap<String, f64>,
    completion_time: BTreeMap<String, f64>,
}

impl CompletionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `task` finished at `completion`.
    pub fn record(&mut self, task: &Task, completion: i64) {
        let turnaround = completion - task.arrival_time;
        let waiting = turnaround - task.burst_time;
        self.completion_time
            .insert(task.id.clone(), completion as f64);
        self.turnaround_time
            .insert(task.id.clone(), turnaround as f64);
        self.waiting_time.insert(task.id.clone(), waiting as f64);
    }

    /// Number of recorded completions.
    pub fn len(&self) -> usize {
        self.completion_time.len()
    }

    /// Whether nothing has completed yet.
    pub fn is_empty(&self) -> bool {
        self.completion_time.is_empty()
    }

    /// Builds the result. Averages divide by `task_count`, the size of the
    /// input set, and are 0 when it is empty.
    pub fn finish(self, timeline: Timeline, task_count: usize) -> SimulationResult {
        let mean = |m: &BTreeMap<String, f64>| {
            if task_count == 0 {
                0.0
            } else {
                m.values().sum::<f64>() / task_count as f64
            }
        };
        let avg_waiting_time = mean(&self.waiting_time);
        let avg_turnaround_time = mean(&self.turnaround_time);

        SimulationResult {
            timeline,
            waiting_time: self.waiting_time,
            turnaround_time: self.turnaround_time,
            completion_time: self.completion_time,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;

    #[test]
    fn test_record_derives_metrics() {
        let task = Task::new("P2").with_arrival(1).with_burst(3);
        let mut log = CompletionLog::new();
        log.record(&task, 8);

        let result = log.finish(Timeline::new(), 1);
        assert!((result.completion_time["P2"] - 8.0).abs() < 1e-10);
        assert!((result.turnaround_time["P2"] - 7.0).abs() < 1e-10);
        assert!((result.waiting_time["P2"] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_averages_over_input_count() {
        let a = Task::new("A").with_burst(2);
        let b = Task::new("B").with_burst(2);
        let mut log = CompletionLog::new();
        log.record(&a, 2);
        log.record(&b, 4);
        assert_eq!(log.len(), 2);

        let timeline = Timeline::from(vec![
            ExecutionInterval::new("A", 0, 2),
            ExecutionInterval::new("B", 2, 4),
        ]);
        let result = log.finish(timeline, 2);
        // waiting: A=0, B=2 → 1.0; turnaround: A=2, B=4 → 3.0
        assert!((result.avg_waiting_time - 1.0).abs() < 1e-10);
        assert!((result.avg_turnaround_time - 3.0).abs() < 1e-10);
        assert_eq!(result.completed_count(), 2);
        assert!(result.is_complete_for(&[a, b]));
    }

    #[test]
    fn test_empty_log() {
        let log = CompletionLog::new();
        assert!(log.is_empty());
        let result = log.finish(Timeline::new(), 0);
        assert_eq!(result, SimulationResult::empty());
        assert_eq!(result.avg_waiting_time, 0.0);
    }

    #[test]
    fn test_result_json_field_names() {
        let mut log = CompletionLog::new();
        log.record(&Task::new("P1"), 1);
        let result = log.finish(
            Timeline::from(vec![ExecutionInterval::new("P1", 0, 1)]),
            1,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("waitingTime").is_some());
        assert!(json.get("avgTurnaroundTime").is_some());
        assert_eq!(json["timeline"][0]["taskId"], "P1");
    }
}
