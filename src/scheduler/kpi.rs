//! Simulation quality metrics (KPIs).
//!
//! Summarises a [`SimulationResult`] beyond the per-task maps.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Completion | Mean completion time |
//! | Max / Min Waiting | Extremes of the waiting map |
//! | Busy / Idle | CPU time spent executing / idle before makespan |
//! | CPU Utilization | busy / makespan |
//! | Throughput | completed tasks / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::SimulationResult;

/// Simulation performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: f64,
    /// Mean completion time over completed tasks.
    pub avg_completion_time: f64,
    /// Largest waiting time of any task.
    pub max_waiting_time: f64,
    /// Smallest waiting time of any task.
    pub min_waiting_time: f64,
    /// Ticks the CPU spent executing.
    pub busy_time: i64,
    /// Ticks the CPU sat idle between t=0 and the last interval.
    pub idle_time: i64,
    /// Fraction of the makespan spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed tasks per tick.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished simulation.
    ///
    /// An empty result yields all zeros.
    pub fn calculate(result: &SimulationResult) -> Self {
        let completed = result.completion_time.len();
        let makespan = result
            .completion_time
            .values()
            .copied()
            .fold(0.0_f64, f64::max);

        let avg_completion_time = if completed == 0 {
            0.0
        } else {
            result.completion_time.values().sum::<f64>() / completed as f64
        };

        let (min_waiting_time, max_waiting_time) = if result.waiting_time.is_empty() {
            (0.0, 0.0)
        } else {
            result
                .waiting_time
                .values()
                .fold((f64::MAX, f64::MIN), |(lo, hi), &w| (lo.min(w), hi.max(w)))
        };

        let busy_time = result.timeline.busy_time();
        let idle_time = result.timeline.idle_time();

        let (cpu_utilization, throughput) = if makespan <= 0.0 {
            (0.0, 0.0)
        } else {
            (busy_time as f64 / makespan, completed as f64 / makespan)
        };

        Self {
            makespan,
            avg_completion_time,
            max_waiting_time,
            min_waiting_time,
            busy_time,
            idle_time,
            cpu_utilization,
            throughput,
        }
    }
}
