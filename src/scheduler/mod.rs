//! CPU scheduling policies and the dispatcher.
//!
//! Six policies, each a pure function from a task slice to a
//! [`SimulationResult`]:
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | arrival order |
//! | SJF | no | shortest burst |
//! | Priority | no | highest priority |
//! | Round Robin | yes (quantum) | FIFO queue |
//! | SRTF | yes (every tick) | shortest remaining |
//! | Preemptive Priority | yes (every tick) | highest priority |
//!
//! The policy functions assume well-formed tasks (burst ≥ 1, arrival ≥ 0).
//! [`run_scheduler`] clamps its input first; [`crate::request::SimulationRequest`]
//! can reject it instead.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod algorithm;
mod fcfs;
mod kpi;
mod non_preemptive;
mod preemptive;
mod round_robin;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use fcfs::schedule_fcfs;
pub use kpi::SimulationKpi;
pub use non_preemptive::{schedule_priority, schedule_sjf};
pub use preemptive::{schedule_preemptive_priority, schedule_srtf};
pub use round_robin::{schedule_round_robin, DEFAULT_TIME_QUANTUM};

use tracing::{debug, warn};

use crate::models::{SimulationResult, Task};
use crate::validation::{normalize_tasks, time_horizon};

/// Resolves an optional quantum: unset or non-positive → [`DEFAULT_TIME_QUANTUM`].
pub fn effective_time_quantum(time_quantum: Option<i64>) -> i64 {
    match time_quantum {
        Some(q) if q > 0 => q,
        _ => DEFAULT_TIME_QUANTUM,
    }
}

/// Runs one simulation.
///
/// Tasks are clamped to valid ranges before simulation. `time_quantum` is
/// only read by Round Robin. An empty task list, or one whose clamped time
/// horizon still overflows `i64`, returns [`SimulationResult::empty`].
///
/// # Example
///
/// ```
/// use u_cpusched::models::Task;
/// use u_cpusched::scheduler::{run_scheduler, Algorithm};
///
/// let tasks = vec![
///     Task::new("P1").with_burst(5),
///     Task::new("P2").with_arrival(1).with_burst(3),
/// ];
/// let result = run_scheduler(Algorithm::Fcfs, &tasks, None);
/// assert_eq!(result.timeline.len(), 2);
/// assert_eq!(result.waiting_time["P2"], 4.0);
/// ```
pub fn run_scheduler(
    algorithm: Algorithm,
    tasks: &[Task],
    time_quantum: Option<i64>,
) -> SimulationResult {
    if tasks.is_empty() {
        debug!(%algorithm, "no tasks to simulate");
        return SimulationResult::empty();
    }
    let tasks = normalize_tasks(tasks);
    if time_horizon(&tasks).is_none() {
        warn!(%algorithm, tasks = tasks.len(), "time horizon overflows i64; not simulating");
        return SimulationResult::empty();
    }
    dispatch(algorithm, &tasks, effective_time_quantum(time_quantum))
}

/// Routes already-validated tasks to a policy.
pub(crate) fn dispatch(algorithm: Algorithm, tasks: &[Task], quantum: i64) -> SimulationResult {
    debug!(%algorithm, tasks = tasks.len(), quantum, "simulation start");

    let result = match algorithm {
        Algorithm::Fcfs => schedule_fcfs(tasks),
        Algorithm::Sjf => schedule_sjf(tasks),
        Algorithm::Priority => schedule_priority(tasks),
        Algorithm::RoundRobin => schedule_round_robin(tasks, quantum),
        Algorithm::Srtf => schedule_srtf(tasks),
        Algorithm::PreemptivePriority => schedule_preemptive_priority(tasks),
    };

    debug!(
        %algorithm,
        intervals = result.timeline.len(),
        avg_waiting = result.avg_waiting_time,
        avg_turnaround = result.avg_turnaround_time,
        "simulation done"
    );
    result
}

/// Runs every policy on the same task snapshot.
///
/// Results come back in [`Algorithm::ALL`] order.
pub fn compare_algorithms(
    tasks: &[Task],
    time_quantum: Option<i64>,
) -> Vec<(Algorithm, SimulationResult)> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| (algorithm, run_scheduler(algorithm, tasks, time_quantum)))
        .collect()
}
