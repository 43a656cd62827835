//! Simulation request: the configuration surface of one run.
//!
//! Bundles the task snapshot, the policy, the quantum and the boundary
//! policy for out-of-range input. Deserialisable so a front end can post a
//! request as JSON.

use serde::{Deserialize, Serialize};

use crate::models::{SimulationResult, Task};
use crate::scheduler::{dispatch, effective_time_quantum, Algorithm};
use crate::validation::{
    horizon_error, normalize_tasks, time_horizon, validate_identities, validate_tasks,
    ValidationError,
};

/// What to do with tasks whose parameters are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputPolicy {
    /// Refuse to simulate and report every problem.
    #[default]
    Reject,
    /// Clamp arrival/priority to ≥ 0 and burst to ≥ 1, then simulate.
    Clamp,
}

/// Input container for one simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Tasks to simulate.
    pub tasks: Vec<Task>,
    /// Scheduling policy.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Round Robin quantum. `None` or non-positive → default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<i64>,
    /// Handling of out-of-range task parameters.
    #[serde(default)]
    pub input_policy: InputPolicy,
}

impl SimulationRequest {
    /// Creates an FCFS request with strict validation.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }

    /// Sets the scheduling policy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }

    /// Sets the input policy.
    pub fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    /// Quantum that Round Robin will use.
    pub fn effective_time_quantum(&self) -> i64 {
        effective_time_quantum(self.time_quantum)
    }

    /// Validates (or clamps) the tasks and runs the simulation.
    ///
    /// Empty and duplicate IDs are rejected under either policy.
    pub fn run(&self) -> Result<SimulationResult, Vec<ValidationError>> {
        if self.tasks.is_empty() {
            return Ok(SimulationResult::empty());
        }

        let tasks = match self.input_policy {
            InputPolicy::Reject => {
                validate_tasks(&self.tasks)?;
                self.tasks.clone()
            }
            InputPolicy::Clamp => {
                let errors = validate_identities(&self.tasks);
                if !errors.is_empty() {
                    return Err(errors);
                }
                let tasks = normalize_tasks(&self.tasks);
                if time_horizon(&tasks).is_none() {
                    return Err(vec![horizon_error()]);
                }
                tasks
            }
        };

        Ok(dispatch(self.algorithm, &tasks, self.effective_time_quantum()))
    }
}
