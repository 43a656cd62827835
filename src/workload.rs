//! Random task-set generation.
//!
//! Produces quick demo workloads with ids `P1..Pn`. Pass a seeded RNG for
//! reproducible sets.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_cpusched::workload::WorkloadGenerator;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let tasks = WorkloadGenerator::new(5).generate(&mut rng);
//! assert_eq!(tasks.len(), 5);
//! assert_eq!(tasks[0].id, "P1");
//! ```

use rand::Rng;

use crate::models::Task;

/// Largest task count a generator will produce.
pub const MAX_TASKS: usize = 20;

/// Random workload parameters.
///
/// Defaults: arrival in `0..10`, burst in `1..=8`, priority in `0..5`.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    max_burst: i64,
    max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` tasks, clamped to `1..=MAX_TASKS`.
    pub fn new(count: usize) -> Self {
        Self {
            count: count.clamp(1, MAX_TASKS),
            max_arrival: 9,
            max_burst: 8,
            max_priority: 4,
        }
    }

    /// Sets the largest arrival time (inclusive, ≥ 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the largest burst time (inclusive, ≥ 1).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest priority (inclusive, ≥ 0).
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Number of tasks this generator produces.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Generates a task set.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Task> {
        (1..=self.count)
            .map(|n| {
                let burst = rng.random_range(1..=self.max_burst);
                Task::new(format!("P{n}"))
                    .with_arrival(rng.random_range(0..=self.max_arrival))
                    .with_burst(burst)
                    .with_priority(rng.random_range(0..=self.max_priority))
                    .with_original_burst(burst)
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
