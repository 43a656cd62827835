//! Deterministic single-CPU scheduling simulator.
//!
//! Runs a finite task set through one of six classical policies and
//! reports the execution timeline plus per-task waiting, turnaround and
//! completion times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `ExecutionInterval`, `Timeline`,
//!   `SimulationResult`
//! - **`selection`**: Selection rules shared by the decision-loop policies
//! - **`scheduler`**: The six policies, the dispatcher and KPIs
//! - **`request`**: Request object with validation policy
//! - **`validation`**: Input integrity checks and clamping
//! - **`workload`**: Random task-set generation
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Task;
//! use u_cpusched::scheduler::{run_scheduler, Algorithm};
//!
//! let tasks = vec![
//!     Task::new("P1").with_burst(8),
//!     Task::new("P2").with_arrival(1).with_burst(4),
//! ];
//! let result = run_scheduler(Algorithm::Srtf, &tasks, None);
//! // P2 preempts P1 at t=1.
//! assert_eq!(result.timeline.len(), 3);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod request;
pub mod scheduler;
pub mod selection;
pub mod validation;
pub mod workload;
