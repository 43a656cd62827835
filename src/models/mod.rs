//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Operating system | Gantt chart |
//! |------------|------------------|-------------|
//! | Task | Process / thread | Row label |
//! | ExecutionInterval | CPU slice | Bar |
//! | Timeline | Dispatch history | Chart |
//! | SimulationResult | Accounting record | Metrics table |

mod result;
mod task;
mod timeline;

pub use result::{CompletionLog, SimulationResult};
pub use task::Task;
pub use timeline::{ExecutionInterval, Timeline};
