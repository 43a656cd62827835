//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for tasks that should run first.

use super::{Candidate, RuleScore, SelectionRule};

/// Shortest Job First.
///
/// Prefers the smallest total burst. Used by non-preemptive SJF, where a
/// task's remaining burst always equals its full burst at decision time.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.task.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Prefers the task closest to completion.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Highest priority value first. Absent priority counts as 0.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        -i64::from(candidate.task.effective_priority())
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}
