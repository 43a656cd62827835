//! Selection rules for picking the next task to run.
//!
//! Each decision-loop policy (SJF, Priority, SRTF, Preemptive Priority)
//! reduces to "evaluate every ready task with a rule, run the best one".
//! The rule is the only thing that differs between them.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::Task;
//! use u_cpusched::selection::{rules, select_best, Candidate};
//!
//! let tasks = vec![
//!     Task::new("P1").with_burst(6),
//!     Task::new("P2").with_burst(2),
//! ];
//! let candidates = tasks.iter().enumerate().map(|(i, t)| Candidate::fresh(i, t));
//! assert_eq!(select_best(&rules::ShortestBurst, candidates).map(|c| c.index), Some(1));
//! ```
//!
//! # Tie-breaking
//! Among equal scores the candidate encountered first wins. Callers iterate
//! in input order, so ties go to the lowest input index.

pub mod rules;

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A ready task under consideration, with its per-call bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Position of the task in the caller's input slice.
    pub index: usize,
    /// The task itself.
    pub task: &'a Task,
    /// Remaining burst (ticks).
    pub remaining: i64,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate.
    pub fn new(index: usize, task: &'a Task, remaining: i64) -> Self {
        Self {
            index,
            task,
            remaining,
        }
    }

    /// Candidate that has not run yet (remaining = full burst).
    pub fn fresh(index: usize, task: &'a Task) -> Self {
        Self::new(index, task, task.burst_time)
    }
}

/// A rule that scores ready tasks.
///
/// # Score Convention
/// **Lower score = higher precedence.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a candidate; lower is preferred.
    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns the first candidate with the minimal score.
///
/// `None` if `candidates` is empty.
pub fn select_best<'a, R, I>(rule: &R, candidates: I) -> Option<Candidate<'a>>
where
    R: SelectionRule + ?Sized,
    I: IntoIterator<Item = Candidate<'a>>,
{
    let mut best: Option<(Candidate<'a>, RuleScore)> = None;
    for candidate in candidates {
        let score = rule.evaluate(&candidate);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("A").with_burst(4).with_priority(1),
            Task::new("B").with_burst(2).with_priority(3),
            Task::new("C").with_burst(2).with_priority(3),
        ]
    }

    fn fresh(tasks: &[Task]) -> Vec<Candidate<'_>> {
        tasks
            .iter()
            .enumerate()
            .map(|(i, t)| Candidate::fresh(i, t))
            .collect()
    }

    #[test]
    fn test_select_shortest_burst_first_index_on_tie() {
        let tasks = tasks();
        let best = select_best(&rules::ShortestBurst, fresh(&tasks)).unwrap();
        // B and C tie on burst 2; B comes first.
        assert_eq!(best.task.id, "B");
        assert_eq!(best.index, 1);
    }

    #[test]
    fn test_select_highest_priority_first_index_on_tie() {
        let tasks = tasks();
        let best = select_best(&rules::HighestPriority, fresh(&tasks)).unwrap();
        assert_eq!(best.task.id, "B");
    }

    #[test]
    fn test_select_shortest_remaining_uses_bookkeeping() {
        let tasks = tasks();
        let candidates = vec![
            Candidate::new(0, &tasks[0], 1),
            Candidate::new(1, &tasks[1], 2),
        ];
        let best = select_best(&rules::ShortestRemaining, candidates).unwrap();
        assert_eq!(best.task.id, "A");
    }

    #[test]
    fn test_select_distinguishes_large_bursts() {
        let big = 1_i64 << 54;
        let tasks = vec![
            Task::new("A").with_burst(big + 2),
            Task::new("B").with_burst(big),
        ];
        let best = select_best(&rules::ShortestBurst, fresh(&tasks)).unwrap();
        assert_eq!(best.task.id, "B");

        let candidates = vec![
            Candidate::new(0, &tasks[0], big + 1),
            Candidate::new(1, &tasks[1], big),
        ];
        let best = select_best(&rules::ShortestRemaining, candidates).unwrap();
        assert_eq!(best.task.id, "B");
    }

    #[test]
    fn test_select_empty() {
        let none: Vec<Candidate<'_>> = Vec::new();
        assert!(select_best(&rules::ShortestBurst, none).is_none());
    }

    #[test]
    fn test_dyn_rule() {
        let tasks = tasks();
        let rule: &dyn SelectionRule = &rules::ShortestBurst;
        assert_eq!(select_best(rule, fresh(&tasks)).unwrap().index, 1);
    }
}
