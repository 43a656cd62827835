//! Policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[default]
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Highest priority first (non-preemptive).
    #[serde(rename = "PRIORITY")]
    Priority,
    /// Round Robin with a fixed time quantum.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Shortest Remaining Time First (preemptive SJF).
    #[serde(rename = "SRTF")]
    Srtf,
    /// Highest priority first, re-evaluated every tick.
    #[serde(rename = "PREEMPTIVE_PRIORITY")]
    PreemptivePriority,
}

/// Error for a selector string that names no policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm: {}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl Algorithm {
    /// All policies, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
        Algorithm::Srtf,
        Algorithm::PreemptivePriority,
    ];

    /// Canonical selector string.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "PRIORITY",
            Algorithm::RoundRobin => "RR",
            Algorithm::Srtf => "SRTF",
            Algorithm::PreemptivePriority => "PREEMPTIVE_PRIORITY",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Priority => "Priority (Non-Preemptive)",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::PreemptivePriority => "Priority (Preemptive)",
        }
    }

    /// Whether the policy may interrupt a running task.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::RoundRobin | Algorithm::Srtf | Algorithm::PreemptivePriority
        )
    }

    /// Whether the policy reads the time quantum.
    pub fn uses_time_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Lenient parse: unknown selectors fall back to FCFS.
    pub fn from_selector(selector: &str) -> Self {
        match selector.parse() {
            Ok(algorithm) => algorithm,
            Err(err) => {
                tracing::warn!(%err, "falling back to FCFS");
                Algorithm::Fcfs
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();
        match key.as_str() {
            "FCFS" | "FIFO" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "PRIORITY" => Ok(Algorithm::Priority),
            "RR" | "ROUNDROBIN" => Ok(Algorithm::RoundRobin),
            "SRTF" => Ok(Algorithm::Srtf),
            "PREEMPTIVEPRIORITY" => Ok(Algorithm::PreemptivePriority),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
