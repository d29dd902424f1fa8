//! Scheduling policies.
//!
//! The six classic single-core algorithms, grouped by dispatch
//! discipline:
//!
//! - **Batch dispatch** (`batch`): FCFS, SJF, Priority — pick one
//!   eligible job, run it to completion, repeat.
//! - **Tick dispatch** (`preemptive`): SRTF, Preemptive-Priority —
//!   re-select the running job every clock unit.
//! - **Queue dispatch** (`round_robin`): Round-Robin — FIFO ready
//!   queue with a fixed quantum.
//!
//! All policies share one tie-break convention: when selection keys
//! are equal, the lowest process id wins. All consume the same job
//! slice, write start/completion times into it, and append to the same
//! coalescing [`Timeline`](crate::models::Timeline).
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4.2

pub mod batch;
pub mod preemptive;
pub mod round_robin;

use serde::{Deserialize, Serialize};

use crate::models::Ticks;

/// Quantum substituted when Round-Robin is given a zero quantum.
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Tag selecting one of the six scheduling policies.
///
/// A closed set: every simulation run executes exactly one variant.
/// Round-Robin carries its quantum; a zero value is normalized to
/// [`DEFAULT_QUANTUM`] rather than rejected (see
/// [`effective_quantum`](Self::effective_quantum)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served. Non-preemptive, arrival order.
    Fcfs,
    /// Shortest Job First. Non-preemptive, minimum burst time.
    Sjf,
    /// Shortest Remaining Time First. Preemptive SJF.
    Srtf,
    /// Priority. Non-preemptive, minimum priority value.
    Priority,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous ticks granted per dispatch.
        quantum: Ticks,
    },
    /// Preemptive Priority. Re-evaluated every tick.
    PreemptivePriority,
}

impl Algorithm {
    /// Round-Robin with the given quantum.
    pub fn round_robin(quantum: Ticks) -> Self {
        Self::RoundRobin { quantum }
    }

    /// All six algorithms, Round-Robin parameterized by `quantum`.
    pub fn all(quantum: Ticks) -> [Self; 6] {
        [
            Self::Fcfs,
            Self::Sjf,
            Self::Srtf,
            Self::Priority,
            Self::RoundRobin { quantum },
            Self::PreemptivePriority,
        ]
    }

    /// Short display name (e.g. "SRTF").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "Round Robin",
            Self::PreemptivePriority => "Preemptive Priority",
        }
    }

    /// One-line description of the selection rule.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "Executes processes strictly in arrival order",
            Self::Sjf => "Picks the eligible process with the shortest burst time",
            Self::Srtf => "Preempts for the process with the least remaining time",
            Self::Priority => "Picks the eligible process with the most urgent priority",
            Self::RoundRobin { .. } => "Cycles a FIFO ready queue with a fixed time quantum",
            Self::PreemptivePriority => "Preempts for the most urgent arrived process",
        }
    }

    /// Whether this policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin { .. } | Self::PreemptivePriority
        )
    }

    /// The quantum a Round-Robin run will actually use.
    ///
    /// A zero quantum falls back to [`DEFAULT_QUANTUM`] — the original
    /// simulator silently corrected invalid quanta, and this keeps that
    /// leniency as an explicit normalization step. `None` for the five
    /// quantum-free policies.
    pub fn effective_quantum(&self) -> Option<Ticks> {
        match self {
            Self::RoundRobin { quantum: 0 } => Some(DEFAULT_QUANTUM),
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_display() {
        assert_eq!(Algorithm::Fcfs.name(), "FCFS");
        assert_eq!(Algorithm::round_robin(4).to_string(), "Round Robin");
        assert_eq!(Algorithm::PreemptivePriority.name(), "Preemptive Priority");
        assert!(Algorithm::Srtf.description().contains("remaining time"));
    }

    #[test]
    fn test_preemptive_classification() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(!Algorithm::Priority.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::round_robin(2).is_preemptive());
        assert!(Algorithm::PreemptivePriority.is_preemptive());
    }

    #[test]
    fn test_effective_quantum() {
        assert_eq!(Algorithm::round_robin(3).effective_quantum(), Some(3));
        assert_eq!(Algorithm::round_robin(0).effective_quantum(), Some(DEFAULT_QUANTUM));
        assert_eq!(Algorithm::Fcfs.effective_quantum(), None);
    }

    #[test]
    fn test_all_covers_six() {
        let all = Algorithm::all(2);
        assert_eq!(all.len(), 6);
        assert!(all.contains(&Algorithm::RoundRobin { quantum: 2 }));
    }
}
