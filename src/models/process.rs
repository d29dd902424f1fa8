//! Process (job) model.
//!
//! A process is one unit of CPU work: a handful of static inputs
//! (arrival, burst, priority) plus the mutable state a simulation run
//! writes into it and the timing metrics derived afterwards.
//!
//! # Time Representation
//! All times are in abstract simulation ticks starting at t=0. The
//! consumer defines what one tick means (the original pedagogical
//! setting treats it as one millisecond).

use serde::{Deserialize, Serialize};

/// Simulation time, in ticks.
pub type Ticks = u64;

/// Scheduling priority. Lower value = more urgent.
pub type Priority = u8;

/// Most urgent priority value.
pub const MIN_PRIORITY: Priority = 1;
/// Least urgent priority value.
pub const MAX_PRIORITY: Priority = 10;

/// Number of distinct display color slots.
const PALETTE_SIZE: usize = 10;

/// A process (job) competing for the simulated CPU.
///
/// Static inputs (`arrival`, `burst`, `priority`) persist across runs;
/// everything else is derived state that `JobTable::reset_derived`
/// restores before each simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// 1-based position in the job table. Assigned on insert,
    /// re-assigned after removals so `id == index + 1` always holds.
    pub id: usize,
    /// Short display label (e.g. "P1").
    pub name: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: Ticks,
    /// Total CPU time required. Always > 0 once inside a table.
    pub burst: Ticks,
    /// Urgency in `[MIN_PRIORITY, MAX_PRIORITY]`, lower = more urgent.
    pub priority: Priority,
    /// CPU time still owed. Reaches 0 exactly once per run.
    pub remaining: Ticks,
    /// Tick of first dispatch. `None` until the process first runs.
    pub started_at: Option<Ticks>,
    /// Tick at which the process finished. `None` until completion.
    pub completed_at: Option<Ticks>,
    /// `completed_at - arrival`. Valid after a run.
    pub turnaround: Ticks,
    /// `turnaround - burst`, floored at 0. Valid after a run.
    pub waiting: Ticks,
    /// `started_at - arrival`, floored at 0; 0 if never dispatched.
    pub response: Ticks,
}

impl Process {
    /// Creates a process with the given name and zeroed inputs.
    ///
    /// The id is assigned by the table on insert. The default burst of
    /// 1 keeps a bare `Process::new` valid; use `with_burst` to set
    /// the real value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            arrival: 0,
            burst: 1,
            priority: MIN_PRIORITY,
            remaining: 1,
            started_at: None,
            completed_at: None,
            turnaround: 0,
            waiting: 0,
            response: 0,
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival: Ticks) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst time. The table rejects zero bursts on insert.
    pub fn with_burst(mut self, burst: Ticks) -> Self {
        self.burst = burst;
        self.remaining = burst;
        self
    }

    /// Sets the priority, clamped to `[MIN_PRIORITY, MAX_PRIORITY]`.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority.clamp(MIN_PRIORITY, MAX_PRIORITY);
        self
    }

    /// Whether the process has finished in the current run.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Restores the derived state to its pre-run values.
    ///
    /// Static inputs are untouched.
    pub fn reset_derived(&mut self) {
        self.remaining = self.burst;
        self.started_at = None;
        self.completed_at = None;
        self.turnaround = 0;
        self.waiting = 0;
        self.response = 0;
    }

    /// Display palette slot for this process. Purely cosmetic.
    #[inline]
    pub fn color_slot(&self) -> usize {
        self.id.saturating_sub(1) % PALETTE_SIZE
    }
}
