//! The simulation controller.
//!
//! One `run()` call is one atomic simulation: derived state is fully
//! reset, the selected policy executes to completion, metrics are
//! derived, and a `Run` snapshot is returned. Errors are checked
//! before any mutation, so a failed call changes nothing.

use serde::{Deserialize, Serialize};

use super::stats::{apply_process_metrics, RunStats};
use crate::error::SchedError;
use crate::models::{JobTable, Process, Ticks, Timeline};
use crate::policies::{batch, preemptive, round_robin, Algorithm, DEFAULT_QUANTUM};

/// The outcome of one simulation run.
///
/// Self-contained snapshot: the mutated process list (with metrics),
/// the execution timeline, the final clock, and aggregate statistics.
/// The simulator resets everything before the next run, so a `Run` is
/// never mutated after it is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// The policy that produced this run.
    pub algorithm: Algorithm,
    /// Processes in table order, with start/completion times and
    /// metrics filled in.
    pub processes: Vec<Process>,
    /// Ordered execution blocks.
    pub timeline: Timeline,
    /// Clock value when the last process completed.
    pub clock: Ticks,
    /// Aggregate statistics.
    pub stats: RunStats,
}

/// Owns the job table and drives the scheduling policies.
///
/// # Example
///
/// ```
/// use cpu_sched::policies::Algorithm;
/// use cpu_sched::simulator::Simulator;
///
/// let mut sim = Simulator::new();
/// sim.load_sample_set();
/// let run = sim.run(Algorithm::Sjf).unwrap();
/// assert_eq!(run.clock, 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    table: JobTable,
    timeline: Timeline,
}

impl Simulator {
    /// Creates a simulator with an empty, default-capacity job table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with an explicit job table capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: JobTable::with_capacity(capacity),
            timeline: Timeline::new(),
        }
    }

    /// Adds a process to the table.
    ///
    /// The priority is clamped to the valid range; a zero burst or a
    /// full table is rejected without mutating anything.
    pub fn add_process(
        &mut self,
        name: impl Into<String>,
        arrival: Ticks,
        burst: Ticks,
        priority: u8,
    ) -> Result<(), SchedError> {
        self.table.push(
            Process::new(name)
                .with_arrival(arrival)
                .with_burst(burst)
                .with_priority(priority),
        )
    }

    /// Removes the process at `index`, preserving the order of the rest.
    pub fn delete_process(&mut self, index: usize) -> Result<Process, SchedError> {
        self.table.remove(index)
    }

    /// Replaces the table with the canonical 5-job demonstration set.
    pub fn load_sample_set(&mut self) {
        self.table.load_sample_set();
    }

    /// Clears derived fields and the timeline; inputs are kept.
    pub fn reset(&mut self) {
        self.table.reset_derived();
        self.timeline.clear();
    }

    /// Runs one policy over the current table and returns the result.
    ///
    /// Fails with `NoProcesses` on an empty table, before any state is
    /// touched. Otherwise: full reset, policy execution, metric
    /// derivation, snapshot.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<Run, SchedError> {
        if self.table.is_empty() {
            return Err(SchedError::NoProcesses);
        }

        self.reset();

        let procs = self.table.processes_mut();
        let clock = match algorithm {
            Algorithm::Fcfs => batch::fcfs(procs, &mut self.timeline),
            Algorithm::Sjf => batch::sjf(procs, &mut self.timeline),
            Algorithm::Priority => batch::priority(procs, &mut self.timeline),
            Algorithm::Srtf => preemptive::srtf(procs, &mut self.timeline),
            Algorithm::PreemptivePriority => {
                preemptive::preemptive_priority(procs, &mut self.timeline)
            }
            Algorithm::RoundRobin { .. } => {
                let quantum = algorithm.effective_quantum().unwrap_or(DEFAULT_QUANTUM);
                round_robin::round_robin(procs, &mut self.timeline, quantum)
            }
        };

        apply_process_metrics(self.table.processes_mut());
        let stats = RunStats::calculate(self.table.processes(), &self.timeline);

        Ok(Run {
            algorithm,
            processes: self.table.processes().to_vec(),
            timeline: self.timeline.clone(),
            clock,
            stats,
        })
    }

    /// Runs all six policies over the same inputs for side-by-side
    /// comparison. `quantum` parameterizes the Round-Robin entry.
    pub fn compare(&mut self, quantum: Ticks) -> Result<Vec<Run>, SchedError> {
        Algorithm::all(quantum)
            .into_iter()
            .map(|algorithm| self.run(algorithm))
            .collect()
    }

    /// The processes in table order (including post-run state).
    pub fn processes(&self) -> &[Process] {
        self.table.processes()
    }

    /// The timeline of the most recent run.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The underlying job table.
    pub fn table(&self) -> &JobTable {
        &self.table
    }

    /// Number of processes in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table holds no processes.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
