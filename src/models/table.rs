//! Job table: the ordered process list a simulation runs over.
//!
//! A thin owning collection with the editing contract the entry layer
//! needs: validated append, removal by index, derived-field reset, and
//! the canonical sample fixture.

use serde::{Deserialize, Serialize};

use super::process::{Process, Ticks, MAX_PRIORITY, MIN_PRIORITY};
use crate::error::SchedError;

/// Default table capacity, matching the original simulator's bound.
pub const DEFAULT_CAPACITY: usize = 50;

/// Capacity-bounded ordered sequence of processes.
///
/// Insertion order defines the 1-based process ids; removals shift
/// later entries down and renumber, so `processes[i].id == i + 1` is an
/// invariant of the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTable {
    processes: Vec<Process>,
    capacity: usize,
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTable {
    /// Creates an empty table with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with an explicit capacity bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            processes: Vec::new(),
            capacity,
        }
    }

    /// Appends a process after validating it.
    ///
    /// Rejects a full table (`CapacityExceeded`) and a zero burst
    /// (`ZeroBurst`); a failed push leaves the table untouched. The
    /// priority is clamped to the valid range here as well as in the
    /// builder, since `Process` fields are public and may arrive
    /// deserialized. The process id is (re)assigned from its position.
    pub fn push(&mut self, mut process: Process) -> Result<(), SchedError> {
        if self.processes.len() >= self.capacity {
            return Err(SchedError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if process.burst == 0 {
            return Err(SchedError::ZeroBurst);
        }

        process.id = self.processes.len() + 1;
        process.remaining = process.burst;
        process.priority = process.priority.clamp(MIN_PRIORITY, MAX_PRIORITY);
        self.processes.push(process);
        Ok(())
    }

    /// Removes the process at `index`, preserving relative order.
    ///
    /// Later entries shift down and ids are renumbered.
    pub fn remove(&mut self, index: usize) -> Result<Process, SchedError> {
        if index >= self.processes.len() {
            return Err(SchedError::IndexOutOfRange {
                index,
                len: self.processes.len(),
            });
        }

        let removed = self.processes.remove(index);
        for (i, p) in self.processes.iter_mut().enumerate() {
            p.id = i + 1;
        }
        Ok(removed)
    }

    /// Resets the derived state of every process. Inputs are kept.
    pub fn reset_derived(&mut self) {
        for p in &mut self.processes {
            p.reset_derived();
        }
    }

    /// Replaces the table contents with the canonical 5-job fixture.
    ///
    /// Arrivals 0..4, bursts 6,4,3,2,5, priorities 3,1,4,2,5 — the
    /// reference set used for demonstrations and tests throughout.
    pub fn load_sample_set(&mut self) {
        const SAMPLE: [(&str, Ticks, Ticks, u8); 5] = [
            ("P1", 0, 6, 3),
            ("P2", 1, 4, 1),
            ("P3", 2, 3, 4),
            ("P4", 3, 2, 2),
            ("P5", 4, 5, 5),
        ];

        self.processes.clear();
        for (name, arrival, burst, priority) in SAMPLE {
            let _ = self.push(
                Process::new(name)
                    .with_arrival(arrival)
                    .with_burst(burst)
                    .with_priority(priority),
            );
        }
    }

    /// Shared view of the processes in table order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Mutable view for the scheduling policies.
    pub(crate) fn processes_mut(&mut self) -> &mut [Process] {
        &mut self.processes
    }

    /// Looks up a process by its 1-based id.
    pub fn get(&self, id: usize) -> Option<&Process> {
        self.processes.get(id.checked_sub(1)?)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
