//! Error taxonomy for table editing and simulation.
//!
//! Every error is recoverable: a failed call leaves the job table and
//! timeline exactly as they were. A non-positive Round-Robin quantum is
//! deliberately *not* an error — it is normalized to the default
//! quantum (see `policies::Algorithm::effective_quantum`).

use std::error::Error;
use std::fmt;

/// Errors surfaced by the job table and the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    /// The job table is full; the process was not added.
    CapacityExceeded {
        /// Configured table capacity.
        capacity: usize,
    },
    /// A removal targeted an index outside the table.
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Table length at the time of the call.
        len: usize,
    },
    /// A process was submitted with a zero burst time.
    ZeroBurst,
    /// A simulation run was requested on an empty table.
    NoProcesses,
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "job table is full (capacity {capacity})")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for table of {len} processes")
            }
            Self::ZeroBurst => write!(f, "burst time must be greater than zero"),
            Self::NoProcesses => write!(f, "no processes to schedule"),
        }
    }
}

impl Error for SchedError {}
