//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling policy: the job
//! records, the table that owns them, and the execution timeline the
//! policies write into.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | One job: static inputs + simulation state + metrics |
//! | `JobTable` | Capacity-bounded ordered sequence of processes |
//! | `Timeline` | Ordered, coalesced Gantt blocks for one run |

mod process;
mod table;
mod timeline;

pub use process::{Priority, Process, Ticks, MAX_PRIORITY, MIN_PRIORITY};
pub use table::{JobTable, DEFAULT_CAPACITY};
pub use timeline::{Timeline, TimelineBlock};
