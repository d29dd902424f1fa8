//! CPU scheduling simulation engine.
//!
//! Simulates the classic single-core scheduling policies over a static
//! job list and derives the standard timing metrics (turnaround,
//! waiting, response) together with a Gantt-style execution timeline.
//! Presentation (tables, charts, interactive entry) is left to the
//! consumer — this crate owns the simulation only.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `JobTable`, `Timeline`,
//!   `TimelineBlock`
//! - **`policies`**: The six scheduling algorithms behind the
//!   `Algorithm` tag
//! - **`simulator`**: The `Simulator` controller, `Run` snapshots,
//!   and `RunStats` aggregates
//! - **`error`**: The `SchedError` taxonomy
//!
//! # Example
//!
//! ```
//! use cpu_sched::policies::Algorithm;
//! use cpu_sched::simulator::Simulator;
//!
//! let mut sim = Simulator::new();
//! sim.add_process("P1", 0, 6, 3).unwrap();
//! sim.add_process("P2", 1, 4, 1).unwrap();
//!
//! let run = sim.run(Algorithm::Fcfs).unwrap();
//! assert_eq!(run.clock, 10);
//! assert_eq!(run.processes[0].turnaround, 6);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policies;
pub mod simulator;
