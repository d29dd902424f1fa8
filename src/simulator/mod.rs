//! Simulation controller and metrics.
//!
//! `Simulator` owns the job table and drives one policy per
//! invocation: reset derived state, run the policy, derive the
//! per-process metrics, and hand back a self-contained [`Run`]
//! snapshot. `RunStats` aggregates the per-process metrics into the
//! averages a statistics display shows.
//!
//! A run is synchronous and exclusive: state is fully reset at the
//! start of every invocation, so consecutive runs over the same inputs
//! are independent and deterministic.

mod engine;
mod stats;

pub use engine::{Run, Simulator};
pub use stats::RunStats;
