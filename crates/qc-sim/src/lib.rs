//! qc-sim: tick-driven run simulator for the experiment loop.
//!
//! Provides:
//! - `Idle -> Running -> {Completed, Stopped} -> Idle` run state machine
//! - Explicit `tick` entry point, one `CycleRecord` per tick
//! - Cooperative stop with a one-tick-latency contract
//!
//! The readings are a stand-in signal (independent uniform draws per
//! channel), not a physical model.

pub mod error;
pub mod record;
pub mod sim;

pub use error::{SimError, SimResult};
pub use record::{CycleRecord, SIGNAL_MAX, SIGNAL_MIN};
pub use sim::{RunOutcome, RunSimulator, RunState, SimOptions, TickOutcome, DEFAULT_TOTAL_CYCLES};
