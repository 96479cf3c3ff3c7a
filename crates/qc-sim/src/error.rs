//! Error types for simulator operations.

use thiserror::Error;

/// Errors encountered driving the run simulator.
///
/// The only failure is a contract violation: starting a run from a state
/// other than `Idle`. Numeric generation cannot fail.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("cannot start a run from the {state} state")]
    NotIdle { state: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;
