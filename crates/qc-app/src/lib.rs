//! Shared application service layer for the instrument front-end.
//!
//! This crate holds everything the touchscreen adapter must not: the
//! session value object, the screen state machine, and the wiring between
//! the user store, the run simulator, and the report store. The adapter
//! translates widget events into [`Event`]s and renders from read-only
//! accessors; all clocks live in the adapter as well.

pub mod controller;
pub mod error;
pub mod session;

pub use controller::{
    Event, NavController, PendingAuto, Screen, CREATE_CONFIRM_DELAY, HOMING_SETTLE_DELAY,
};
pub use error::{AppError, AppResult};
pub use session::Session;
