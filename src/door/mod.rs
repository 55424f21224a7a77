//! Door module for coop-door.
//!
//! Provides the door motion state machine with obstacle and timeout
//! supervision.

mod controller;
mod state;

pub use controller::DoorController;
pub use state::{DoorState, DoorTransition, FaultCause};
