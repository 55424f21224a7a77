//! Settings module for coop-door.
//!
//! Provides the operating-mode cycle and the controller that maps gestures
//! onto menu navigation and bounded parameter edits.

mod controller;
mod mode;

pub use controller::{SettingsController, SettingsOutcome};
pub use mode::{ClockField, OperatingMode};
