//! Hardware seams.
//!
//! Every external collaborator of the controller is a trait here. Button pins
//! use `embedded_hal::digital::InputPin` directly; everything embedded-hal does
//! not cover (the motor driver, the display, the parameter store, the RTC and
//! the light sensor, the encoder counter) gets a small trait of its own.

mod actuator;
mod display;
mod environment;
mod store;
#[cfg(feature = "std")]
mod file_store;

pub use actuator::{Actuator, ActuatorStatus, MotionCommand};
pub use display::Display;
pub use environment::{Clock, DetentFn, DetentSource, LightSensor, MAX_LIGHT_LEVEL};
pub use store::{MemoryStore, ParameterStore};

#[cfg(feature = "std")]
pub use file_store::TomlFileStore;
