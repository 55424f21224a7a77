//! # coop-door
//!
//! Polled controller for an automated coop door, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Gesture classification**: click, double-click, long and very-long press
//!   from debounced button pins; one rotation event per encoder detent group
//! - **Settings menu**: click-driven cycle over ten bounded parameters,
//!   saved as one batch on exit, reverted on inactivity
//! - **Door state machine**: open/close toggling, obstruction and timeout
//!   supervision, operator acknowledgement and retry
//! - **Daylight scheduling**: opens on daylight, closes at dusk or at the
//!   latest closing time
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coop_door::{ButtonGestures, Coordinator, EncoderGestures, GestureSource, Millis};
//!
//! // Load configuration from TOML
//! let config = coop_door::load_config("coop.toml")?;
//!
//! let button = ButtonGestures::new(button_pin, config.button_timing());
//! let knob = ButtonGestures::new(knob_pin, config.button_timing().without_double_click());
//! let encoder = EncoderGestures::new(&DETENTS, &config.encoder);
//!
//! let mut coop = Coordinator::builder()
//!     .input(button.chain(knob).chain(encoder))
//!     .actuator(motor)
//!     .display(lcd)
//!     .store(eeprom)
//!     .environment(board)
//!     .config(config)
//!     .build()?;
//!
//! loop {
//!     coop.tick(Millis(millis()));
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables TOML configuration loading and the file-backed store
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[macro_use]
mod logging;

// Core modules
pub mod config;
pub mod coordinator;
pub mod door;
pub mod error;
pub mod hal;
pub mod input;
pub mod schedule;
pub mod settings;

// Re-exports for ergonomic API
pub use config::{validate_config, ControllerConfig, ParameterId, ParameterSnapshot, Parameters};
pub use coordinator::{Context, Coordinator, CoordinatorBuilder};
pub use door::{DoorController, DoorState, FaultCause};
pub use error::{Error, Result};
pub use input::{ButtonGestures, Chain, EncoderGestures, GestureSource, InputEvent, Rotation};
pub use schedule::{DaylightScheduler, DoorTarget};
pub use settings::{ClockField, OperatingMode, SettingsController};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Millis, TimeOfDay};
