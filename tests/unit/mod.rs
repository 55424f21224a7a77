//! Unit test harness for coop-door.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod gestures;
mod properties;
