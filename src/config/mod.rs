//! Configuration module for coop-door.
//!
//! Provides the timing, wiring and menu-policy configuration loaded from TOML
//! files (with `std` feature) or built in code, plus the editable parameter
//! model and its bounds.

mod parameters;
mod policy;
mod system;
mod timing;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use parameters::{
    Bounds, EditableParameter, ParameterId, ParameterSnapshot, Parameters, PARAMETER_COUNT,
};
pub use policy::{IdleRevertPolicy, PersistPolicy, SettingsConfig};
pub use system::ControllerConfig;
pub use timing::{
    ButtonConfig, ButtonTiming, EncoderConfig, TimingConfig, DEFAULT_DEBOUNCE,
    DEFAULT_DISPLAY_SLEEP, DEFAULT_DOUBLE_CLICK, DEFAULT_ENCODER_DIVISOR, DEFAULT_LONG_PRESS,
    DEFAULT_SCHEDULE_INTERVAL, DEFAULT_SETTINGS_IDLE, DEFAULT_VERY_LONG_PRESS,
};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millis, TimeOfDay};
