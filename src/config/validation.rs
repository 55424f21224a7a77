//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::parameters::{ParameterId, ParameterSnapshot};
use super::units::Millis;
use super::timing::{EncoderConfig, TimingConfig};
use super::ControllerConfig;

/// Validate a controller configuration.
///
/// Checks:
/// - Press thresholds are strictly ordered: debounce < long < very long
/// - A non-zero double-click window is longer than the debounce and
///   shorter than a long press
/// - The settings idle timeout is non-zero
/// - The encoder divisor is at least 1
/// - Every default parameter lies within its bounds
pub fn validate_config(config: &ControllerConfig) -> Result<()> {
    validate_timing(&config.timing)?;
    validate_encoder(&config.encoder)?;
    validate_defaults(&config.defaults)?;
    Ok(())
}

fn validate_timing(timing: &TimingConfig) -> Result<()> {
    if timing.debounce >= timing.long_press {
        return Err(Error::Config(ConfigError::InvalidTiming {
            field: "debounce_ms",
            value: timing.debounce.value(),
            bound: timing.long_press.value(),
        }));
    }

    if timing.long_press >= timing.very_long_press {
        return Err(Error::Config(ConfigError::InvalidTiming {
            field: "long_press_ms",
            value: timing.long_press.value(),
            bound: timing.very_long_press.value(),
        }));
    }

    if timing.double_click >= timing.long_press {
        return Err(Error::Config(ConfigError::InvalidTiming {
            field: "double_click_ms",
            value: timing.double_click.value(),
            bound: timing.long_press.value(),
        }));
    }

    // Zero disables double-click.
    if timing.double_click != Millis::ZERO && timing.double_click <= timing.debounce {
        return Err(Error::Config(ConfigError::InvalidTiming {
            field: "double_click_ms",
            value: timing.double_click.value(),
            bound: timing.debounce.value(),
        }));
    }

    if timing.settings_idle.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidTiming {
            field: "settings_idle_ms",
            value: 0,
            bound: 1,
        }));
    }

    Ok(())
}

fn validate_encoder(encoder: &EncoderConfig) -> Result<()> {
    if encoder.divisor < 1 {
        return Err(Error::Config(ConfigError::InvalidEncoderDivisor(encoder.divisor)));
    }
    Ok(())
}

fn validate_defaults(defaults: &ParameterSnapshot) -> Result<()> {
    for id in ParameterId::ALL {
        let value = defaults.get(id);
        let b = id.bounds();
        if value < b.min || value > b.max {
            return Err(Error::Config(ConfigError::DefaultOutOfRange {
                parameter: id.name(),
                value,
                min: b.min,
                max: b.max,
            }));
        }
    }
    Ok(())
}
