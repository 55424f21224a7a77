//! Unit tests for configuration validation.

use coop_door::config::units::Millis;
use coop_door::config::{validate_config, ControllerConfig, ParameterId, ParameterSnapshot};
use coop_door::error::{ConfigError, Error};

/// Factory configuration passes validation.
#[test]
fn test_default_config_valid() {
    assert!(validate_config(&ControllerConfig::default()).is_ok());
}

/// Debounce must be shorter than a long press.
#[test]
fn test_debounce_longer_than_long_press() {
    let mut config = ControllerConfig::default();
    config.timing.debounce = Millis(2_000);

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTiming { field: "debounce_ms", value: 2_000, bound: 1_500 }))
    ));
}

/// The double-click window must close before a long press fires.
#[test]
fn test_double_click_window_too_long() {
    let mut config = ControllerConfig::default();
    config.timing.double_click = Millis(1_500);

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTiming { field: "double_click_ms", .. }))
    ));
}

/// A non-zero double-click window must outlast the debounce.
#[test]
fn test_double_click_window_within_debounce() {
    let mut config = ControllerConfig::default();
    config.timing.double_click = config.timing.debounce;

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTiming { field: "double_click_ms", value: 50, bound: 50 }))
    ));

    config.timing.double_click = Millis(51);
    assert!(validate_config(&config).is_ok());
}

/// A disabled double-click window is valid.
#[test]
fn test_zero_double_click_window_valid() {
    let mut config = ControllerConfig::default();
    config.timing.double_click = Millis::ZERO;
    assert!(validate_config(&config).is_ok());
}

/// The settings idle timeout cannot be zero.
#[test]
fn test_zero_settings_idle_rejected() {
    let mut config = ControllerConfig::default();
    config.timing.settings_idle = Millis::ZERO;

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTiming { field: "settings_idle_ms", .. }))
    ));
}

/// Negative encoder divisors are rejected.
#[test]
fn test_negative_divisor_rejected() {
    let mut config = ControllerConfig::default();
    config.encoder.divisor = -4;

    let result = validate_config(&config);
    assert_eq!(result, Err(Error::Config(ConfigError::InvalidEncoderDivisor(-4))));
}

/// Each default is checked against its own bounds.
#[test]
fn test_every_default_checked() {
    for id in ParameterId::ALL {
        let mut defaults = ParameterSnapshot::default();
        defaults.set(id, id.bounds().max + 1);

        let config = ControllerConfig {
            defaults,
            ..ControllerConfig::default()
        };

        match validate_config(&config) {
            Err(Error::Config(ConfigError::DefaultOutOfRange { parameter, .. })) => {
                assert_eq!(parameter, id.name());
            }
            other => panic!("{} not rejected: {:?}", id.name(), other),
        }
    }
}

/// Error messages name the offending setting.
#[test]
fn test_error_display() {
    let err = Error::Config(ConfigError::DefaultOutOfRange {
        parameter: "light_threshold",
        value: 2_000,
        min: 0,
        max: 1_023,
    });
    let text = err.to_string();
    assert!(text.contains("light_threshold"));
    assert!(text.contains("2000"));
}
