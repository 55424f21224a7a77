//! Unit tests for TOML configuration parsing.

use std::io::Write;

use coop_door::config::units::Millis;
use coop_door::config::{
    load_config, parse_config, ControllerConfig, IdleRevertPolicy, PersistPolicy,
};
use coop_door::error::{ConfigError, Error};

/// Test parsing a configuration that sets every section.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[timing]
debounce_ms = 30
long_press_ms = 1200
very_long_press_ms = 4000
double_click_ms = 350
settings_idle_ms = 20000
display_sleep_ms = 0
schedule_interval_ms = 5000

[button]
active_low = false

[encoder]
divisor = 2
invert = true

[settings]
persist = "on_exit"
idle_revert = "persist"
clock_modes = true

[defaults]
open_hour = 6
light_threshold = 450
close_delay_minutes = 20
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.timing.debounce, Millis(30));
    assert_eq!(config.timing.long_press, Millis(1_200));
    assert_eq!(config.timing.very_long_press, Millis(4_000));
    assert_eq!(config.timing.double_click, Millis(350));
    assert_eq!(config.timing.settings_idle, Millis(20_000));
    assert_eq!(config.timing.display_sleep, Millis::ZERO);
    assert_eq!(config.timing.schedule_interval, Millis(5_000));
    assert!(!config.button.active_low);
    assert_eq!(config.encoder.divisor, 2);
    assert!(config.encoder.invert);
    assert_eq!(config.settings.persist, PersistPolicy::OnExit);
    assert_eq!(config.settings.idle_revert, IdleRevertPolicy::Persist);
    assert!(config.settings.clock_modes);
    assert_eq!(config.defaults.open_hour, 6);
    assert_eq!(config.defaults.light_threshold, 450);
    assert_eq!(config.defaults.close_delay_minutes, 20);
    // Untouched defaults keep their factory value.
    assert_eq!(config.defaults.max_close_hour, 22);
}

/// Derived button timing follows the configuration.
#[test]
fn test_button_timing_from_config() {
    let config = parse_config("[timing]\ndouble_click_ms = 250\n").expect("Failed to parse TOML");
    let timing = config.button_timing();

    assert_eq!(timing.double_click, Millis(250));
    assert!(timing.active_low);
    assert_eq!(timing.without_double_click().double_click, Millis::ZERO);
}

/// Test that unknown policy names are a parse error.
#[test]
fn test_unknown_policy_rejected() {
    let result = parse_config("[settings]\npersist = \"sometimes\"\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test loading a configuration file from disk.
#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[encoder]\ndivisor = 1").expect("write config");

    let config = load_config(file.path()).expect("Failed to load config");
    assert_eq!(config.encoder.divisor, 1);
    assert_eq!(config.timing, ControllerConfig::default().timing);
}

/// Test that a missing file surfaces as an I/O error.
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = load_config(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
