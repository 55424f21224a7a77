//! Gesture and session timing configuration.

use serde::Deserialize;

use super::units::Millis;

/// Minimum time between accepted button transitions.
pub const DEFAULT_DEBOUNCE: Millis = Millis(50);
/// Hold time after which a press is a long press.
pub const DEFAULT_LONG_PRESS: Millis = Millis(1_500);
/// Hold time after which a press is a very long press.
pub const DEFAULT_VERY_LONG_PRESS: Millis = Millis(5_000);
/// Window after a click in which a second click makes a double-click.
pub const DEFAULT_DOUBLE_CLICK: Millis = Millis(400);
/// Inactivity after which a settings mode reverts to normal.
pub const DEFAULT_SETTINGS_IDLE: Millis = Millis(30_000);
/// Inactivity after which the display is switched off.
pub const DEFAULT_DISPLAY_SLEEP: Millis = Millis(60_000);
/// Period of the daylight scheduler.
pub const DEFAULT_SCHEDULE_INTERVAL: Millis = Millis(1_000);
/// Raw detents per logical encoder click.
pub const DEFAULT_ENCODER_DIVISOR: i32 = 4;

/// Timing windows, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Debounce window for button transitions.
    #[serde(rename = "debounce_ms")]
    pub debounce: Millis,

    /// Long-press threshold.
    #[serde(rename = "long_press_ms")]
    pub long_press: Millis,

    /// Very-long-press threshold.
    #[serde(rename = "very_long_press_ms")]
    pub very_long_press: Millis,

    /// Double-click window; `0` disables double-click detection.
    #[serde(rename = "double_click_ms")]
    pub double_click: Millis,

    /// Settings idle-revert timeout.
    #[serde(rename = "settings_idle_ms")]
    pub settings_idle: Millis,

    /// Display sleep timeout; `0` keeps the display on.
    #[serde(rename = "display_sleep_ms")]
    pub display_sleep: Millis,

    /// Daylight scheduler period; `0` disables the scheduler.
    #[serde(rename = "schedule_interval_ms")]
    pub schedule_interval: Millis,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            long_press: DEFAULT_LONG_PRESS,
            very_long_press: DEFAULT_VERY_LONG_PRESS,
            double_click: DEFAULT_DOUBLE_CLICK,
            settings_idle: DEFAULT_SETTINGS_IDLE,
            display_sleep: DEFAULT_DISPLAY_SLEEP,
            schedule_interval: DEFAULT_SCHEDULE_INTERVAL,
        }
    }
}

/// Electrical configuration of the push buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Pressed reads low (pull-up wiring).
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self { active_low: true }
    }
}

/// Rotary encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Raw detents per logical click.
    pub divisor: i32,

    /// Swap clockwise and counter-clockwise.
    pub invert: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            divisor: DEFAULT_ENCODER_DIVISOR,
            invert: false,
        }
    }
}

/// Derived per-button gesture timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTiming {
    /// Debounce window.
    pub debounce: Millis,
    /// Long-press threshold.
    pub long_press: Millis,
    /// Very-long-press threshold.
    pub very_long_press: Millis,
    /// Double-click window (`0` = disabled).
    pub double_click: Millis,
    /// Pressed reads low.
    pub active_low: bool,
}

impl ButtonTiming {
    /// Combine the timing and electrical sections.
    pub fn from_config(timing: &TimingConfig, button: &ButtonConfig) -> Self {
        Self {
            debounce: timing.debounce,
            long_press: timing.long_press,
            very_long_press: timing.very_long_press,
            double_click: timing.double_click,
            active_low: button.active_low,
        }
    }

    /// Same timing with double-click detection disabled.
    pub fn without_double_click(self) -> Self {
        Self {
            double_click: Millis::ZERO,
            ..self
        }
    }
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self::from_config(&TimingConfig::default(), &ButtonConfig::default())
    }
}
