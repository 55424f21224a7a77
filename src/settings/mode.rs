//! Operating modes and the settings-menu order.

use crate::config::ParameterId;

/// Clock field edited by the optional clock-setting modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockField {
    /// Hour of the real-time clock.
    Hour,
    /// Minute of the real-time clock.
    Minute,
}

/// What the controller is doing with user input.
///
/// The settings modes form a fixed cycle:
/// `Normal → [SetClock(Hour) → SetClock(Minute) →] Edit(OpenHour) → … →
/// Edit(CloseTimeout) → Normal`. The clock modes are only part of the cycle
/// when enabled in [`SettingsConfig`](crate::config::SettingsConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Door operation; no menu shown.
    #[default]
    Normal,
    /// Adjusting the real-time clock.
    SetClock(ClockField),
    /// Editing one stored parameter.
    Edit(ParameterId),
}

impl OperatingMode {
    /// Whether a settings menu is open.
    #[inline]
    pub fn is_settings(self) -> bool {
        !matches!(self, OperatingMode::Normal)
    }

    /// Parameter edited in this mode, if any.
    #[inline]
    pub fn parameter(self) -> Option<ParameterId> {
        match self {
            OperatingMode::Edit(id) => Some(id),
            OperatingMode::Normal | OperatingMode::SetClock(_) => None,
        }
    }

    /// First settings mode of the cycle.
    pub fn first_settings(clock_modes: bool) -> Self {
        if clock_modes {
            OperatingMode::SetClock(ClockField::Hour)
        } else {
            OperatingMode::Edit(ParameterId::first())
        }
    }

    /// Following mode in the cycle; the last settings mode returns to `Normal`.
    pub fn next(self, clock_modes: bool) -> Self {
        match self {
            OperatingMode::Normal => Self::first_settings(clock_modes),
            OperatingMode::SetClock(ClockField::Hour) => OperatingMode::SetClock(ClockField::Minute),
            OperatingMode::SetClock(ClockField::Minute) => OperatingMode::Edit(ParameterId::first()),
            OperatingMode::Edit(id) => id.next().map_or(OperatingMode::Normal, OperatingMode::Edit),
        }
    }

    /// Menu title, for renderers.
    pub fn name(self) -> &'static str {
        match self {
            OperatingMode::Normal => "normal",
            OperatingMode::SetClock(ClockField::Hour) => "clock_hour",
            OperatingMode::SetClock(ClockField::Minute) => "clock_minute",
            OperatingMode::Edit(id) => id.name(),
        }
    }
}
