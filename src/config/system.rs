//! Controller configuration - root configuration structure.

use serde::Deserialize;

use super::parameters::ParameterSnapshot;
use super::policy::SettingsConfig;
use super::timing::{ButtonConfig, ButtonTiming, EncoderConfig, TimingConfig};

/// Root configuration structure from TOML.
///
/// Every section is optional; an empty document yields the factory setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ControllerConfig {
    /// Gesture and session timing.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Push-button wiring.
    #[serde(default)]
    pub button: ButtonConfig,

    /// Rotary encoder setup.
    #[serde(default)]
    pub encoder: EncoderConfig,

    /// Settings-menu behaviour.
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Parameter values used when the store has nothing usable.
    #[serde(default)]
    pub defaults: ParameterSnapshot,
}

impl ControllerConfig {
    /// Gesture timing for the push buttons.
    pub fn button_timing(&self) -> ButtonTiming {
        ButtonTiming::from_config(&self.timing, &self.button)
    }
}
