//! Settings-menu persistence policies.

use serde::Deserialize;

/// When edited parameters are written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum PersistPolicy {
    /// Write all parameters as one batch when leaving the last settings mode.
    #[default]
    OnExit,
    /// Write after every single edit.
    Immediate,
}

/// What happens to unsaved edits when a settings mode times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum IdleRevertPolicy {
    /// Restore the values held when the menu was entered.
    #[default]
    Discard,
    /// Keep the edits and persist them.
    Persist,
}

/// Settings-menu behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Persistence policy.
    pub persist: PersistPolicy,

    /// Idle-revert policy.
    pub idle_revert: IdleRevertPolicy,

    /// Prepend clock hour/minute modes to the menu.
    pub clock_modes: bool,
}
