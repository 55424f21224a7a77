//! Session state shared by the settings and door controllers.

use crate::config::units::Millis;
use crate::config::Parameters;
use crate::settings::OperatingMode;

/// Mutable session state owned by the coordinator.
///
/// Passed by reference to the controllers on every dispatch; there is no
/// other copy of this state anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Active mode.
    pub(crate) mode: OperatingMode,
    /// Live parameter values.
    pub(crate) parameters: Parameters,
    /// Display power state as last commanded.
    pub(crate) display_on: bool,
    /// Time of the last classified input.
    pub(crate) last_activity: Millis,
    /// Entry into the current settings mode, refreshed by edits.
    pub(crate) mode_entered_at: Millis,
}

impl Context {
    /// Boot state: `Normal` mode, display on.
    pub fn new(parameters: Parameters, now: Millis) -> Self {
        Self {
            mode: OperatingMode::Normal,
            parameters,
            display_on: true,
            last_activity: now,
            mode_entered_at: now,
        }
    }

    /// Active mode.
    #[inline]
    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Live parameter values.
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Display power state.
    #[inline]
    pub fn display_on(&self) -> bool {
        self.display_on
    }

    /// Time of the last classified input.
    #[inline]
    pub fn last_activity(&self) -> Millis {
        self.last_activity
    }

    /// Entry into the current settings mode.
    #[inline]
    pub fn mode_entered_at(&self) -> Millis {
        self.mode_entered_at
    }
}
