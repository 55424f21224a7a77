//! Door motion states.

/// Door motion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DoorState {
    /// Not moving, no pending error.
    #[default]
    Idle,
    /// Opening movement in progress.
    Opening,
    /// Closing movement in progress.
    Closing,
    /// A movement failed; waits for the operator to acknowledge or retry.
    ObstacleError,
}

impl DoorState {
    /// Whether a movement is in progress.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, DoorState::Opening | DoorState::Closing)
    }

    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            DoorState::Idle => "Idle",
            DoorState::Opening => "Opening",
            DoorState::Closing => "Closing",
            DoorState::ObstacleError => "ObstacleError",
        }
    }
}

/// Why the door entered [`DoorState::ObstacleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultCause {
    /// The actuator reported an obstruction.
    ObstacleDetected,
    /// The movement outlasted its configured timeout.
    MovementTimeout,
}

/// Notable result of a door update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DoorTransition {
    /// A movement finished; `open` is the new door position.
    Completed {
        /// Door is now open.
        open: bool,
    },
    /// A movement failed.
    Faulted(FaultCause),
}
