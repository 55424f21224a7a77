//! Door motion state machine.

use crate::config::units::Millis;
use crate::config::Parameters;
use crate::hal::{Actuator, ActuatorStatus, MotionCommand};

use super::state::{DoorState, DoorTransition, FaultCause};

/// Door motion controller.
///
/// Commands the actuator and supervises each movement until the actuator
/// reports completion, reports an obstruction, or the movement times out.
/// An obstruction or timeout parks the door in
/// [`DoorState::ObstacleError`] until the operator acknowledges it.
#[derive(Debug, Clone)]
pub struct DoorController {
    /// Current motion state.
    state: DoorState,

    /// Last known position: `true` once an opening completed.
    door_open: bool,

    /// Start of the current movement.
    movement_started_at: Millis,

    /// Cause of the most recent fault.
    last_fault: Option<FaultCause>,
}

impl DoorController {
    /// Create an idle controller with the door at the given position.
    pub fn new(door_open: bool) -> Self {
        Self {
            state: DoorState::Idle,
            door_open,
            movement_started_at: Millis::ZERO,
            last_fault: None,
        }
    }

    /// Current motion state.
    #[inline]
    pub fn state(&self) -> DoorState {
        self.state
    }

    /// Last known door position.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.door_open
    }

    /// Whether an error awaits acknowledgement.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.state == DoorState::ObstacleError
    }

    /// Cause of the most recent fault, kept after acknowledgement.
    #[inline]
    pub fn last_fault(&self) -> Option<FaultCause> {
        self.last_fault
    }

    /// Manual toggle.
    ///
    /// Idle: open a closed door, close an open one. Error: clear it and retry
    /// towards the opposite of the last known position. Ignored while moving.
    /// Returns the command sent, if any.
    pub fn click<A: Actuator>(&mut self, actuator: &mut A, now: Millis) -> Option<MotionCommand> {
        match self.state {
            DoorState::Idle => Some(self.toggle(actuator, now)),
            DoorState::ObstacleError => {
                info!("door: retry after fault");
                self.state = DoorState::Idle;
                Some(self.toggle(actuator, now))
            }
            DoorState::Opening | DoorState::Closing => None,
        }
    }

    /// Clear an error without moving. Returns `true` if there was one.
    pub fn acknowledge(&mut self) -> bool {
        if self.state != DoorState::ObstacleError {
            return false;
        }
        info!("door: fault acknowledged");
        self.state = DoorState::Idle;
        true
    }

    /// Start opening. Refused unless idle and closed.
    pub fn open<A: Actuator>(&mut self, actuator: &mut A, now: Millis) -> bool {
        if self.state != DoorState::Idle || self.door_open {
            return false;
        }
        self.start(MotionCommand::Open, actuator, now);
        true
    }

    /// Start closing. Refused unless idle and open.
    pub fn close<A: Actuator>(&mut self, actuator: &mut A, now: Millis) -> bool {
        if self.state != DoorState::Idle || !self.door_open {
            return false;
        }
        self.start(MotionCommand::Close, actuator, now);
        true
    }

    /// Supervise the movement in progress; call once per tick.
    pub fn update<A: Actuator>(
        &mut self,
        actuator: &mut A,
        now: Millis,
        parameters: &Parameters,
    ) -> Option<DoorTransition> {
        let timeout = match self.state {
            DoorState::Opening => parameters.open_timeout(),
            DoorState::Closing => parameters.close_timeout(),
            DoorState::Idle | DoorState::ObstacleError => return None,
        };

        match actuator.status() {
            ActuatorStatus::Obstructed => Some(self.fault(FaultCause::ObstacleDetected, actuator)),
            ActuatorStatus::Idle => {
                self.door_open = self.state == DoorState::Opening;
                self.state = DoorState::Idle;
                info!("door: movement complete, open={}", self.door_open);
                Some(DoorTransition::Completed {
                    open: self.door_open,
                })
            }
            ActuatorStatus::Moving if now.has_elapsed(self.movement_started_at, timeout) => {
                Some(self.fault(FaultCause::MovementTimeout, actuator))
            }
            ActuatorStatus::Moving => None,
        }
    }

    fn toggle<A: Actuator>(&mut self, actuator: &mut A, now: Millis) -> MotionCommand {
        let command = if self.door_open {
            MotionCommand::Close
        } else {
            MotionCommand::Open
        };
        self.start(command, actuator, now);
        command
    }

    fn start<A: Actuator>(&mut self, command: MotionCommand, actuator: &mut A, now: Millis) {
        self.state = match command {
            MotionCommand::Open => DoorState::Opening,
            MotionCommand::Close => DoorState::Closing,
            MotionCommand::Stop => DoorState::Idle,
        };
        self.movement_started_at = now;
        actuator.command(command);
        info!("door: {}", self.state.name());
    }

    fn fault<A: Actuator>(&mut self, cause: FaultCause, actuator: &mut A) -> DoorTransition {
        actuator.command(MotionCommand::Stop);
        self.state = DoorState::ObstacleError;
        self.last_fault = Some(cause);
        warn!("door: fault {}", cause);
        DoorTransition::Faulted(cause)
    }
}

impl Default for DoorController {
    fn default() -> Self {
        Self::new(false)
    }
}
