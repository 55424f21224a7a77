//! Door actuator interface.

/// Command sent to the door motor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionCommand {
    /// Drive the door towards fully open.
    Open,
    /// Drive the door towards fully closed.
    Close,
    /// De-energise the motor.
    Stop,
}

/// Status reported by the motor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorStatus {
    /// Not moving; the last commanded movement (if any) completed.
    Idle,
    /// Movement in progress.
    Moving,
    /// The obstacle sensor tripped; the driver has stopped.
    Obstructed,
}

/// Motor drive and obstacle sensing for the door.
pub trait Actuator {
    /// Start or stop a movement.
    fn command(&mut self, command: MotionCommand);

    /// Current driver status, polled every tick while the door moves.
    ///
    /// Must report `Moving` from the moment `Open` or `Close` is accepted:
    /// `Idle` during a movement is read as completion.
    fn status(&mut self) -> ActuatorStatus;
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    fn command(&mut self, command: MotionCommand) {
        (**self).command(command)
    }

    fn status(&mut self) -> ActuatorStatus {
        (**self).status()
    }
}
