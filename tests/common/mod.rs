//! Test doubles for the coordinator's peripherals.

#![allow(dead_code)]

use std::collections::VecDeque;

use coop_door::config::units::{Millis, TimeOfDay};
use coop_door::config::ParameterSnapshot;
use coop_door::error::StorageError;
use coop_door::hal::{
    Actuator, ActuatorStatus, Clock, Display, LightSensor, MemoryStore, MotionCommand,
    ParameterStore,
};
use coop_door::input::{GestureSource, InputEvent};
use coop_door::{Coordinator, CoordinatorBuilder, ControllerConfig};

/// Gesture source fed by the test, one event per poll.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }
}

impl GestureSource for ScriptedInput {
    fn poll(&mut self, _now: Millis) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}

/// Actuator that starts moving on Open/Close and stops on Stop.
#[derive(Debug)]
pub struct MockActuator {
    pub commands: Vec<MotionCommand>,
    pub status: ActuatorStatus,
}

impl MockActuator {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            status: ActuatorStatus::Idle,
        }
    }
}

impl Actuator for MockActuator {
    fn command(&mut self, command: MotionCommand) {
        self.commands.push(command);
        self.status = match command {
            MotionCommand::Open | MotionCommand::Close => ActuatorStatus::Moving,
            MotionCommand::Stop => ActuatorStatus::Idle,
        };
    }

    fn status(&mut self) -> ActuatorStatus {
        self.status
    }
}

/// Display that counts every call.
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub on: bool,
    pub turn_ons: u32,
    pub turn_offs: u32,
    pub clears: u32,
    pub refreshes: u32,
    pub storage_failures: u32,
}

impl Display for MockDisplay {
    fn turn_on(&mut self) {
        self.on = true;
        self.turn_ons += 1;
    }

    fn turn_off(&mut self) {
        self.on = false;
        self.turn_offs += 1;
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn request_refresh(&mut self) {
        self.refreshes += 1;
    }

    fn report_storage_failure(&mut self) {
        self.storage_failures += 1;
    }
}

/// Store whose every operation fails.
#[derive(Debug, Default)]
pub struct BrokenStore {
    pub attempts: u32,
}

impl ParameterStore for BrokenStore {
    fn load(&mut self) -> Result<ParameterSnapshot, StorageError> {
        self.attempts += 1;
        Err(StorageError::Io(heapless::String::try_from("eeprom offline").unwrap()))
    }

    fn persist(&mut self, _snapshot: &ParameterSnapshot) -> Result<(), StorageError> {
        self.attempts += 1;
        Err(StorageError::Io(heapless::String::try_from("eeprom offline").unwrap()))
    }
}

/// Fixed clock and light level, settable by the test.
#[derive(Debug)]
pub struct MockEnvironment {
    pub time: TimeOfDay,
    pub light: u16,
}

impl MockEnvironment {
    /// Midday in the dark: the scheduler holds position.
    pub fn new() -> Self {
        Self {
            time: TimeOfDay::hm(12, 0),
            light: 0,
        }
    }
}

impl Clock for MockEnvironment {
    fn time_of_day(&mut self) -> TimeOfDay {
        self.time
    }

    fn set_time_of_day(&mut self, time: TimeOfDay) {
        self.time = time;
    }
}

impl LightSensor for MockEnvironment {
    fn light_level(&mut self) -> u16 {
        self.light
    }
}

pub type TestCoordinator<S = MemoryStore> =
    Coordinator<ScriptedInput, MockActuator, MockDisplay, S, MockEnvironment>;

/// Builder with every peripheral mocked except the store.
pub fn builder<S: ParameterStore>(
    store: S,
) -> CoordinatorBuilder<ScriptedInput, MockActuator, MockDisplay, S, MockEnvironment> {
    Coordinator::builder()
        .input(ScriptedInput::default())
        .actuator(MockActuator::new())
        .display(MockDisplay::default())
        .store(store)
        .environment(MockEnvironment::new())
}

/// Coordinator with the scheduler disabled and a factory-default store.
pub fn coordinator(config: ControllerConfig) -> TestCoordinator {
    let mut config = config;
    config.timing.schedule_interval = Millis::ZERO;
    builder(MemoryStore::with_snapshot(ParameterSnapshot::default()))
        .config(config)
        .build()
        .expect("coordinator should build")
}

/// Feed one event and run a tick.
pub fn send<S: ParameterStore>(coop: &mut TestCoordinator<S>, event: InputEvent, now: u32) {
    coop.input_mut().push(event);
    coop.tick(Millis(now));
}
