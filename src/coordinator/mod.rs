//! Coordinator module for coop-door.
//!
//! Owns the peripherals and the session [`Context`], and routes every
//! classified gesture either to the settings menu or to the door.
//!
//! One call to [`Coordinator::tick`] performs, in order:
//!
//! 1. input polling (every channel, events in channel order);
//! 2. dispatch of each event, display-wake rule first;
//! 3. door supervision (completion, obstruction, timeout);
//! 4. the settings idle-revert;
//! 5. display sleep;
//! 6. the daylight scheduler.

mod builder;
mod context;

pub use builder::CoordinatorBuilder;
pub use context::Context;

use crate::config::units::Millis;
use crate::config::{Parameters, PersistPolicy};
use crate::door::{DoorController, DoorState, DoorTransition, FaultCause};
use crate::hal::{Actuator, Clock, Display, LightSensor, ParameterStore};
use crate::input::{Events, GestureSource, InputEvent};
use crate::schedule::{DaylightScheduler, DoorTarget};
use crate::settings::{ClockField, OperatingMode, SettingsController, SettingsOutcome};

/// Top-level controller.
///
/// Created through [`CoordinatorBuilder`].
pub struct Coordinator<IN, ACT, DISP, STORE, ENV>
where
    IN: GestureSource,
    ACT: Actuator,
    DISP: Display,
    STORE: ParameterStore,
    ENV: Clock + LightSensor,
{
    input: IN,
    actuator: ACT,
    display: DISP,
    store: STORE,
    env: ENV,
    ctx: Context,
    settings: SettingsController,
    door: DoorController,
    scheduler: DaylightScheduler,
    /// Inactivity before the display is turned off; zero keeps it on.
    display_sleep: Millis,
}

impl<IN, ACT, DISP, STORE, ENV> Coordinator<IN, ACT, DISP, STORE, ENV>
where
    IN: GestureSource,
    ACT: Actuator,
    DISP: Display,
    STORE: ParameterStore,
    ENV: Clock + LightSensor,
{
    /// Start building a coordinator.
    pub fn builder() -> CoordinatorBuilder<IN, ACT, DISP, STORE, ENV> {
        CoordinatorBuilder::new()
    }

    /// Run one cooperative cycle.
    pub fn tick(&mut self, now: Millis) {
        let mut events = Events::new();
        self.input.poll_into(now, &mut events);

        // A dark display at the start of the tick swallows every event of
        // the tick, whichever channel it came from.
        let waking = !self.ctx.display_on && !events.is_empty();
        for event in events {
            self.dispatch(event, waking, now);
        }
        if waking {
            self.wake_display();
        }

        if let Some(transition) = self.door.update(&mut self.actuator, now, &self.ctx.parameters) {
            self.on_door_transition(transition);
        }

        if let Some(outcome) = self.settings.check_idle(&mut self.ctx, now) {
            self.apply(outcome);
        }

        self.check_display_sleep(now);
        self.run_schedule(now);
    }

    // ========== Accessors ==========

    /// Active mode.
    #[inline]
    pub fn mode(&self) -> OperatingMode {
        self.ctx.mode
    }

    /// Door motion state.
    #[inline]
    pub fn door_state(&self) -> DoorState {
        self.door.state()
    }

    /// Live parameter values.
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.ctx.parameters
    }

    /// Display power state as last commanded.
    #[inline]
    pub fn display_on(&self) -> bool {
        self.ctx.display_on
    }

    /// Last known door position.
    #[inline]
    pub fn door_open(&self) -> bool {
        self.door.is_open()
    }

    /// Cause of the most recent door fault.
    #[inline]
    pub fn last_fault(&self) -> Option<FaultCause> {
        self.door.last_fault()
    }

    /// Session state.
    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Gesture source.
    pub fn input(&self) -> &IN {
        &self.input
    }

    /// Gesture source, mutably.
    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    /// Door actuator.
    pub fn actuator(&self) -> &ACT {
        &self.actuator
    }

    /// Door actuator, mutably.
    pub fn actuator_mut(&mut self) -> &mut ACT {
        &mut self.actuator
    }

    /// Display.
    pub fn display(&self) -> &DISP {
        &self.display
    }

    /// Parameter store.
    pub fn store(&self) -> &STORE {
        &self.store
    }

    /// Clock and light sensor.
    pub fn environment(&self) -> &ENV {
        &self.env
    }

    /// Clock and light sensor, mutably.
    pub fn environment_mut(&mut self) -> &mut ENV {
        &mut self.env
    }

    /// Take the coordinator apart.
    pub fn release(self) -> (IN, ACT, DISP, STORE, ENV) {
        (self.input, self.actuator, self.display, self.store, self.env)
    }

    // ========== Dispatch ==========

    fn dispatch(&mut self, event: InputEvent, waking: bool, now: Millis) {
        debug!("input: {}", event);
        self.ctx.last_activity = now;

        // Waking has no other effect; the one exception lets an obstacle
        // error be cleared blind.
        if waking {
            if event == InputEvent::VeryLongPress {
                self.door.acknowledge();
            }
            return;
        }
        // Turned off by an earlier event of this tick.
        if !self.ctx.display_on {
            return;
        }

        match event {
            InputEvent::VeryLongPress => {
                if self.door.acknowledge() {
                    self.wake_display();
                }
            }
            _ if self.ctx.mode.is_settings() => {
                let outcome = self.settings.handle(event, &mut self.ctx, now);
                self.apply(outcome);
            }
            _ => self.handle_normal(event, now),
        }
    }

    fn handle_normal(&mut self, event: InputEvent, now: Millis) {
        match event {
            InputEvent::Click => {
                if self.door.click(&mut self.actuator, now).is_some() {
                    self.display.request_refresh();
                }
            }
            InputEvent::DoubleClick => self.sleep_display(),
            InputEvent::LongPress => {
                if self.door.acknowledge() {
                    self.display.request_refresh();
                } else {
                    let outcome = self.settings.enter(&mut self.ctx, now);
                    self.apply(outcome);
                }
            }
            InputEvent::VeryLongPress | InputEvent::Rotate(_) => {}
        }
    }

    fn apply(&mut self, outcome: SettingsOutcome) {
        match outcome {
            SettingsOutcome::Ignored => {}
            SettingsOutcome::Entered(_) | SettingsOutcome::Advanced(_) => {
                self.display.clear();
                self.display.request_refresh();
            }
            SettingsOutcome::Edited { changed, .. } => {
                if changed && self.settings.config().persist == PersistPolicy::Immediate {
                    self.persist();
                }
                self.display.request_refresh();
            }
            SettingsOutcome::AdjustClock { field, delta } => {
                let time = self.env.time_of_day();
                let time = match field {
                    ClockField::Hour => time.with_hour_shifted(delta),
                    ClockField::Minute => time.with_minute_shifted(delta),
                };
                self.env.set_time_of_day(time);
                self.display.request_refresh();
            }
            SettingsOutcome::Exited => {
                self.display.clear();
                let saved = self.settings.config().persist != PersistPolicy::OnExit
                    || self.persist();
                // A failed save stays on screen.
                if saved {
                    self.sleep_display();
                }
            }
            SettingsOutcome::Reverted { persist } => {
                if persist {
                    self.persist();
                }
                self.display.clear();
                self.display.request_refresh();
            }
        }
    }

    fn on_door_transition(&mut self, transition: DoorTransition) {
        match transition {
            DoorTransition::Completed { .. } => self.display.request_refresh(),
            // Faults must be visible.
            DoorTransition::Faulted(_) => self.wake_display(),
        }
    }

    // ========== Side effects ==========

    /// Write the live parameters; `false` if the store refused them.
    fn persist(&mut self) -> bool {
        let snapshot = self.ctx.parameters.snapshot();
        match self.store.persist(&snapshot) {
            Ok(()) => {
                debug!("store: parameters saved");
                true
            }
            Err(_err) => {
                warn!("store: persist failed, keeping values in memory");
                self.display.report_storage_failure();
                false
            }
        }
    }

    fn wake_display(&mut self) {
        if !self.ctx.display_on {
            info!("display: on");
            self.display.turn_on();
            self.ctx.display_on = true;
        }
        self.display.request_refresh();
    }

    fn sleep_display(&mut self) {
        if self.ctx.display_on {
            info!("display: off");
            self.display.turn_off();
            self.ctx.display_on = false;
        }
    }

    fn check_display_sleep(&mut self, now: Millis) {
        if self.display_sleep == Millis::ZERO
            || !self.ctx.display_on
            || self.ctx.mode != OperatingMode::Normal
            || self.door.has_error()
        {
            return;
        }
        if now.has_elapsed(self.ctx.last_activity, self.display_sleep) {
            self.sleep_display();
        }
    }

    fn run_schedule(&mut self, now: Millis) {
        if self.ctx.mode != OperatingMode::Normal || self.door.state() != DoorState::Idle {
            return;
        }
        let moved = match self.scheduler.poll(&mut self.env, &self.ctx.parameters, now) {
            Some(DoorTarget::Open) => self.door.open(&mut self.actuator, now),
            Some(DoorTarget::Closed) => self.door.close(&mut self.actuator, now),
            None => false,
        };
        if moved {
            self.display.request_refresh();
        }
    }
}
