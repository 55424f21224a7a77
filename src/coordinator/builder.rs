//! Builder pattern for Coordinator.

use crate::config::units::Millis;
use crate::config::{validate_config, ControllerConfig, Parameters};
use crate::door::DoorController;
use crate::error::{ConfigError, Error, Result};
use crate::hal::{Actuator, Clock, Display, LightSensor, ParameterStore};
use crate::input::GestureSource;
use crate::schedule::DaylightScheduler;
use crate::settings::SettingsController;

use super::context::Context;
use super::Coordinator;

/// Builder for creating Coordinator instances.
pub struct CoordinatorBuilder<IN, ACT, DISP, STORE, ENV>
where
    IN: GestureSource,
    ACT: Actuator,
    DISP: Display,
    STORE: ParameterStore,
    ENV: Clock + LightSensor,
{
    input: Option<IN>,
    actuator: Option<ACT>,
    display: Option<DISP>,
    store: Option<STORE>,
    env: Option<ENV>,
    config: ControllerConfig,
    door_open: bool,
    boot_time: Millis,
}

impl<IN, ACT, DISP, STORE, ENV> Default for CoordinatorBuilder<IN, ACT, DISP, STORE, ENV>
where
    IN: GestureSource,
    ACT: Actuator,
    DISP: Display,
    STORE: ParameterStore,
    ENV: Clock + LightSensor,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<IN, ACT, DISP, STORE, ENV> CoordinatorBuilder<IN, ACT, DISP, STORE, ENV>
where
    IN: GestureSource,
    ACT: Actuator,
    DISP: Display,
    STORE: ParameterStore,
    ENV: Clock + LightSensor,
{
    /// Create a new builder with the factory configuration.
    pub fn new() -> Self {
        Self {
            input: None,
            actuator: None,
            display: None,
            store: None,
            env: None,
            config: ControllerConfig::default(),
            door_open: false,
            boot_time: Millis::ZERO,
        }
    }

    /// Set the gesture source (typically a button chained with an encoder).
    pub fn input(mut self, input: IN) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the door actuator.
    pub fn actuator(mut self, actuator: ACT) -> Self {
        self.actuator = Some(actuator);
        self
    }

    /// Set the display.
    pub fn display(mut self, display: DISP) -> Self {
        self.display = Some(display);
        self
    }

    /// Set the parameter store.
    pub fn store(mut self, store: STORE) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the clock and light sensor.
    pub fn environment(mut self, env: ENV) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the controller configuration.
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Door position at boot (closed unless told otherwise).
    pub fn door_open(mut self, open: bool) -> Self {
        self.door_open = open;
        self
    }

    /// Timestamp of the first tick.
    pub fn boot_time(mut self, now: Millis) -> Self {
        self.boot_time = now;
        self
    }

    /// Build the Coordinator.
    ///
    /// Parameters are loaded from the store; if that fails the configured
    /// defaults are used and the failure is reported on the display.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a component is
    /// missing.
    pub fn build(self) -> Result<Coordinator<IN, ACT, DISP, STORE, ENV>> {
        validate_config(&self.config)?;

        let input = self.input.ok_or(Error::Config(ConfigError::MissingComponent("input")))?;
        let actuator = self
            .actuator
            .ok_or(Error::Config(ConfigError::MissingComponent("actuator")))?;
        let mut display = self
            .display
            .ok_or(Error::Config(ConfigError::MissingComponent("display")))?;
        let mut store = self.store.ok_or(Error::Config(ConfigError::MissingComponent("store")))?;
        let env = self
            .env
            .ok_or(Error::Config(ConfigError::MissingComponent("environment")))?;

        display.turn_on();

        let parameters = match store.load() {
            Ok(snapshot) => Parameters::from_snapshot(&snapshot),
            Err(_err) => {
                warn!("store: load failed, using configured defaults");
                display.report_storage_failure();
                Parameters::from_snapshot(&self.config.defaults)
            }
        };

        let timing = &self.config.timing;
        info!("coordinator: ready, door_open={}", self.door_open);

        Ok(Coordinator {
            input,
            actuator,
            display,
            store,
            env,
            ctx: Context::new(parameters, self.boot_time),
            settings: SettingsController::new(self.config.settings, timing.settings_idle),
            door: DoorController::new(self.door_open),
            scheduler: DaylightScheduler::new(timing.schedule_interval),
            display_sleep: timing.display_sleep,
        })
    }
}
