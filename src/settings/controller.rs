//! Settings-menu state machine.

use crate::config::units::Millis;
use crate::config::{IdleRevertPolicy, ParameterId, Parameters, PersistPolicy, SettingsConfig};
use crate::coordinator::Context;
use crate::input::InputEvent;

use super::mode::{ClockField, OperatingMode};

/// Side effect requested by the settings controller.
///
/// The controller only touches the [`Context`]; display, store and clock
/// calls are carried out by the coordinator from these outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsOutcome {
    /// The event means nothing in the current mode.
    Ignored,
    /// The menu was opened at the given mode.
    Entered(OperatingMode),
    /// A parameter was nudged; `changed` is false when a bound was hit.
    Edited {
        /// Edited parameter.
        parameter: ParameterId,
        /// Value actually moved.
        changed: bool,
    },
    /// The real-time clock must be shifted.
    AdjustClock {
        /// Field to shift.
        field: ClockField,
        /// Signed number of units.
        delta: i32,
    },
    /// Moved on to the given mode.
    Advanced(OperatingMode),
    /// Left the last mode; the whole parameter set should be saved.
    Exited,
    /// Timed out back to `Normal`.
    Reverted {
        /// The kept edits should be saved.
        persist: bool,
    },
}

/// Settings-menu controller.
///
/// Navigation is by click only: rotation edits the active value, a click
/// moves to the next mode and the click on the last mode closes the menu.
#[derive(Debug, Clone)]
pub struct SettingsController {
    config: SettingsConfig,
    idle_timeout: Millis,
    /// Values held when the menu was opened, for discard-on-timeout.
    entry_values: Option<Parameters>,
}

impl SettingsController {
    /// Create a controller.
    pub fn new(config: SettingsConfig, idle_timeout: Millis) -> Self {
        Self {
            config,
            idle_timeout,
            entry_values: None,
        }
    }

    /// Menu behaviour in use.
    #[inline]
    pub fn config(&self) -> &SettingsConfig {
        &self.config
    }

    /// Open the menu at its first mode.
    pub fn enter(&mut self, ctx: &mut Context, now: Millis) -> SettingsOutcome {
        let first = OperatingMode::first_settings(self.config.clock_modes);
        self.entry_values = Some(ctx.parameters);
        ctx.mode = first;
        ctx.mode_entered_at = now;
        info!("settings: enter {}", first.name());
        SettingsOutcome::Entered(first)
    }

    /// Handle an event while a settings mode is active.
    ///
    /// `VeryLongPress` is not a menu gesture; the coordinator resolves it
    /// before calling this.
    pub fn handle(&mut self, event: InputEvent, ctx: &mut Context, now: Millis) -> SettingsOutcome {
        if !ctx.mode.is_settings() {
            return SettingsOutcome::Ignored;
        }

        match event {
            InputEvent::Rotate(rotation) => self.edit(ctx, rotation.sign(), now),
            InputEvent::DoubleClick => match ctx.mode {
                OperatingMode::Edit(_) => self.edit(ctx, -1, now),
                OperatingMode::SetClock(_) | OperatingMode::Normal => SettingsOutcome::Ignored,
            },
            InputEvent::Click => self.advance(ctx, now),
            InputEvent::LongPress | InputEvent::VeryLongPress => SettingsOutcome::Ignored,
        }
    }

    /// Return to `Normal` if the active mode has been idle for too long.
    pub fn check_idle(&mut self, ctx: &mut Context, now: Millis) -> Option<SettingsOutcome> {
        if !ctx.mode.is_settings() || !now.has_elapsed(ctx.mode_entered_at, self.idle_timeout) {
            return None;
        }

        let entry_values = self.entry_values.take();
        ctx.mode = OperatingMode::Normal;

        let persist = match (self.config.persist, self.config.idle_revert) {
            // Every edit is already in the store.
            (PersistPolicy::Immediate, _) => false,
            (PersistPolicy::OnExit, IdleRevertPolicy::Persist) => true,
            (PersistPolicy::OnExit, IdleRevertPolicy::Discard) => {
                if let Some(saved) = entry_values {
                    ctx.parameters = saved;
                }
                false
            }
        };

        info!("settings: idle timeout, persist={}", persist);
        Some(SettingsOutcome::Reverted { persist })
    }

    fn edit(&mut self, ctx: &mut Context, steps: i32, now: Millis) -> SettingsOutcome {
        ctx.mode_entered_at = now;
        match ctx.mode {
            OperatingMode::Edit(parameter) => {
                let slot = ctx.parameters.get_mut(parameter);
                let changed = slot.nudge(steps);
                debug!("settings: {} = {}", parameter.name(), slot.value());
                SettingsOutcome::Edited { parameter, changed }
            }
            OperatingMode::SetClock(field) => SettingsOutcome::AdjustClock { field, delta: steps },
            OperatingMode::Normal => SettingsOutcome::Ignored,
        }
    }

    fn advance(&mut self, ctx: &mut Context, now: Millis) -> SettingsOutcome {
        let next = ctx.mode.next(self.config.clock_modes);
        ctx.mode = next;

        if next.is_settings() {
            ctx.mode_entered_at = now;
            info!("settings: -> {}", next.name());
            SettingsOutcome::Advanced(next)
        } else {
            self.entry_values = None;
            info!("settings: exit");
            SettingsOutcome::Exited
        }
    }
}
