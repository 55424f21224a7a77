//! Operator-editable parameters and their bounds.
//!
//! Every settings-menu entry edits one [`EditableParameter`]. Values are
//! always clamped into `[min, max]`; an edit is never rejected.

use serde::{Deserialize, Serialize};

use super::units::{Millis, TimeOfDay};
use crate::hal::MAX_LIGHT_LEVEL;

/// Number of editable parameters.
pub const PARAMETER_COUNT: usize = 10;

/// Identifies one editable parameter, in settings-menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterId {
    /// Hour of the earliest opening.
    OpenHour,
    /// Minute of the earliest opening.
    OpenMinute,
    /// Hour from which dusk may close the door.
    MinCloseHour,
    /// Minute from which dusk may close the door.
    MinCloseMinute,
    /// Hour at which the door closes regardless of light.
    MaxCloseHour,
    /// Minute at which the door closes regardless of light.
    MaxCloseMinute,
    /// Light level separating day from night (0-1023).
    LightThreshold,
    /// Minutes of sustained darkness before closing.
    CloseDelay,
    /// Seconds allowed for an opening movement.
    OpenTimeout,
    /// Seconds allowed for a closing movement.
    CloseTimeout,
}

/// Inclusive range and edit step of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest allowed value.
    pub min: i32,
    /// Largest allowed value.
    pub max: i32,
    /// Change applied per encoder step.
    pub step: i32,
}

impl ParameterId {
    /// All parameters in menu order.
    pub const ALL: [ParameterId; PARAMETER_COUNT] = [
        ParameterId::OpenHour,
        ParameterId::OpenMinute,
        ParameterId::MinCloseHour,
        ParameterId::MinCloseMinute,
        ParameterId::MaxCloseHour,
        ParameterId::MaxCloseMinute,
        ParameterId::LightThreshold,
        ParameterId::CloseDelay,
        ParameterId::OpenTimeout,
        ParameterId::CloseTimeout,
    ];

    /// Position in menu order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The parameter following this one in menu order, if any.
    pub fn next(self) -> Option<ParameterId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The first parameter of the menu.
    pub const fn first() -> ParameterId {
        ParameterId::OpenHour
    }

    /// Stable snake_case name, also used as the TOML key.
    pub const fn name(self) -> &'static str {
        match self {
            ParameterId::OpenHour => "open_hour",
            ParameterId::OpenMinute => "open_minute",
            ParameterId::MinCloseHour => "min_close_hour",
            ParameterId::MinCloseMinute => "min_close_minute",
            ParameterId::MaxCloseHour => "max_close_hour",
            ParameterId::MaxCloseMinute => "max_close_minute",
            ParameterId::LightThreshold => "light_threshold",
            ParameterId::CloseDelay => "close_delay_minutes",
            ParameterId::OpenTimeout => "open_timeout_secs",
            ParameterId::CloseTimeout => "close_timeout_secs",
        }
    }

    /// Range and step.
    pub const fn bounds(self) -> Bounds {
        let (min, max, step) = match self {
            ParameterId::OpenHour | ParameterId::MinCloseHour | ParameterId::MaxCloseHour => {
                (0, 23, 1)
            }
            ParameterId::OpenMinute
            | ParameterId::MinCloseMinute
            | ParameterId::MaxCloseMinute => (0, 59, 1),
            ParameterId::LightThreshold => (0, MAX_LIGHT_LEVEL as i32, 5),
            ParameterId::CloseDelay => (10, 30, 1),
            ParameterId::OpenTimeout | ParameterId::CloseTimeout => (5, 60, 1),
        };
        Bounds { min, max, step }
    }

    /// Factory default.
    pub const fn default_value(self) -> i32 {
        match self {
            ParameterId::OpenHour => 7,
            ParameterId::MinCloseHour => 17,
            ParameterId::MaxCloseHour => 22,
            ParameterId::OpenMinute
            | ParameterId::MinCloseMinute
            | ParameterId::MaxCloseMinute => 0,
            ParameterId::LightThreshold => 300,
            ParameterId::CloseDelay => 15,
            ParameterId::OpenTimeout | ParameterId::CloseTimeout => 15,
        }
    }
}

/// A bounded integer edited from the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditableParameter {
    value: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl EditableParameter {
    /// Create a parameter; `value` is clamped into range.
    pub fn new(value: i32, min: i32, max: i32, step: i32) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    /// Create a parameter with the bounds of `id`.
    pub fn for_id(id: ParameterId, value: i32) -> Self {
        let b = id.bounds();
        Self::new(value, b.min, b.max, b.step)
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Edit step.
    #[inline]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Set the value, clamping into range.
    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Move by `steps` edit steps (sign gives direction), clamping into range.
    ///
    /// Returns `true` if the value changed.
    pub fn nudge(&mut self, steps: i32) -> bool {
        let before = self.value;
        let target = before.saturating_add(steps.saturating_mul(self.step));
        self.set(target);
        self.value != before
    }
}

/// Plain record of all parameter values, as exchanged with the store.
///
/// Missing fields take their factory default when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct ParameterSnapshot {
    /// See [`ParameterId::OpenHour`].
    pub open_hour: i32,
    /// See [`ParameterId::OpenMinute`].
    pub open_minute: i32,
    /// See [`ParameterId::MinCloseHour`].
    pub min_close_hour: i32,
    /// See [`ParameterId::MinCloseMinute`].
    pub min_close_minute: i32,
    /// See [`ParameterId::MaxCloseHour`].
    pub max_close_hour: i32,
    /// See [`ParameterId::MaxCloseMinute`].
    pub max_close_minute: i32,
    /// See [`ParameterId::LightThreshold`].
    pub light_threshold: i32,
    /// See [`ParameterId::CloseDelay`].
    pub close_delay_minutes: i32,
    /// See [`ParameterId::OpenTimeout`].
    pub open_timeout_secs: i32,
    /// See [`ParameterId::CloseTimeout`].
    pub close_timeout_secs: i32,
}

impl ParameterSnapshot {
    /// Value of one field.
    pub fn get(&self, id: ParameterId) -> i32 {
        match id {
            ParameterId::OpenHour => self.open_hour,
            ParameterId::OpenMinute => self.open_minute,
            ParameterId::MinCloseHour => self.min_close_hour,
            ParameterId::MinCloseMinute => self.min_close_minute,
            ParameterId::MaxCloseHour => self.max_close_hour,
            ParameterId::MaxCloseMinute => self.max_close_minute,
            ParameterId::LightThreshold => self.light_threshold,
            ParameterId::CloseDelay => self.close_delay_minutes,
            ParameterId::OpenTimeout => self.open_timeout_secs,
            ParameterId::CloseTimeout => self.close_timeout_secs,
        }
    }

    /// Overwrite one field (no clamping; see [`Parameters::from_snapshot`]).
    pub fn set(&mut self, id: ParameterId, value: i32) {
        let slot = match id {
            ParameterId::OpenHour => &mut self.open_hour,
            ParameterId::OpenMinute => &mut self.open_minute,
            ParameterId::MinCloseHour => &mut self.min_close_hour,
            ParameterId::MinCloseMinute => &mut self.min_close_minute,
            ParameterId::MaxCloseHour => &mut self.max_close_hour,
            ParameterId::MaxCloseMinute => &mut self.max_close_minute,
            ParameterId::LightThreshold => &mut self.light_threshold,
            ParameterId::CloseDelay => &mut self.close_delay_minutes,
            ParameterId::OpenTimeout => &mut self.open_timeout_secs,
            ParameterId::CloseTimeout => &mut self.close_timeout_secs,
        };
        *slot = value;
    }
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        let mut snapshot = Self {
            open_hour: 0,
            open_minute: 0,
            min_close_hour: 0,
            min_close_minute: 0,
            max_close_hour: 0,
            max_close_minute: 0,
            light_threshold: 0,
            close_delay_minutes: 0,
            open_timeout_secs: 0,
            close_timeout_secs: 0,
        };
        for id in ParameterId::ALL {
            snapshot.set(id, id.default_value());
        }
        snapshot
    }
}

/// Live parameter set owned by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    slots: [EditableParameter; PARAMETER_COUNT],
}

impl Parameters {
    /// Build from a snapshot, clamping every value into its bounds.
    pub fn from_snapshot(snapshot: &ParameterSnapshot) -> Self {
        let mut slots = [EditableParameter::new(0, 0, 0, 1); PARAMETER_COUNT];
        for id in ParameterId::ALL {
            slots[id.index()] = EditableParameter::for_id(id, snapshot.get(id));
        }
        Self { slots }
    }

    /// Export the current values.
    pub fn snapshot(&self) -> ParameterSnapshot {
        let mut snapshot = ParameterSnapshot::default();
        for id in ParameterId::ALL {
            snapshot.set(id, self.value(id));
        }
        snapshot
    }

    /// Access one parameter.
    #[inline]
    pub fn get(&self, id: ParameterId) -> &EditableParameter {
        &self.slots[id.index()]
    }

    /// Mutable access to one parameter.
    #[inline]
    pub fn get_mut(&mut self, id: ParameterId) -> &mut EditableParameter {
        &mut self.slots[id.index()]
    }

    /// Current value of one parameter.
    #[inline]
    pub fn value(&self, id: ParameterId) -> i32 {
        self.get(id).value()
    }

    /// Earliest opening time.
    pub fn open_time(&self) -> TimeOfDay {
        self.time_of(ParameterId::OpenHour, ParameterId::OpenMinute)
    }

    /// Time from which dusk may close the door.
    pub fn min_close_time(&self) -> TimeOfDay {
        self.time_of(ParameterId::MinCloseHour, ParameterId::MinCloseMinute)
    }

    /// Time at which the door closes regardless of light.
    pub fn max_close_time(&self) -> TimeOfDay {
        self.time_of(ParameterId::MaxCloseHour, ParameterId::MaxCloseMinute)
    }

    /// Day/night light threshold.
    pub fn light_threshold(&self) -> u16 {
        self.value(ParameterId::LightThreshold) as u16
    }

    /// Sustained darkness required before an automatic close.
    pub fn close_delay(&self) -> Millis {
        Millis::from_minutes(self.value(ParameterId::CloseDelay) as u32)
    }

    /// Time allowed for an opening movement.
    pub fn open_timeout(&self) -> Millis {
        Millis::from_secs(self.value(ParameterId::OpenTimeout) as u32)
    }

    /// Time allowed for a closing movement.
    pub fn close_timeout(&self) -> Millis {
        Millis::from_secs(self.value(ParameterId::CloseTimeout) as u32)
    }

    // Bounds guarantee both values fit in a u8.
    fn time_of(&self, hour: ParameterId, minute: ParameterId) -> TimeOfDay {
        TimeOfDay::hm(self.value(hour) as u8, self.value(minute) as u8)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::from_snapshot(&ParameterSnapshot::default())
    }
}
