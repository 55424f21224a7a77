//! Time-of-day and light driven door scheduling.

use crate::config::units::{Millis, TimeOfDay};
use crate::config::Parameters;
use crate::hal::{Clock, LightSensor};

/// Door position wanted by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DoorTarget {
    /// Door should be open.
    Open,
    /// Door should be closed.
    Closed,
}

/// Daylight scheduler.
///
/// Day windows, all from [`Parameters`]:
///
/// | time of day                  | target                                   |
/// |------------------------------|------------------------------------------|
/// | before open, from max-close  | closed                                   |
/// | open .. min-close            | open once light ≥ threshold              |
/// | min-close .. max-close       | closed once dark for `close_delay`       |
///
/// A target is only reported when it differs from the last one reported, so
/// a manual toggle holds until the next window change.
#[derive(Debug, Clone)]
pub struct DaylightScheduler {
    /// Evaluation period; zero disables the scheduler.
    interval: Millis,
    last_run: Option<Millis>,
    /// Start of the current below-threshold stretch in the dusk window.
    dark_since: Option<Millis>,
    last_target: Option<DoorTarget>,
}

impl DaylightScheduler {
    /// Create a scheduler evaluated every `interval`.
    pub fn new(interval: Millis) -> Self {
        Self {
            interval,
            last_run: None,
            dark_since: None,
            last_target: None,
        }
    }

    /// Whether the scheduler runs at all.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.interval.value() > 0
    }

    /// Last target reported.
    #[inline]
    pub fn last_target(&self) -> Option<DoorTarget> {
        self.last_target
    }

    /// Sample the environment if the interval has elapsed.
    ///
    /// Returns a target only on a change of target.
    pub fn poll<E: Clock + LightSensor>(
        &mut self,
        env: &mut E,
        parameters: &Parameters,
        now: Millis,
    ) -> Option<DoorTarget> {
        if !self.is_enabled() {
            return None;
        }
        if let Some(last) = self.last_run {
            if !now.has_elapsed(last, self.interval) {
                return None;
            }
        }
        self.last_run = Some(now);

        let time = env.time_of_day();
        let light = env.light_level();
        let target = self.evaluate(time, light, parameters, now)?;

        if self.last_target == Some(target) {
            return None;
        }
        info!("schedule: target {}", target);
        self.last_target = Some(target);
        Some(target)
    }

    /// Target for the given conditions, `None` to hold the current position.
    pub fn evaluate(
        &mut self,
        time: TimeOfDay,
        light: u16,
        parameters: &Parameters,
        now: Millis,
    ) -> Option<DoorTarget> {
        let minutes = time.minutes_since_midnight();
        let open_at = parameters.open_time().minutes_since_midnight();
        let min_close = parameters.min_close_time().minutes_since_midnight();
        let max_close = parameters.max_close_time().minutes_since_midnight();
        let bright = light >= parameters.light_threshold();

        if minutes < open_at || minutes >= max_close {
            self.dark_since = None;
            return Some(DoorTarget::Closed);
        }

        if minutes < min_close {
            self.dark_since = None;
            return bright.then_some(DoorTarget::Open);
        }

        if bright {
            self.dark_since = None;
            return None;
        }

        let dark_since = *self.dark_since.get_or_insert(now);
        now.has_elapsed(dark_since, parameters.close_delay())
            .then_some(DoorTarget::Closed)
    }
}
