//! Type-safe time units.
//!
//! Newtype wrappers around raw millisecond counts and wall-clock time so
//! monotonic timestamps are never confused with durations or clock readings.

use core::ops::Add;

use serde::{Deserialize, Serialize};

/// Monotonic timestamp or duration in milliseconds.
///
/// The underlying counter wraps after roughly 49.7 days; all comparisons go
/// through [`Millis::elapsed_since`], which is wrap-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Create a new value.
    #[inline]
    pub const fn new(ms: u32) -> Self {
        Self(ms)
    }

    /// Create a duration from whole seconds.
    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Create a duration from whole minutes.
    #[inline]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes.saturating_mul(60_000))
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, tolerating one wrap.
    #[inline]
    pub const fn elapsed_since(self, earlier: Millis) -> Millis {
        Millis(self.0.wrapping_sub(earlier.0))
    }

    /// Whether at least `duration` has passed since `earlier`.
    #[inline]
    pub const fn has_elapsed(self, earlier: Millis, duration: Millis) -> bool {
        self.elapsed_since(earlier).0 >= duration.0
    }
}

impl Add for Millis {
    type Output = Millis;

    #[inline]
    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0.wrapping_add(rhs.0))
    }
}

impl From<u32> for Millis {
    fn from(ms: u32) -> Self {
        Self(ms)
    }
}

/// Wall-clock time of day as kept by the real-time clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    #[serde(default)]
    pub second: u8,
}

impl TimeOfDay {
    /// Create a time of day, wrapping out-of-range fields into range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Time of day at `hour:minute:00`.
    pub const fn hm(hour: u8, minute: u8) -> Self {
        Self::new(hour, minute, 0)
    }

    /// Minutes since midnight, ignoring seconds.
    #[inline]
    pub const fn minutes_since_midnight(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Shift the hour by `delta`, wrapping around midnight.
    pub fn with_hour_shifted(self, delta: i32) -> Self {
        let hour = (i32::from(self.hour) + delta).rem_euclid(24) as u8;
        Self { hour, ..self }
    }

    /// Shift the minute by `delta` within the same hour and zero the seconds.
    pub fn with_minute_shifted(self, delta: i32) -> Self {
        let minute = (i32::from(self.minute) + delta).rem_euclid(60) as u8;
        Self {
            minute,
            second: 0,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_across_wrap() {
        let earlier = Millis(u32::MAX - 9);
        let now = Millis(10);
        assert_eq!(now.elapsed_since(earlier), Millis(20));
        assert!(now.has_elapsed(earlier, Millis(20)));
        assert!(!now.has_elapsed(earlier, Millis(21)));
    }

    #[test]
    fn test_duration_constructors() {
        assert_eq!(Millis::from_secs(15), Millis(15_000));
        assert_eq!(Millis::from_minutes(10), Millis(600_000));
    }

    #[test]
    fn test_hour_wraps_both_ways() {
        let t = TimeOfDay::new(23, 30, 12);
        assert_eq!(t.with_hour_shifted(1).hour, 0);
        assert_eq!(TimeOfDay::hm(0, 0).with_hour_shifted(-1).hour, 23);
        assert_eq!(t.with_hour_shifted(1).second, 12);
    }

    #[test]
    fn test_minute_shift_zeroes_seconds() {
        let t = TimeOfDay::new(6, 59, 42).with_minute_shifted(1);
        assert_eq!(t, TimeOfDay::new(6, 0, 0));
        assert_eq!(TimeOfDay::hm(6, 0).with_minute_shifted(-1).minute, 59);
    }
}
