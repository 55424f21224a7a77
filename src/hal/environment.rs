//! Clock, light sensor and encoder counter interfaces.

use core::sync::atomic::{AtomicI32, Ordering};

use crate::config::units::TimeOfDay;

/// Highest reading of a 10-bit light sensor.
pub const MAX_LIGHT_LEVEL: u16 = 1023;

/// Real-time clock.
pub trait Clock {
    /// Current wall-clock time.
    fn time_of_day(&mut self) -> TimeOfDay;

    /// Adjust the wall-clock time.
    fn set_time_of_day(&mut self, time: TimeOfDay);
}

/// Ambient light sensor.
pub trait LightSensor {
    /// Light level in `0..=MAX_LIGHT_LEVEL`.
    fn light_level(&mut self) -> u16;
}

/// Raw rotary position, in quadrature detents.
///
/// The counter only needs to be monotonic with rotation; it may be updated
/// from an interrupt, in which case it must be read atomically.
pub trait DetentSource {
    /// Current raw detent count.
    fn detents(&mut self) -> i32;
}

impl DetentSource for &AtomicI32 {
    fn detents(&mut self) -> i32 {
        self.load(Ordering::Relaxed)
    }
}

/// Detent counter read through a closure, e.g. over a PAC register.
#[derive(Debug, Clone, Copy)]
pub struct DetentFn<F>(pub F);

impl<F: FnMut() -> i32> DetentSource for DetentFn<F> {
    fn detents(&mut self) -> i32 {
        (self.0)()
    }
}

impl<T: DetentSource + ?Sized> DetentSource for &mut T {
    fn detents(&mut self) -> i32 {
        (**self).detents()
    }
}
