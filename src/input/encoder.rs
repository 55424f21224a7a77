//! Rotary encoder gesture classification.

use crate::config::units::Millis;
use crate::config::EncoderConfig;
use crate::hal::DetentSource;

use super::event::{GestureSource, InputEvent, Rotation};

/// Turns a raw detent counter into one `Rotate` event per logical click.
///
/// The quadrature decoder produces several raw detents per mechanical click;
/// the counter is divided by `divisor` (Euclidean division, so steps are the
/// same size on both sides of zero). When a fast turn crosses several logical
/// steps between two polls, the missing events are reported one per poll.
#[derive(Debug)]
pub struct EncoderGestures<D>
where
    D: DetentSource,
{
    source: D,
    divisor: i32,
    invert: bool,
    /// Logical position already reported.
    position: i32,
}

impl<D> EncoderGestures<D>
where
    D: DetentSource,
{
    /// Create a classifier, taking the current counter value as the origin.
    pub fn new(mut source: D, config: &EncoderConfig) -> Self {
        let divisor = config.divisor.max(1);
        let position = source.detents().div_euclid(divisor);
        Self {
            source,
            divisor,
            invert: config.invert,
            position,
        }
    }

    /// Logical position already reported.
    #[inline]
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Give the counter back.
    pub fn release(self) -> D {
        self.source
    }
}

impl<D> GestureSource for EncoderGestures<D>
where
    D: DetentSource,
{
    fn poll(&mut self, _now: Millis) -> Option<InputEvent> {
        let target = self.source.detents().div_euclid(self.divisor);
        let rotation = match target.wrapping_sub(self.position).signum() {
            1 => Rotation::Clockwise,
            -1 => Rotation::CounterClockwise,
            _ => return None,
        };
        self.position = self.position.wrapping_add(rotation.sign());

        let rotation = if self.invert { rotation.reversed() } else { rotation };
        debug!("encoder step: {}", rotation);
        Some(InputEvent::Rotate(rotation))
    }
}
