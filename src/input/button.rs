//! Push-button gesture classification.
//!
//! Samples one `InputPin` per tick and turns its debounced level into
//! clicks, double-clicks, long presses and very long presses.

use embedded_hal::digital::InputPin;

use crate::config::units::Millis;
use crate::config::ButtonTiming;

use super::event::{GestureSource, InputEvent};

/// Gesture classifier for a single push-button.
///
/// Generic over:
/// - `P`: button pin type (must implement `InputPin`)
///
/// Timing rules:
/// - level changes closer than the debounce window to the previous accepted
///   change are ignored;
/// - `LongPress` fires once when a hold reaches the long-press threshold,
///   `VeryLongPress` once when it reaches the very-long threshold;
/// - a short press is only reported after the double-click window has passed
///   without a second press, so a click and a double-click are never both
///   reported for the same interaction.
pub struct ButtonGestures<P>
where
    P: InputPin,
{
    /// Button pin.
    pin: P,

    /// Thresholds and wiring.
    timing: ButtonTiming,

    /// Debounced level.
    pressed: bool,

    /// Time of the last accepted transition.
    last_change: Option<Millis>,

    /// Start of the current press.
    pressed_at: Millis,

    /// `LongPress` already reported for this press.
    long_fired: bool,

    /// `VeryLongPress` already reported for this press.
    very_long_fired: bool,

    /// Release time of a short press still waiting for a possible second one.
    pending_click: Option<Millis>,

    /// The current press began inside the double-click window.
    second_press: bool,
}

impl<P> ButtonGestures<P>
where
    P: InputPin,
{
    /// Create a classifier; the button is assumed released.
    pub fn new(pin: P, timing: ButtonTiming) -> Self {
        Self {
            pin,
            timing,
            pressed: false,
            last_change: None,
            pressed_at: Millis::ZERO,
            long_fired: false,
            very_long_fired: false,
            pending_click: None,
            second_press: false,
        }
    }

    /// Debounced pressed state.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Timing in use.
    #[inline]
    pub fn timing(&self) -> &ButtonTiming {
        &self.timing
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }

    /// Raw pressed level; a failed read keeps the debounced level.
    fn sample(&mut self) -> bool {
        let level = if self.timing.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };
        level.unwrap_or(self.pressed)
    }

    fn debounce_elapsed(&self, now: Millis) -> bool {
        self.last_change
            .map_or(true, |t| now.has_elapsed(t, self.timing.debounce))
    }

    fn double_click_enabled(&self) -> bool {
        self.timing.double_click.value() > 0
    }

    fn on_press(&mut self, now: Millis) -> Option<InputEvent> {
        self.pressed_at = now;
        self.long_fired = false;
        self.very_long_fired = false;
        self.second_press = false;

        match self.pending_click {
            Some(released) if !now.has_elapsed(released, self.timing.double_click) => {
                self.second_press = true;
                None
            }
            Some(_) => {
                // Window ran out between two samples: the first click stands alone.
                self.pending_click = None;
                Some(InputEvent::Click)
            }
            None => None,
        }
    }

    fn on_release(&mut self, now: Millis) -> Option<InputEvent> {
        let held = now.elapsed_since(self.pressed_at);
        let second_press = core::mem::take(&mut self.second_press);

        if self.long_fired || self.very_long_fired {
            return None;
        }

        if held >= self.timing.long_press {
            // Threshold crossed between two samples.
            self.pending_click = None;
            return Some(InputEvent::LongPress);
        }

        if second_press {
            self.pending_click = None;
            return Some(InputEvent::DoubleClick);
        }

        if !self.double_click_enabled() {
            return Some(InputEvent::Click);
        }

        self.pending_click = Some(now);
        None
    }

    fn on_hold(&mut self, now: Millis) -> Option<InputEvent> {
        let held = now.elapsed_since(self.pressed_at);

        if !self.long_fired && held >= self.timing.long_press {
            self.long_fired = true;
            self.pending_click = None;
            self.second_press = false;
            return Some(InputEvent::LongPress);
        }

        if !self.very_long_fired && held >= self.timing.very_long_press {
            self.very_long_fired = true;
            return Some(InputEvent::VeryLongPress);
        }

        None
    }

    fn expire_pending(&mut self, now: Millis) -> Option<InputEvent> {
        match self.pending_click {
            Some(released) if now.has_elapsed(released, self.timing.double_click) => {
                self.pending_click = None;
                Some(InputEvent::Click)
            }
            _ => None,
        }
    }
}

impl<P> GestureSource for ButtonGestures<P>
where
    P: InputPin,
{
    fn poll(&mut self, now: Millis) -> Option<InputEvent> {
        let raw = self.sample();

        let event = if raw != self.pressed && self.debounce_elapsed(now) {
            self.pressed = raw;
            self.last_change = Some(now);
            trace!("button level -> {}", raw);
            if raw {
                self.on_press(now)
            } else {
                self.on_release(now)
            }
        } else if self.pressed {
            self.on_hold(now)
        } else {
            self.expire_pending(now)
        };

        if let Some(ref e) = event {
            debug!("button gesture: {}", e);
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Pin whose level is set directly by the test.
    struct Level(bool);

    impl embedded_hal::digital::ErrorType for Level {
        type Error = Infallible;
    }

    impl InputPin for Level {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    fn button() -> ButtonGestures<Level> {
        // Active-low: level `true` (high) means released.
        ButtonGestures::new(Level(true), ButtonTiming::default())
    }

    fn set(b: &mut ButtonGestures<Level>, pressed: bool) {
        b.pin.0 = !pressed;
    }

    /// Poll every 10 ms over `[from, to)`, collecting events.
    fn run(b: &mut ButtonGestures<Level>, from: u32, to: u32) -> heapless::Vec<InputEvent, 8> {
        let mut out = heapless::Vec::new();
        let mut t = from;
        while t < to {
            if let Some(e) = b.poll(Millis(t)) {
                out.push(e).unwrap();
            }
            t += 10;
        }
        out
    }

    #[test]
    fn test_single_click_after_window() {
        let mut b = button();
        set(&mut b, true);
        assert!(run(&mut b, 0, 100).is_empty());
        set(&mut b, false);
        // Nothing until the 400 ms window after release elapses.
        assert!(run(&mut b, 100, 490).is_empty());
        assert_eq!(run(&mut b, 490, 520).as_slice(), &[InputEvent::Click]);
    }

    #[test]
    fn test_double_click() {
        let mut b = button();
        set(&mut b, true);
        run(&mut b, 0, 100);
        set(&mut b, false);
        run(&mut b, 100, 200);
        set(&mut b, true);
        run(&mut b, 200, 300);
        set(&mut b, false);
        assert_eq!(run(&mut b, 300, 310).as_slice(), &[InputEvent::DoubleClick]);
        // No trailing click.
        assert!(run(&mut b, 310, 2000).is_empty());
    }

    #[test]
    fn test_long_then_very_long_fire_once() {
        let mut b = button();
        set(&mut b, true);
        let held = run(&mut b, 0, 6000);
        assert_eq!(
            held.as_slice(),
            &[InputEvent::LongPress, InputEvent::VeryLongPress]
        );
        set(&mut b, false);
        assert!(run(&mut b, 6000, 7000).is_empty());
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut b = button();
        set(&mut b, true);
        assert_eq!(b.poll(Millis(0)), None);
        assert!(b.is_pressed());
        // Contact bounce 20 ms later: too soon after the accepted edge.
        set(&mut b, false);
        assert_eq!(b.poll(Millis(20)), None);
        set(&mut b, true);
        assert_eq!(b.poll(Millis(30)), None);
        assert!(b.is_pressed());
    }

    #[test]
    fn test_click_without_double_click_window() {
        let mut b = ButtonGestures::new(Level(true), ButtonTiming::default().without_double_click());
        set(&mut b, true);
        run(&mut b, 0, 100);
        set(&mut b, false);
        assert_eq!(b.poll(Millis(100)), Some(InputEvent::Click));
    }

    #[test]
    fn test_long_press_on_late_release() {
        let mut b = button();
        set(&mut b, true);
        assert_eq!(b.poll(Millis(0)), None);
        set(&mut b, false);
        // First sample after the hold lands past the long-press threshold.
        assert_eq!(b.poll(Millis(1_600)), Some(InputEvent::LongPress));
    }

    #[test]
    fn test_late_second_press_releases_first_click() {
        let mut b = button();
        set(&mut b, true);
        b.poll(Millis(0));
        set(&mut b, false);
        b.poll(Millis(100));
        set(&mut b, true);
        // Sampled only after the window closed.
        assert_eq!(b.poll(Millis(600)), Some(InputEvent::Click));
        set(&mut b, false);
        assert_eq!(b.poll(Millis(700)), None);
        assert_eq!(b.poll(Millis(1_100)), Some(InputEvent::Click));
    }
}
