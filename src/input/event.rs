//! Classified input events and the gesture-source capability.

use crate::config::units::Millis;

/// Maximum events collected in one tick (one per channel, with headroom).
pub const MAX_EVENTS_PER_TICK: usize = 4;

/// Events collected during one tick, in channel order.
pub type Events = heapless::Vec<InputEvent, MAX_EVENTS_PER_TICK>;

/// Direction of one logical encoder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// One step clockwise (+1).
    Clockwise,
    /// One step counter-clockwise (-1).
    CounterClockwise,
}

impl Rotation {
    /// `+1` or `-1`.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => -1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

/// One completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Short press and release, not followed by a second one.
    Click,
    /// Two short presses within the double-click window.
    DoubleClick,
    /// Held past the long-press threshold.
    LongPress,
    /// Held past the very-long-press threshold.
    VeryLongPress,
    /// One logical encoder step.
    Rotate(Rotation),
}

/// Something that turns raw samples into [`InputEvent`]s.
///
/// Implementations are polled once per tick and report at most one
/// completed gesture per poll; they never fail, ambiguous input simply
/// produces nothing.
pub trait GestureSource {
    /// Sample the channel and report a completed gesture, if any.
    fn poll(&mut self, now: Millis) -> Option<InputEvent>;

    /// Sample the channel and append its gesture to `events`.
    ///
    /// A gesture that finds `events` full is dropped and logged.
    fn poll_into(&mut self, now: Millis, events: &mut Events) {
        if let Some(event) = self.poll(now) {
            if events.push(event).is_err() {
                warn!("input: event buffer full, dropping {}", event);
            }
        }
    }

    /// Compose with a second source; both are sampled every tick.
    fn chain<B: GestureSource>(self, other: B) -> Chain<Self, B>
    where
        Self: Sized,
    {
        Chain::new(self, other)
    }
}

impl<T: GestureSource + ?Sized> GestureSource for &mut T {
    fn poll(&mut self, now: Millis) -> Option<InputEvent> {
        (**self).poll(now)
    }

    fn poll_into(&mut self, now: Millis, events: &mut Events) {
        (**self).poll_into(now, events)
    }
}

/// Two gesture sources sampled together.
///
/// `poll_into` samples both sources every tick. `poll` returns the first
/// source's gesture when there is one and only samples the second otherwise.
///
/// Chains nest, but a tick holds at most [`MAX_EVENTS_PER_TICK`] events;
/// sources past that limit lose their gesture for the tick.
#[derive(Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    /// Compose two sources.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The first source.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The second source.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Mutable access to both sources.
    pub fn parts_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.first, &mut self.second)
    }

    /// Split back into the two sources.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: GestureSource, B: GestureSource> GestureSource for Chain<A, B> {
    fn poll(&mut self, now: Millis) -> Option<InputEvent> {
        self.first.poll(now).or_else(|| self.second.poll(now))
    }

    fn poll_into(&mut self, now: Millis, events: &mut Events) {
        self.first.poll_into(now, events);
        self.second.poll_into(now, events);
    }
}
