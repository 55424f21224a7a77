//! Input module for coop-door.
//!
//! Turns raw button levels and encoder counts into discrete gestures. The
//! push-button and the rotary encoder are two [`GestureSource`]s; a board
//! with both composes them with [`GestureSource::chain`].

mod button;
mod encoder;
mod event;

pub use button::ButtonGestures;
pub use encoder::EncoderGestures;
pub use event::{Chain, Events, GestureSource, InputEvent, Rotation, MAX_EVENTS_PER_TICK};
