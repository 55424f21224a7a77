//! Schedule module for coop-door.
//!
//! Opens the door on daylight inside the configured morning window and
//! closes it at dusk or at the latest closing time. The scheduler decides a
//! target position only; the door controller carries the movement out.

mod daylight;

pub use daylight::{DaylightScheduler, DoorTarget};
