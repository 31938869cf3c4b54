//! Date classification relative to "now"
//!
//! All functions here are pure; "now" is always passed in from a [`Clock`].

mod calendar;
mod clock;
mod priority;

pub use calendar::*;
pub use clock::{Clock, FixedClock, SystemClock};
pub use priority::{classify, Priority};
