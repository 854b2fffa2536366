//! Time source for session transitions.

use jiff::Timestamp;

/// Supplies the current instant.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
