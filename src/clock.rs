//! Wall-clock port used to stamp mood log entries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local time of day at minute resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalTime {
    pub hour: u8,
    pub minute: u8,
}

impl LocalTime {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

pub trait Clock {
    fn local_time(&self) -> LocalTime;
}

/// Clock that always reports the same time. Handy for tests and previews.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub LocalTime);

impl Clock for FixedClock {
    fn local_time(&self) -> LocalTime {
        self.0
    }
}
