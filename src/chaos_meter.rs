//! Chaos meter: 0..=100 in steps of 5.

pub const CHAOS_STEP: u8 = 5;
pub const CHAOS_MAX: u8 = 100;

/// Outcome of [`ChaosMeter::increment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeterChange {
    /// Already full, nothing moved.
    Unchanged,
    Raised(u8),
    /// Just reached the ceiling; the caller must run the explosion.
    Full,
}

#[derive(Debug, Default)]
pub struct ChaosMeter {
    level: u8,
}

impl ChaosMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_full(&self) -> bool {
        self.level >= CHAOS_MAX
    }

    pub fn increment(&mut self) -> MeterChange {
        if self.is_full() {
            return MeterChange::Unchanged;
        }
        self.level = (self.level + CHAOS_STEP).min(CHAOS_MAX);
        if self.is_full() {
            MeterChange::Full
        } else {
            MeterChange::Raised(self.level)
        }
    }

    pub fn reset(&mut self) {
        self.level = 0;
    }
}
