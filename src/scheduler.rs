//! Timer port.
//!
//! The core never waits on its own. It registers one-shot timeouts and
//! repeating intervals with a [`Scheduler`], and the host later hands the
//! associated [`Wake`] back to [`crate::App::on_wake`]. The browser host uses
//! `setTimeout` / `setInterval`; tests use [`VirtualScheduler`], which only
//! moves when told to.

use crate::particles::ParticleKind;

/// Opaque id of a registered timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// What a timer means when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wake {
    /// Name screen fade finished.
    NameFaded,
    /// Greeting has been on screen long enough.
    GreetingElapsed,
    /// Greeting fade finished.
    GreetingFaded,
    /// Emit the next particle of this kind.
    Spawn(ParticleKind),
}

pub trait Scheduler {
    /// Fire `wake` once after `delay_ms`.
    fn set_timeout(&mut self, delay_ms: u32, wake: Wake) -> TimerHandle;
    /// Fire `wake` every `interval_ms` until cleared.
    fn set_interval(&mut self, interval_ms: u32, wake: Wake) -> TimerHandle;
    /// Cancel a timer. Unknown or already fired handles are ignored.
    fn clear(&mut self, handle: TimerHandle);
}

#[derive(Debug)]
struct VirtualTimer {
    handle: TimerHandle,
    due_ms: u64,
    every_ms: Option<u64>,
    wake: Wake,
}

/// Deterministic scheduler driven by virtual milliseconds.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now_ms: u64,
    next_id: u64,
    timers: Vec<VirtualTimer>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers (one-shot and repeating) still registered.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Number of registered timers that will deliver `wake`.
    pub fn registered(&self, wake: Wake) -> usize {
        self.timers.iter().filter(|t| t.wake == wake).count()
    }

    /// Remove and return the earliest timer due at or before `until_ms`,
    /// moving virtual time to its due point. Repeating timers are re-armed.
    /// Ties fire in registration order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Wake> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.handle))
            .map(|(i, _)| i)?;
        let due = self.timers[idx].due_ms;
        self.now_ms = self.now_ms.max(due);
        let wake = self.timers[idx].wake;
        match self.timers[idx].every_ms {
            Some(every) => self.timers[idx].due_ms = due + every,
            None => {
                self.timers.remove(idx);
            }
        }
        Some(wake)
    }

    /// Move virtual time forward without firing anything. Never moves backwards.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn register(&mut self, delay_ms: u32, every_ms: Option<u64>, wake: Wake) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push(VirtualTimer {
            handle,
            due_ms: self.now_ms + u64::from(delay_ms),
            every_ms,
            wake,
        });
        handle
    }
}

impl Scheduler for VirtualScheduler {
    fn set_timeout(&mut self, delay_ms: u32, wake: Wake) -> TimerHandle {
        self.register(delay_ms, None, wake)
    }

    fn set_interval(&mut self, interval_ms: u32, wake: Wake) -> TimerHandle {
        // A zero interval would never let virtual time advance.
        let every = u64::from(interval_ms.max(1));
        self.register(interval_ms.max(1), Some(every), wake)
    }

    fn clear(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
