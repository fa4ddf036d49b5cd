//! Floating particles (theme glyphs and chaos quotes).
//!
//! A [`ParticleSpawner`] emits one particle immediately on `start` and then
//! one per interval tick until stopped. Particles are fire-and-forget: the
//! page removes each one when its CSS animation ends and reports back via
//! [`ParticleField::finish`]. The field only remembers live ids so a reset
//! can sweep everything at once.

use std::collections::BTreeSet;

use rand::{Rng, RngCore};

use crate::app::Ctx;
use crate::effect::Effect;
use crate::scheduler::{Scheduler, TimerHandle, Wake};

pub const CHAOS_QUOTES: [&str; 5] = [
    "EMBRACE THE CHAOS",
    "CHAOS IS HERE",
    "EVERYTHING IS CHAOTIC!",
    "THE CHAOS IS COMING",
    "CHAOS.",
];

pub const QUOTE_COLORS: [&str; 5] = [
    "rgba(255, 68, 102, 0.5)",
    "rgba(204, 68, 255, 0.4)",
    "rgba(255, 136, 0, 0.4)",
    "rgba(255, 0, 85, 0.4)",
    "rgba(150, 50, 255, 0.45)",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum ParticleKind {
    Glyph,
    Quote,
}

impl ParticleKind {
    /// CSS class carrying the float animation.
    pub fn class(self) -> &'static str {
        match self {
            ParticleKind::Glyph => "floating-emoji",
            ParticleKind::Quote => "floating-quote",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Particle {
    pub id: u64,
    pub kind: ParticleKind,
    pub text: &'static str,
    /// Horizontal position, percent of viewport width.
    pub left_pct: f64,
    /// Vertical position, percent of viewport height.
    pub top_pct: f64,
    pub size_rem: f64,
    /// Only quotes are tinted.
    pub color: Option<&'static str>,
}

/// Ids of particles currently on the page.
#[derive(Debug, Default)]
pub struct ParticleField {
    next_id: u64,
    live: BTreeSet<u64>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: u64) -> bool {
        self.live.contains(&id)
    }

    /// Build a randomly placed particle and mark it live.
    pub fn emit(&mut self, kind: ParticleKind, glyph: &'static str, rng: &mut dyn RngCore) -> Particle {
        self.next_id += 1;
        let id = self.next_id;
        self.live.insert(id);
        match kind {
            ParticleKind::Glyph => Particle {
                id,
                kind,
                text: glyph,
                left_pct: rng.gen_range(5.0..95.0),
                top_pct: rng.gen_range(10.0..90.0),
                size_rem: rng.gen_range(1.5..3.0),
                color: None,
            },
            ParticleKind::Quote => Particle {
                id,
                kind,
                text: CHAOS_QUOTES[rng.gen_range(0..CHAOS_QUOTES.len())],
                left_pct: rng.gen_range(5.0..85.0),
                top_pct: rng.gen_range(5.0..85.0),
                size_rem: rng.gen_range(0.75..1.55),
                color: Some(QUOTE_COLORS[rng.gen_range(0..QUOTE_COLORS.len())]),
            },
        }
    }

    /// A particle's animation ended. Returns false for ids already gone.
    pub fn finish(&mut self, id: u64) -> bool {
        self.live.remove(&id)
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }
}

/// Repeating emitter for one particle kind.
#[derive(Debug)]
pub struct ParticleSpawner {
    kind: ParticleKind,
    glyph: &'static str,
    timer: Option<TimerHandle>,
}

impl ParticleSpawner {
    pub fn new(kind: ParticleKind) -> Self {
        Self {
            kind,
            glyph: "",
            timer: None,
        }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Stop any previous run, emit one particle now, then one every
    /// `interval_ms`. `glyph` is the text of glyph particles; quote spawners
    /// pick their own text and ignore it.
    pub(crate) fn start(&mut self, ctx: &mut Ctx<'_>, field: &mut ParticleField, interval_ms: u32, glyph: &'static str) {
        self.stop(ctx.scheduler);
        self.glyph = glyph;
        self.emit(ctx, field);
        self.timer = Some(ctx.scheduler.set_interval(interval_ms, Wake::Spawn(self.kind)));
        log::debug!("{:?} spawner started every {}ms", self.kind, interval_ms);
    }

    /// Interval tick. Late ticks after `stop` are dropped.
    pub(crate) fn tick(&mut self, ctx: &mut Ctx<'_>, field: &mut ParticleField) {
        if self.is_running() {
            self.emit(ctx, field);
        }
    }

    pub fn stop(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.timer.take() {
            scheduler.clear(handle);
            log::debug!("{:?} spawner stopped", self.kind);
        }
    }

    fn emit(&mut self, ctx: &mut Ctx<'_>, field: &mut ParticleField) {
        let particle = field.emit(self.kind, self.glyph, ctx.rng);
        ctx.effects.push(Effect::SpawnParticle(particle));
    }
}
