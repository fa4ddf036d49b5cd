//! Mood Toy core crate.
//!
//! A single-page toy: enter a name, get greeted, then pick a mood. Each mood
//! re-themes the page and floats emoji (and, for chaos, shouty quotes) across
//! it; every pick is logged, and enough chaos picks fill the chaos meter until
//! the page "explodes" and offers a reset.
//!
//! The state machine (`App` and the controllers under it) is plain Rust with
//! injected scheduler / clock / RNG ports, so it runs and tests natively. The
//! `web` module is the thin wasm host that binds it to the DOM.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod chaos_meter;
pub mod clock;
pub mod effect;
pub mod mood_log;
pub mod particles;
pub mod scheduler;
pub mod screen_flow;
pub mod theme;
pub mod theme_controller;
mod web;

pub use app::{App, Snapshot};
pub use chaos_meter::{CHAOS_MAX, CHAOS_STEP, ChaosMeter, MeterChange};
pub use clock::{Clock, FixedClock, LocalTime};
pub use effect::{Effect, Screen};
pub use mood_log::{MoodLog, MoodLogEntry};
pub use particles::{Particle, ParticleKind};
pub use scheduler::{Scheduler, TimerHandle, VirtualScheduler, Wake};
pub use screen_flow::{FADE_MS, GREETING_DWELL_MS, Submission};
pub use theme::{THEMES, Theme, ThemeProfile};
pub use web::start_app;
#[cfg(feature = "serde_json")]
pub use web::snapshot_json;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
