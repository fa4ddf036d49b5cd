//! The session object: both controllers plus the host ports.
//!
//! `App` is what the web adapter keeps in its thread-local and what tests
//! drive directly. Every input is a method call; every visible consequence
//! lands in the effect outbox.

use rand::RngCore;

use crate::clock::Clock;
use crate::effect::{Effect, Screen};
use crate::mood_log::MoodLogEntry;
use crate::particles::ParticleKind;
use crate::scheduler::{Scheduler, VirtualScheduler, Wake};
use crate::screen_flow::{ScreenFlow, Submission};
use crate::theme::Theme;
use crate::theme_controller::ThemeController;

/// Borrowed ports handed to the controllers for the duration of one input.
pub(crate) struct Ctx<'a> {
    pub(crate) scheduler: &'a mut dyn Scheduler,
    pub(crate) clock: &'a dyn Clock,
    pub(crate) rng: &'a mut dyn RngCore,
    pub(crate) effects: &'a mut Vec<Effect>,
}

/// Read-only picture of the whole session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub screen: Screen,
    pub panels_revealed: bool,
    pub active_theme: Option<Theme>,
    pub chaos_level: u8,
    pub exploded: bool,
    pub reset_visible: bool,
    pub log: Vec<MoodLogEntry>,
    pub live_particles: usize,
    pub glyph_spawner_running: bool,
    pub quote_spawner_running: bool,
}

pub struct App<S, C, R> {
    scheduler: S,
    clock: C,
    rng: R,
    effects: Vec<Effect>,
    flow: ScreenFlow,
    themes: ThemeController,
}

/// Split `self` into the ports context and the two controllers.
macro_rules! split {
    ($app:expr) => {{
        let App {
            scheduler,
            clock,
            rng,
            effects,
            flow,
            themes,
        } = $app;
        (
            Ctx {
                scheduler,
                clock,
                rng,
                effects,
            },
            flow,
            themes,
        )
    }};
}

impl<S: Scheduler, C: Clock, R: RngCore> App<S, C, R> {
    pub fn new(scheduler: S, clock: C, rng: R) -> Self {
        Self {
            scheduler,
            clock,
            rng,
            effects: Vec::new(),
            flow: ScreenFlow::new(),
            themes: ThemeController::new(),
        }
    }

    /// Name entered via the button or the Enter key.
    pub fn submit_name(&mut self, raw: &str) -> Submission {
        let (mut ctx, flow, _) = split!(self);
        flow.submit(&mut ctx, raw)
    }

    pub fn select_theme(&mut self, theme: Theme) {
        let (mut ctx, _, themes) = split!(self);
        themes.select_theme(&mut ctx, theme);
    }

    /// Reset after an explosion; a no-op otherwise.
    pub fn reset(&mut self) -> bool {
        let (mut ctx, _, themes) = split!(self);
        themes.reset(&mut ctx)
    }

    /// A timer registered through the scheduler fired.
    pub fn on_wake(&mut self, wake: Wake) {
        let (mut ctx, flow, themes) = split!(self);
        match wake {
            Wake::Spawn(kind) => themes.on_spawn(&mut ctx, kind),
            _ => flow.on_wake(&mut ctx, wake),
        }
    }

    /// A particle's animation ended and the page removed it.
    pub fn particle_finished(&mut self, id: u64) -> bool {
        self.themes.particle_finished(id)
    }

    /// Drain the outbox.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Outbox contents since the last [`App::take_effects`].
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn flow(&self) -> &ScreenFlow {
        &self.flow
    }

    pub fn themes(&self) -> &ThemeController {
        &self.themes
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.flow.screen(),
            panels_revealed: self.flow.panels_revealed(),
            active_theme: self.themes.active(),
            chaos_level: self.themes.chaos_level(),
            exploded: self.themes.exploded(),
            reset_visible: self.themes.reset_visible(),
            log: self.themes.log().entries().to_vec(),
            live_particles: self.themes.live_particles(),
            glyph_spawner_running: self.themes.spawner_running(ParticleKind::Glyph),
            quote_spawner_running: self.themes.spawner_running(ParticleKind::Quote),
        }
    }
}

impl<C: Clock, R: RngCore> App<VirtualScheduler, C, R> {
    /// Run virtual time forward by `ms`, delivering every timer that falls
    /// due on the way (including ones registered while delivering).
    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now_ms() + ms;
        while let Some(wake) = self.scheduler.pop_due(until) {
            self.on_wake(wake);
        }
        self.scheduler.settle(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, LocalTime};
    use crate::screen_flow::{FADE_MS, GREETING_DWELL_MS};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn make_app() -> App<VirtualScheduler, FixedClock, SmallRng> {
        App::new(
            VirtualScheduler::new(),
            FixedClock(LocalTime::new(10, 30)),
            SmallRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_onboarding_timeline() {
        let mut app = make_app();
        assert_eq!(app.submit_name("  Ada "), Submission::Accepted);
        assert_eq!(app.take_effects(), vec![Effect::FadeOut(Screen::Name)]);

        app.advance(u64::from(FADE_MS) - 1);
        assert_eq!(app.flow().screen(), Screen::Name);
        app.advance(1);
        assert_eq!(app.flow().screen(), Screen::Greeting);
        assert_eq!(
            app.take_effects(),
            vec![
                Effect::Hide(Screen::Name),
                Effect::SetGreeting("Hey there! Ada!".to_string()),
                Effect::Show(Screen::Greeting),
            ]
        );

        app.advance(u64::from(GREETING_DWELL_MS));
        assert_eq!(app.take_effects(), vec![Effect::FadeOut(Screen::Greeting)]);
        assert_eq!(app.flow().screen(), Screen::Greeting);

        app.advance(u64::from(FADE_MS));
        assert_eq!(app.flow().screen(), Screen::Mood);
        assert!(app.flow().panels_revealed());
        assert_eq!(
            app.take_effects(),
            vec![
                Effect::Hide(Screen::Greeting),
                Effect::Show(Screen::Mood),
                Effect::RevealPanels,
            ]
        );
        assert_eq!(app.scheduler().pending(), 0);
    }

    #[test]
    fn test_select_theme_effect_order() {
        let mut app = make_app();
        app.select_theme(Theme::Chaos);
        let effects = app.take_effects();
        assert_eq!(effects[0], Effect::ApplyTheme(Some(Theme::Chaos)));
        assert!(matches!(&effects[1], Effect::SpawnParticle(p) if p.kind == ParticleKind::Glyph && p.text == "😈"));
        assert!(matches!(&effects[2], Effect::SpawnParticle(p) if p.kind == ParticleKind::Quote));
        assert!(matches!(&effects[3], Effect::AppendLog(e) if e.label == "Chaos" && e.time.to_string() == "10:30"));
        assert_eq!(effects[4], Effect::SetChaosLevel(5));
        assert_eq!(effects.len(), 5);
    }

    #[test]
    fn test_spawn_ticks_follow_interval() {
        let mut app = make_app();
        app.select_theme(Theme::Productive);
        app.take_effects();
        app.advance(800 * 3);
        let spawned = app
            .take_effects()
            .into_iter()
            .filter(|e| matches!(e, Effect::SpawnParticle(_)))
            .count();
        assert_eq!(spawned, 3);
        assert_eq!(app.themes().live_particles(), 4);
    }

    #[test]
    fn test_particle_finished_removes_live_particle() {
        let mut app = make_app();
        app.select_theme(Theme::Chill);
        let id = app
            .take_effects()
            .into_iter()
            .find_map(|e| match e {
                Effect::SpawnParticle(p) => Some(p.id),
                _ => None,
            })
            .unwrap();
        assert!(app.particle_finished(id));
        assert_eq!(app.themes().live_particles(), 0);
        assert!(!app.particle_finished(id));
    }
}
