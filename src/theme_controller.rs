//! Theme controller: current mood, its particle spawners, the mood log,
//! the chaos meter and the explosion / reset cycle.

use crate::app::Ctx;
use crate::chaos_meter::{CHAOS_MAX, ChaosMeter, MeterChange};
use crate::effect::Effect;
use crate::mood_log::MoodLog;
use crate::particles::{ParticleField, ParticleKind, ParticleSpawner};
use crate::scheduler::Scheduler;
use crate::theme::Theme;

#[derive(Debug)]
pub struct ThemeController {
    active: Option<Theme>,
    glyphs: ParticleSpawner,
    quotes: ParticleSpawner,
    field: ParticleField,
    log: MoodLog,
    meter: ChaosMeter,
    exploded: bool,
}

impl Default for ThemeController {
    fn default() -> Self {
        Self {
            active: None,
            glyphs: ParticleSpawner::new(ParticleKind::Glyph),
            quotes: ParticleSpawner::new(ParticleKind::Quote),
            field: ParticleField::new(),
            log: MoodLog::new(),
            meter: ChaosMeter::new(),
            exploded: false,
        }
    }
}

impl ThemeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Theme> {
        self.active
    }

    pub fn chaos_level(&self) -> u8 {
        self.meter.level()
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    /// The reset control is shown exactly while exploded.
    pub fn reset_visible(&self) -> bool {
        self.exploded
    }

    pub fn log(&self) -> &MoodLog {
        &self.log
    }

    pub fn live_particles(&self) -> usize {
        self.field.live_count()
    }

    pub fn spawner_running(&self, kind: ParticleKind) -> bool {
        match kind {
            ParticleKind::Glyph => self.glyphs.is_running(),
            ParticleKind::Quote => self.quotes.is_running(),
        }
    }

    /// Stop everything, then start `theme` from scratch.
    pub(crate) fn select_theme(&mut self, ctx: &mut Ctx<'_>, theme: Theme) {
        self.stop_spawners(ctx.scheduler);
        let profile = theme.profile();
        self.active = Some(theme);
        ctx.effects.push(Effect::ApplyTheme(Some(theme)));
        log::info!("theme selected: {}", profile.label);

        self.glyphs.start(ctx, &mut self.field, profile.glyph_interval_ms, profile.glyph);
        if let Some(interval) = profile.quote_interval_ms {
            self.quotes.start(ctx, &mut self.field, interval, "");
        }

        let entry = self.log.append(theme, ctx.clock.local_time()).clone();
        ctx.effects.push(Effect::AppendLog(entry));

        if theme == Theme::Chaos {
            match self.meter.increment() {
                MeterChange::Unchanged => {}
                MeterChange::Raised(level) => ctx.effects.push(Effect::SetChaosLevel(level)),
                MeterChange::Full => {
                    ctx.effects.push(Effect::SetChaosLevel(CHAOS_MAX));
                    self.explode(ctx);
                }
            }
        }
    }

    fn explode(&mut self, ctx: &mut Ctx<'_>) {
        self.stop_spawners(ctx.scheduler);
        self.exploded = true;
        ctx.effects.push(Effect::SetExploded(true));
        ctx.effects.push(Effect::SetResetVisible(true));
        log::info!("chaos meter full, exploded");
    }

    /// Back to neutral after an explosion. Returns false (and changes
    /// nothing) when not exploded.
    pub(crate) fn reset(&mut self, ctx: &mut Ctx<'_>) -> bool {
        if !self.exploded {
            return false;
        }
        self.exploded = false;
        ctx.effects.push(Effect::SetExploded(false));
        self.active = None;
        ctx.effects.push(Effect::ApplyTheme(None));
        self.stop_spawners(ctx.scheduler);
        self.meter.reset();
        ctx.effects.push(Effect::SetChaosLevel(0));
        ctx.effects.push(Effect::SetResetVisible(false));
        self.field.clear();
        ctx.effects.push(Effect::ClearParticles);
        log::info!("reset to neutral");
        true
    }

    pub(crate) fn on_spawn(&mut self, ctx: &mut Ctx<'_>, kind: ParticleKind) {
        match kind {
            ParticleKind::Glyph => self.glyphs.tick(ctx, &mut self.field),
            ParticleKind::Quote => self.quotes.tick(ctx, &mut self.field),
        }
    }

    pub(crate) fn particle_finished(&mut self, id: u64) -> bool {
        self.field.finish(id)
    }

    fn stop_spawners(&mut self, scheduler: &mut dyn Scheduler) {
        self.glyphs.stop(scheduler);
        self.quotes.stop(scheduler);
    }
}
