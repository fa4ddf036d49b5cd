// Integration tests (native) for the `mood-toy` session.
// These drive `App` through its public API with a virtual scheduler, a fixed
// clock and a seeded RNG, so no browser is needed.

use mood_toy::{
    App, Effect, FADE_MS, FixedClock, GREETING_DWELL_MS, LocalTime, ParticleKind, Screen, Submission, Theme,
    VirtualScheduler, Wake,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

type TestApp = App<VirtualScheduler, FixedClock, SmallRng>;

fn new_app() -> TestApp {
    App::new(
        VirtualScheduler::new(),
        FixedClock(LocalTime::new(8, 15)),
        SmallRng::seed_from_u64(2024),
    )
}

const ONBOARDING_MS: u64 = (FADE_MS + GREETING_DWELL_MS + FADE_MS) as u64;

fn count_mood_shows(effects: &[Effect]) -> usize {
    effects.iter().filter(|e| **e == Effect::Show(Screen::Mood)).count()
}

fn assert_single_spawners(app: &TestApp) {
    let s = app.scheduler();
    assert!(s.registered(Wake::Spawn(ParticleKind::Glyph)) <= 1, "duplicate glyph timers");
    assert!(s.registered(Wake::Spawn(ParticleKind::Quote)) <= 1, "duplicate quote timers");
}

#[test]
fn trimmed_names_reach_mood_screen_exactly_once() {
    for raw in ["Ada", "  Ada", "Ada  ", "\tGrace Hopper\n"] {
        let mut app = new_app();
        assert_eq!(app.submit_name(raw), Submission::Accepted);
        app.advance(ONBOARDING_MS - 1);
        assert_ne!(app.flow().screen(), Screen::Mood, "input {:?}", raw);
        app.advance(1);
        assert_eq!(app.flow().screen(), Screen::Mood, "input {:?}", raw);
        assert_eq!(app.flow().name(), raw.trim());

        let effects = app.take_effects();
        assert_eq!(count_mood_shows(&effects), 1);
        assert!(effects.contains(&Effect::SetGreeting(format!("Hey there! {}!", raw.trim()))));

        // nothing left to fire, ever
        app.advance(60_000);
        assert_eq!(count_mood_shows(&app.take_effects()), 0);
    }
}

#[test]
fn blank_names_are_silently_rejected() {
    for raw in ["", " ", "\t\n  "] {
        let mut app = new_app();
        let before = app.snapshot();
        assert_eq!(app.submit_name(raw), Submission::Rejected);
        assert_eq!(app.take_effects(), vec![Effect::FocusNameInput]);
        app.advance(ONBOARDING_MS * 2);
        assert!(app.take_effects().is_empty());
        assert_eq!(app.snapshot(), before);
        assert_eq!(app.scheduler().pending(), 0);
    }
}

#[test]
fn rejection_is_repeatable_before_valid_submit() {
    let mut app = new_app();
    app.submit_name("");
    app.submit_name("   ");
    assert_eq!(app.submit_name("Lin"), Submission::Accepted);
    app.advance(ONBOARDING_MS);
    assert_eq!(app.flow().screen(), Screen::Mood);
}

#[test]
fn double_submit_replays_sequence_and_ends_on_mood() {
    let mut app = new_app();
    app.submit_name("Ada");
    app.advance(10);
    app.submit_name("Ada");
    app.advance(ONBOARDING_MS);
    assert_eq!(app.flow().screen(), Screen::Mood);
    assert!(app.flow().panels_revealed());
    assert_eq!(count_mood_shows(&app.take_effects()), 2);
}

#[test]
fn switching_themes_never_stacks_timers() {
    let mut app = new_app();
    let sequence = [
        Theme::Productive,
        Theme::Chaos,
        Theme::Chaos,
        Theme::Chill,
        Theme::Chaos,
        Theme::Productive,
        Theme::Productive,
    ];
    for (i, theme) in sequence.iter().cycle().take(40).enumerate() {
        app.select_theme(*theme);
        assert_single_spawners(&app);
        app.advance(137 * (i as u64 % 5));
        assert_single_spawners(&app);
        let quotes = app.scheduler().registered(Wake::Spawn(ParticleKind::Quote));
        assert_eq!(quotes == 1, *theme == Theme::Chaos && !app.themes().exploded());
    }
}

#[test]
fn chaos_level_is_monotonic_multiple_of_five() {
    let mut app = new_app();
    let mut last = 0;
    for i in 0..60 {
        let theme = Theme::ALL[i % 3];
        app.select_theme(theme);
        let level = app.themes().chaos_level();
        assert!(level >= last);
        assert_eq!(level % 5, 0);
        assert!(level <= 100);
        last = level;
    }
}

#[test]
fn twenty_chaos_picks_explode_once() {
    let mut app = new_app();
    for i in 1..=19 {
        app.select_theme(Theme::Chaos);
        assert_eq!(app.themes().chaos_level(), i * 5);
        assert!(!app.themes().exploded());
    }
    app.take_effects();

    app.select_theme(Theme::Chaos);
    let effects = app.take_effects();
    assert_eq!(app.themes().chaos_level(), 100);
    assert!(app.themes().exploded());
    assert!(app.themes().reset_visible());
    assert_eq!(effects.iter().filter(|e| **e == Effect::SetExploded(true)).count(), 1);
    assert!(effects.contains(&Effect::SetChaosLevel(100)));
    // explosion stops both spawners
    assert_eq!(app.scheduler().registered(Wake::Spawn(ParticleKind::Glyph)), 0);
    assert_eq!(app.scheduler().registered(Wake::Spawn(ParticleKind::Quote)), 0);
    // the theme itself stays until reset
    assert_eq!(app.themes().active(), Some(Theme::Chaos));

    app.select_theme(Theme::Chaos);
    let effects = app.take_effects();
    assert_eq!(app.themes().chaos_level(), 100);
    assert!(!effects.iter().any(|e| matches!(e, Effect::SetChaosLevel(_) | Effect::SetExploded(_))));
    // picks while exploded are still logged
    assert_eq!(app.themes().log().len(), 21);
}

#[test]
fn reset_after_explosion_returns_to_neutral() {
    let mut app = new_app();
    for _ in 0..20 {
        app.select_theme(Theme::Chaos);
        app.advance(700);
    }
    app.select_theme(Theme::Chill);
    app.advance(5_000);
    assert!(app.themes().live_particles() > 0);
    app.take_effects();

    assert!(app.reset());
    let effects = app.take_effects();
    assert!(effects.contains(&Effect::ClearParticles));
    assert!(effects.contains(&Effect::SetResetVisible(false)));
    assert!(effects.contains(&Effect::ApplyTheme(None)));

    let snap = app.snapshot();
    assert_eq!(snap.chaos_level, 0);
    assert!(!snap.exploded);
    assert!(!snap.reset_visible);
    assert_eq!(snap.active_theme, None);
    assert_eq!(snap.live_particles, 0);
    assert!(!snap.glyph_spawner_running);
    assert!(!snap.quote_spawner_running);
    assert_eq!(app.scheduler().pending(), 0);

    // a fresh charge cycle explodes again after another twenty picks
    for _ in 0..20 {
        app.select_theme(Theme::Chaos);
    }
    assert!(app.themes().exploded());
}

#[test]
fn reset_without_explosion_changes_nothing() {
    let mut app = new_app();
    app.select_theme(Theme::Chaos);
    app.select_theme(Theme::Chill);
    app.advance(3_000);
    app.take_effects();
    let before = app.snapshot();
    let pending = app.scheduler().pending();

    assert!(!app.reset());
    assert!(!app.reset());
    assert!(app.take_effects().is_empty());
    assert_eq!(app.snapshot(), before);
    assert_eq!(app.scheduler().pending(), pending);
}

#[test]
fn mood_log_records_picks_in_order() {
    let mut app = new_app();
    app.select_theme(Theme::Productive);
    app.select_theme(Theme::Chaos);
    app.select_theme(Theme::Chill);
    let log: Vec<_> = app
        .themes()
        .log()
        .entries()
        .iter()
        .map(|e| (e.theme, e.glyph, e.label, e.time.to_string()))
        .collect();
    assert_eq!(
        log,
        vec![
            (Theme::Productive, "😎", "Productive", "08:15".to_string()),
            (Theme::Chaos, "😈", "Chaos", "08:15".to_string()),
            (Theme::Chill, "😌", "Chill", "08:15".to_string()),
        ]
    );
}

#[test]
fn chaos_runs_quote_spawner_on_its_own_interval() {
    let mut app = new_app();
    app.select_theme(Theme::Chaos);
    app.take_effects();
    app.advance(4_200);
    let (mut glyphs, mut quotes) = (0, 0);
    for e in app.take_effects() {
        if let Effect::SpawnParticle(p) = e {
            match p.kind {
                ParticleKind::Glyph => glyphs += 1,
                ParticleKind::Quote => quotes += 1,
            }
        }
    }
    assert_eq!(glyphs, 7); // 600ms
    assert_eq!(quotes, 3); // 1400ms
}
