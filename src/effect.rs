//! View effects: the only way the core talks to the page.
//!
//! Every state transition pushes zero or more [`Effect`]s into the app's
//! outbox; the web adapter drains and applies them in order. Tests read the
//! same outbox instead of a rendered surface.

use crate::mood_log::MoodLogEntry;
use crate::particles::Particle;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum Screen {
    Name,
    Greeting,
    Mood,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Blank name submitted: put the cursor back into the input.
    FocusNameInput,
    /// Start the fade-out animation of a screen.
    FadeOut(Screen),
    /// Hide a screen and drop its animation markers.
    Hide(Screen),
    /// Unhide a screen with a fade-in.
    Show(Screen),
    SetGreeting(String),
    /// Unhide the mood log and chaos meter panels.
    RevealPanels,
    /// Replace the active theme markers (body class, pressed button).
    ApplyTheme(Option<Theme>),
    SpawnParticle(Particle),
    /// Remove every live particle at once, without waiting for animations.
    ClearParticles,
    AppendLog(MoodLogEntry),
    SetChaosLevel(u8),
    SetExploded(bool),
    SetResetVisible(bool),
}
