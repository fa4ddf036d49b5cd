//! Onboarding: name entry → greeting → mood picker.
//!
//! A one-way chain of timed visibility changes. Nothing here ever leads back
//! to the name screen.

use crate::app::Ctx;
use crate::effect::{Effect, Screen};
use crate::scheduler::Wake;

/// Duration of a screen fade (in or out).
pub const FADE_MS: u32 = 600;
/// How long the greeting stays before it fades.
pub const GREETING_DWELL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Blank name; the input got focus back and nothing else changed.
    Rejected,
    /// The onboarding sequence was scheduled.
    Accepted,
}

#[derive(Debug)]
pub struct ScreenFlow {
    screen: Screen,
    name: String,
    panels_revealed: bool,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self {
            screen: Screen::Name,
            name: String::new(),
            panels_revealed: false,
        }
    }
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Name used in the greeting (trimmed), empty until a valid submission.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn panels_revealed(&self) -> bool {
        self.panels_revealed
    }

    pub fn greeting(name: &str) -> String {
        format!("Hey there! {}!", name)
    }

    /// Submissions are not de-duplicated: a second valid one replays the
    /// whole sequence with the latest name.
    pub(crate) fn submit(&mut self, ctx: &mut Ctx<'_>, raw: &str) -> Submission {
        let name = raw.trim();
        if name.is_empty() {
            ctx.effects.push(Effect::FocusNameInput);
            return Submission::Rejected;
        }
        log::info!("name accepted, starting onboarding");
        self.name = name.to_owned();
        ctx.effects.push(Effect::FadeOut(Screen::Name));
        ctx.scheduler.set_timeout(FADE_MS, Wake::NameFaded);
        Submission::Accepted
    }

    pub(crate) fn on_wake(&mut self, ctx: &mut Ctx<'_>, wake: Wake) {
        match wake {
            Wake::NameFaded => {
                ctx.effects.push(Effect::Hide(Screen::Name));
                ctx.effects.push(Effect::SetGreeting(Self::greeting(&self.name)));
                ctx.effects.push(Effect::Show(Screen::Greeting));
                self.screen = Screen::Greeting;
                ctx.scheduler.set_timeout(GREETING_DWELL_MS, Wake::GreetingElapsed);
            }
            Wake::GreetingElapsed => {
                ctx.effects.push(Effect::FadeOut(Screen::Greeting));
                ctx.scheduler.set_timeout(FADE_MS, Wake::GreetingFaded);
            }
            Wake::GreetingFaded => {
                ctx.effects.push(Effect::Hide(Screen::Greeting));
                ctx.effects.push(Effect::Show(Screen::Mood));
                ctx.effects.push(Effect::RevealPanels);
                self.screen = Screen::Mood;
                self.panels_revealed = true;
                log::info!("mood screen shown");
            }
            Wake::Spawn(_) => {}
        }
    }
}
