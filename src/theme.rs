//! Mood themes and their fixed per-theme configuration.
//!
//! The neutral state ("no theme") is modelled as `Option<Theme>::None` by the
//! controller; this module only knows about the three selectable moods.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Theme {
    Productive,
    Chill,
    Chaos,
}

/// Static description of one theme (not user-editable).
#[derive(Clone, Copy, Debug)]
pub struct ThemeProfile {
    pub theme: Theme,
    pub glyph: &'static str,
    pub label: &'static str,
    /// Body / button class applied while the theme is active.
    pub class: &'static str,
    pub glyph_interval_ms: u32,
    /// Only chaos runs the quote spawner.
    pub quote_interval_ms: Option<u32>,
}

pub const THEMES: [ThemeProfile; 3] = [
    ThemeProfile {
        theme: Theme::Productive,
        glyph: "😎",
        label: "Productive",
        class: "productive",
        glyph_interval_ms: 800,
        quote_interval_ms: None,
    },
    ThemeProfile {
        theme: Theme::Chill,
        glyph: "😌",
        label: "Chill",
        class: "chill",
        glyph_interval_ms: 1200,
        quote_interval_ms: None,
    },
    ThemeProfile {
        theme: Theme::Chaos,
        glyph: "😈",
        label: "Chaos",
        class: "chaos",
        glyph_interval_ms: 600,
        quote_interval_ms: Some(1400),
    },
];

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Productive, Theme::Chill, Theme::Chaos];

    pub fn profile(self) -> &'static ThemeProfile {
        match self {
            Theme::Productive => &THEMES[0],
            Theme::Chill => &THEMES[1],
            Theme::Chaos => &THEMES[2],
        }
    }

    pub fn glyph(self) -> &'static str {
        self.profile().glyph
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    pub fn class(self) -> &'static str {
        self.profile().class
    }

    /// Parse a theme from its class name (as used by button ids and JS callers).
    pub fn from_class(name: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.class() == name)
    }
}
