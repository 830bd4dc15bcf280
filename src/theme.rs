use rand::seq::SliceRandom;
use rand::Rng;
use ratatui::style::{Color, Modifier, Style};
use std::fmt;
use std::str::FromStr;

/// Picks one of the concrete themes at launch.
pub const RANDOM_THEME: &str = "random";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Green,
    Purple,
    Cyan,
    Blue,
    Yellow,
    White,
    Red,
}

impl ThemeName {
    pub const ALL: [ThemeName; 7] = [
        ThemeName::Green,
        ThemeName::Purple,
        ThemeName::Cyan,
        ThemeName::Blue,
        ThemeName::Yellow,
        ThemeName::White,
        ThemeName::Red,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Green => "green",
            ThemeName::Purple => "purple",
            ThemeName::Cyan => "cyan",
            ThemeName::Blue => "blue",
            ThemeName::Yellow => "yellow",
            ThemeName::White => "white",
            ThemeName::Red => "red",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .iter()
            .copied()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown theme '{}'", s))
    }
}

/// Semantic style of a draw instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Primary,
    Highlight,
    HighlightInverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub primary: Color,
    pub highlight: Color,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let (primary, highlight) = match name {
            ThemeName::Green => (Color::Green, Color::Yellow),
            ThemeName::Purple => (Color::Magenta, Color::White),
            ThemeName::Cyan => (Color::Cyan, Color::White),
            ThemeName::Blue => (Color::Blue, Color::White),
            ThemeName::Yellow => (Color::Yellow, Color::Red),
            ThemeName::White => (Color::White, Color::Cyan),
            ThemeName::Red => (Color::Red, Color::Blue),
        };
        Self {
            name,
            primary,
            highlight,
        }
    }

    pub fn style(&self, tag: StyleTag) -> Style {
        let base = Style::default().bg(Color::Black);
        match tag {
            StyleTag::Primary => base.fg(self.primary),
            StyleTag::Highlight => base.fg(self.highlight),
            StyleTag::HighlightInverse => base.fg(self.primary).add_modifier(Modifier::REVERSED),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(ThemeName::default())
    }
}

/// Turn a configured theme name into a theme. `random` picks uniformly; unknown names fall
/// back to green.
pub fn resolve_theme<R: Rng>(requested: &str, rng: &mut R) -> Theme {
    if requested.trim().eq_ignore_ascii_case(RANDOM_THEME) {
        let name = ThemeName::ALL.choose(rng).copied().unwrap_or_default();
        log::debug!("Random theme resolved to {}", name);
        return Theme::new(name);
    }

    match requested.parse::<ThemeName>() {
        Ok(name) => Theme::new(name),
        Err(e) => {
            log::warn!("{}; falling back to {}", e, ThemeName::default());
            Theme::default()
        }
    }
}
