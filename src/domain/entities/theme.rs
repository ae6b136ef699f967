use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Name of the cookie that persists the visitor's theme choice.
pub const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

/// Read/write access to the active theme.
///
/// Components that switch themes receive this capability explicitly instead
/// of reaching for process-wide state.
pub trait ThemeControl {
    fn current(&self) -> Theme;
    fn set(&mut self, theme: Theme);
}

/// Theme held for the duration of one request or session replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
    changed: bool,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        ThemeContext { theme, changed: false }
    }

    /// Whether `set` moved the theme away from its starting value at any point.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

impl ThemeControl for ThemeContext {
    fn current(&self) -> Theme {
        self.theme
    }

    fn set(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.changed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_themes() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("system".parse::<Theme>().is_err());
    }

    #[test]
    fn context_tracks_changes() {
        let mut ctx = ThemeContext::new(Theme::Light);
        ctx.set(Theme::Light);
        assert!(!ctx.changed());

        ctx.set(Theme::Dark);
        assert!(ctx.changed());
        assert_eq!(ctx.current(), Theme::Dark);
    }
}
