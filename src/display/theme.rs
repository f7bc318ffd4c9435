//! Light/dark theme state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

/// A user's stored choice; `Auto` defers to the system preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the system.
    #[default]
    Auto,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ThemePreference {
    /// The explicitly stored theme, if any.
    pub fn stored(self) -> Option<Theme> {
        match self {
            ThemePreference::Auto => None,
            ThemePreference::Light => Some(Theme::Light),
            ThemePreference::Dark => Some(Theme::Dark),
        }
    }
}

/// The active theme, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    /// Resolves the initial theme.
    ///
    /// A stored choice wins; otherwise the system preference decides.
    /// Call once at startup.
    pub fn initialize(stored: Option<Theme>, system_prefers_dark: bool) -> Self {
        let current = match stored {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        };
        tracing::debug!(theme = %current, stored = stored.is_some(), "Theme initialized");
        Self { current }
    }

    /// The theme in effect.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and returns the new value for the caller to persist.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }
}

/// Reads the terminal background hint from `COLORFGBG`.
pub fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| prefers_dark_from_colorfgbg(&value))
        .unwrap_or(false)
}

/// Parses a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// Returns `None` when the background field is missing or not a
/// colour index.
pub fn prefers_dark_from_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(background < 7 || background == 8)
}
