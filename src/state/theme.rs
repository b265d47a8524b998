//! Theme preference: a three-way cycle persisted in a site-wide cookie.
//!
//! DESIGN
//! ======
//! The controller never touches globals. It reads and writes through two
//! injected seams: a [`ThemeSurface`] (the root element's `data-theme`
//! attribute) and a [`PreferenceStore`] (the `theme` cookie). Browser-backed
//! implementations live in `util::theme`; [`MemoryStore`] is the in-process
//! one.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Cookie holding the persisted theme.
pub const THEME_COOKIE: &str = "theme";
/// Root-element attribute styling rules key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// One year.
pub const THEME_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Visual theme applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Retro,
}

impl Theme {
    /// Cycle order used by [`Theme::next`].
    pub const CYCLE: [Self; 3] = [Self::Dark, Self::Light, Self::Retro];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Retro => "retro",
        }
    }

    /// Parse a stored value. Matching is exact; anything else is unknown.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::CYCLE.into_iter().find(|t| t.as_str() == raw)
    }

    /// Resolve a possibly-missing stored value, defaulting to dark.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// Successor in the cycle, wrapping after the last entry.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::CYCLE.iter().position(|t| *t == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Where the active theme is displayed (the document root in a browser).
pub trait ThemeSurface {
    /// Raw attribute value, if any.
    fn active(&self) -> Option<String>;
    fn apply(&mut self, theme: Theme);
}

/// Where the theme choice is persisted between page loads.
pub trait PreferenceStore {
    /// Stored theme, or the default when absent or unrecognized.
    fn get(&self) -> Theme;
    fn set(&mut self, theme: Theme);
}

/// Advance the active theme one step and persist the result.
pub fn advance_theme<S, P>(surface: &mut S, store: &mut P) -> Theme
where
    S: ThemeSurface + ?Sized,
    P: PreferenceStore + ?Sized,
{
    let current = Theme::resolve(surface.active().as_deref());
    let next = current.next();
    surface.apply(next);
    store.set(next);
    log::debug!("theme {current} -> {next}");
    next
}

/// Copy the persisted preference onto the surface at startup.
pub fn restore_theme<S, P>(surface: &mut S, store: &P) -> Theme
where
    S: ThemeSurface + ?Sized,
    P: PreferenceStore + ?Sized,
{
    let theme = store.get();
    surface.apply(theme);
    theme
}

// =============================================================================
// COOKIE ENCODING
// =============================================================================

/// `Set-Cookie`-style assignment for `document.cookie`.
#[must_use]
pub fn theme_cookie(theme: Theme) -> String {
    format!("{THEME_COOKIE}={theme}; path=/; max-age={THEME_MAX_AGE_SECS}")
}

/// Look up `name` in a `document.cookie` string (`a=1; b=2`).
///
/// Returns the first match.
#[must_use]
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// A persisted preference with its absolute expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersistedTheme {
    pub theme: Theme,
    /// Seconds since the Unix epoch.
    pub expires_at_secs: u64,
}

/// Preference store kept in memory, with an explicit clock.
///
/// Mirrors cookie semantics: each write expires [`THEME_MAX_AGE_SECS`] after
/// the clock reading at write time, and expired entries read as absent.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    now_secs: u64,
    persisted: Option<PersistedTheme>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(now_secs: u64) -> Self {
        Self { now_secs, persisted: None }
    }

    pub fn set_now(&mut self, now_secs: u64) {
        self.now_secs = now_secs;
    }

    /// The live entry, if one exists and has not expired.
    #[must_use]
    pub fn persisted(&self) -> Option<PersistedTheme> {
        self.persisted.filter(|p| p.expires_at_secs > self.now_secs)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Theme {
        self.persisted().map(|p| p.theme).unwrap_or_default()
    }

    fn set(&mut self, theme: Theme) {
        let expires_at_secs = self.now_secs.saturating_add(THEME_MAX_AGE_SECS);
        self.persisted = Some(PersistedTheme { theme, expires_at_secs });
    }
}
