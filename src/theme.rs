//! Light/dark theme preference.
//!
//! The active theme is persisted through an injected [`PreferenceStore`] so
//! the storage mechanism can be swapped out. The browser binding stores it in
//! `localStorage`; tests use [`MemoryPreferences`].
//!
//! Read failures, a missing value, and unrecognized stored strings all
//! resolve to [`Theme::Dark`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use crate::effect::Effect;

/// Display mode for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored value, accepting only the two literal strings.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Key/value persistence that survives page loads.
pub trait PreferenceStore {
    /// Return the stored value, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value. Failures are swallowed by the implementation.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one existing entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Read the persisted theme, defaulting to dark.
pub fn read_preference(store: &impl PreferenceStore, key: &str) -> Theme {
    let stored = store.get(key);
    match stored.as_deref().map(Theme::parse) {
        Some(Some(theme)) => theme,
        Some(None) => {
            log::warn!("theme: ignoring unrecognized stored value {stored:?}");
            Theme::Dark
        }
        None => Theme::Dark,
    }
}

/// Effects that make `theme` the active one.
#[must_use]
pub fn apply(theme: Theme) -> Vec<Effect> {
    vec![Effect::SetTheme(theme), Effect::SetThemePressed(theme == Theme::Light)]
}

/// Flip `current`, persist the result, and return it with its effects.
pub fn toggle(current: Theme, store: &mut impl PreferenceStore, key: &str) -> (Theme, Vec<Effect>) {
    let next = current.opposite();
    store.set(key, next.as_str());
    log::debug!("theme: {} -> {}", current.as_str(), next.as_str());
    (next, apply(next))
}
