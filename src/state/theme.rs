//! Display-theme model and shared context accessor.
//!
//! DESIGN
//! ======
//! One `ThemeContext` instance is provided at the app root by
//! `components::theme_provider::ThemeProvider`; `use_theme` is the only way
//! pages and components reach it. Writes go through `set_theme` so the
//! persisted slot and the live signal never disagree.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

pub(crate) const MISSING_PROVIDER: &str = "use_theme must be used within a ThemeProvider";

/// Available display themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Settable but never restored from storage and not mapped to any OS
    /// preference; carried as an inert marker.
    System,
}

impl Theme {
    /// Storage and marker-class value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Restore a persisted value. Only `light` and `dark` round-trip.
    pub fn from_storage(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Every marker class the controller may have applied to `<html>`.
    pub fn marker_classes() -> [&'static str; 3] {
        ["light", "dark", "system"]
    }
}

/// Shared theme state provided by `ThemeProvider`.
///
/// `theme` is the read surface; `set_theme` is the write surface.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    pub(crate) fn new(theme: RwSignal<Theme>, storage_key: StoredValue<String>) -> Self {
        Self { theme, storage_key }
    }

    /// Persist `next` (skipped when no storage medium exists), then make it
    /// current. Last write wins.
    pub fn set_theme(&self, next: Theme) {
        crate::util::theme_storage::store(&self.storage_key.get_value(), next);
        self.theme.set(next);
    }
}

/// Access the shared theme context.
///
/// # Panics
///
/// Panics when called outside a `ThemeProvider` scope; that is a programmer
/// error, not a runtime condition.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect(MISSING_PROVIDER)
}
