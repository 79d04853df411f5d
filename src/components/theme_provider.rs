//! Theme provider owning the canonical theme value.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the app root. Persists the theme to localStorage and
//! reflects it onto `<html>`; `state::theme::use_theme` is the read/write
//! surface for everything below it.

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeContext};
use crate::util::theme_storage;

/// Provides `ThemeContext` to children and keeps `<html>` in sync.
///
/// No marker class is touched until the persisted value has been loaded, so
/// a stored `dark` never flashes the default theme during hydration. Effects
/// only run in the browser; SSR output carries no marker.
#[component]
pub fn ThemeProvider(
    /// Theme used when nothing restorable is persisted.
    #[prop(optional)]
    default_theme: Theme,
    /// localStorage slot for the persisted theme.
    #[prop(into, default = String::from("ui-theme"))]
    storage_key: String,
    /// DOM convention for the marker. Only the class-list convention is
    /// implemented; other values are accepted and ignored.
    #[prop(into, default = String::from("class"))]
    attribute: String,
    /// Accepted for API compatibility; currently inert.
    #[prop(optional)]
    disable_transition_on_change: bool,
    children: Children,
) -> impl IntoView {
    let _ = (attribute, disable_transition_on_change);

    let theme = RwSignal::new(default_theme);
    let mounted = RwSignal::new(false);
    let storage_key = StoredValue::new(storage_key);

    provide_context(ThemeContext::new(theme, storage_key));

    // Adopt the persisted value (light/dark only) before any marker write.
    Effect::new(move || {
        if mounted.get_untracked() {
            return;
        }
        if let Some(stored) = theme_storage::load(&storage_key.get_value()) {
            theme.set(stored);
        }
        mounted.set(true);
    });

    // Reflect theme changes onto <html>, including the initial adoption.
    // Gated on `mounted` so nothing is written before the load above.
    Effect::new(move || {
        let current = theme.get();
        if mounted.get() {
            theme_storage::apply_marker(current);
        }
    });

    children()
}
