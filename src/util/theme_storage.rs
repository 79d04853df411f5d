//! Theme persistence and document reflection.
//!
//! Reads the persisted theme from `localStorage` and applies exactly one
//! marker class to the `<html>` element. Requires a browser environment;
//! SSR paths no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::Theme;

/// Read the persisted theme for `key` from localStorage.
///
/// Returns `None` when no storage medium is available, nothing is stored,
/// or the stored value is not restorable (`system` is never restored).
pub fn load(key: &str) -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        Theme::from_storage(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Persist `theme` under `key`. Skipped silently when storage is absent.
pub fn store(key: &str, theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, theme);
    }
}

/// Reflect `theme` onto `<html>`: strip every marker class, then add the one
/// for `theme`. The element never carries two markers at once.
pub fn apply_marker(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                for class in Theme::marker_classes() {
                    let _ = class_list.remove_1(class);
                }
                let _ = class_list.add_1(theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
