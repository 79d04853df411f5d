use super::*;

// =============================================================
// Storage round-trips
// =============================================================

#[test]
fn from_storage_restores_light_and_dark() {
    assert_eq!(Theme::from_storage("light"), Some(Theme::Light));
    assert_eq!(Theme::from_storage("dark"), Some(Theme::Dark));
}

#[test]
fn from_storage_never_restores_system() {
    assert_eq!(Theme::from_storage("system"), None);
}

#[test]
fn from_storage_rejects_unknown_values() {
    assert_eq!(Theme::from_storage(""), None);
    assert_eq!(Theme::from_storage("solarized"), None);
    assert_eq!(Theme::from_storage("Dark"), None);
}

#[test]
fn restorable_themes_round_trip_through_storage() {
    assert_eq!(Theme::from_storage(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::from_storage(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::from_storage(Theme::System.as_str()), None);
}

// =============================================================
// Marker classes
// =============================================================

#[test]
fn every_theme_maps_to_exactly_one_marker_class() {
    for theme in [Theme::Light, Theme::Dark, Theme::System] {
        let markers = Theme::marker_classes();
        assert_eq!(markers.iter().filter(|m| **m == theme.as_str()).count(), 1);
    }
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// Context
// =============================================================

#[test]
fn set_theme_updates_current_value_and_is_idempotent() {
    let context = ThemeContext::new(
        RwSignal::new(Theme::Light),
        StoredValue::new("ui-theme".to_owned()),
    );
    context.set_theme(Theme::Dark);
    assert_eq!(context.theme.get_untracked(), Theme::Dark);
    context.set_theme(Theme::Dark);
    assert_eq!(context.theme.get_untracked(), Theme::Dark);
}

#[test]
#[should_panic(expected = "use_theme must be used within a ThemeProvider")]
fn use_theme_panics_outside_provider() {
    let owner = Owner::new();
    owner.with(use_theme);
}
