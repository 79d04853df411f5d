#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_none_without_browser_storage() {
    assert!(load("ui-theme").is_none());
}

#[test]
fn store_and_apply_are_noops_but_callable() {
    store("ui-theme", Theme::Dark);
    apply_marker(Theme::Dark);
    apply_marker(Theme::System);
}
