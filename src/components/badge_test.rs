use super::*;

#[test]
fn default_variant_uses_base_class_only() {
    assert_eq!(badge_class(BadgeVariant::Default), "badge");
}

#[test]
fn each_variant_keeps_the_base_class() {
    for variant in [
        BadgeVariant::Default,
        BadgeVariant::Secondary,
        BadgeVariant::Destructive,
        BadgeVariant::Outline,
    ] {
        assert!(badge_class(variant).starts_with("badge"));
    }
}

#[test]
fn variants_map_to_distinct_classes() {
    assert_ne!(
        badge_class(BadgeVariant::Secondary),
        badge_class(BadgeVariant::Destructive)
    );
    assert_ne!(
        badge_class(BadgeVariant::Outline),
        badge_class(BadgeVariant::Default)
    );
}
