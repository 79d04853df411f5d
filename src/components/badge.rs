//! Inline status badge.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;

/// Visual emphasis variants for [`Badge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

fn badge_class(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Default => "badge",
        BadgeVariant::Secondary => "badge badge--secondary",
        BadgeVariant::Destructive => "badge badge--destructive",
        BadgeVariant::Outline => "badge badge--outline",
    }
}

/// Small inline label for statuses and counts.
#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=badge_class(variant)>{children()}</span> }
}
