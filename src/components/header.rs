//! Top application header with auth status and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page renders this bar. It is a pure consumer of the two core
//! contracts: the page's `UseAuthStatus` and the shared `ThemeContext`.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::state::theme::{Theme, use_theme};
use crate::util::auth_status::UseAuthStatus;

/// App header: brand, theme toggle, live auth segment, sign-out.
#[component]
pub fn Header(status: UseAuthStatus) -> impl IntoView {
    let theme = use_theme();

    let on_toggle = move |_| {
        let next = match theme.theme.get_untracked() {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        };
        theme.set_theme(next);
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let refresh = status.refresh;
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                refresh.run(());
            });
        }
    };

    view! {
        <header class="header toolbar">
            <a class="header__brand" href="/">"Shiftdeck"</a>
            <nav class="header__nav">
                <a class="header__link" href="/probe">"Probe"</a>
                <a class="header__link" href="/settings">"Settings"</a>
            </nav>
            <span class="toolbar__spacer"></span>
            <button class="btn header__theme-toggle" on:click=on_toggle title="Toggle theme">
                {move || if theme.theme.get() == Theme::Dark { "☀" } else { "☾" }}
            </button>
            <Show
                when=move || status.is_authenticated.get()
                fallback=|| view! { <a class="btn" href="/login">"Sign In"</a> }
            >
                <Badge variant=BadgeVariant::Secondary>
                    {move || status.user_email.get().unwrap_or_else(|| "signed in".to_owned())}
                </Badge>
                <button class="btn header__sign-out" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </Show>
        </header>
    }
}
