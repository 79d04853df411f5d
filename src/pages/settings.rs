//! Account settings page: profile fields, availability notes, theme choice.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only page that writes account data back to the hosted service, and
//! the only place the full theme choice (including `system`) is exposed.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::header::Header;
use crate::components::textarea::Textarea;
#[cfg(feature = "hydrate")]
use crate::net::types::AccountProfile;
use crate::state::theme::{Theme, use_theme};
use crate::util::auth_status::use_auth_status;

const MAX_DISPLAY_NAME_CHARS: usize = 64;

/// Validate and trim a display name.
fn validate_display_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Enter a display name.");
    }
    if name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err("Display name must be 64 characters or fewer.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let status = use_auth_status();
    let display_name = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Load current profile values once the page is live in the browser.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(profile) = crate::net::api::fetch_profile().await {
                display_name.set(profile.display_name);
                notes.set(profile.availability_notes);
            }
        });
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = match validate_display_name(&display_name.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        saved.set(false);

        #[cfg(feature = "hydrate")]
        {
            let profile = AccountProfile {
                display_name: name_value,
                availability_notes: notes.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&profile).await {
                    Ok(()) => saved.set(true),
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name_value;
            busy.set(false);
        }
    };

    view! {
        <div class="page settings-page">
            <Header status=status/>
            <main class="settings-page__body">
                <h1>"Account Settings"</h1>
                <Show
                    when=move || status.is_authenticated.get()
                    fallback=|| {
                        view! {
                            <p class="settings-page__signed-out">
                                "You are signed out. "
                                <a href="/login">"Sign in"</a>
                                " to manage your account."
                            </p>
                        }
                    }
                >
                    <ErrorBanner error=error/>
                    <form class="settings-form" on:submit=on_save>
                        <label class="field">
                            <span class="field__label">"Display name"</span>
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || display_name.get()
                                on:input=move |ev| display_name.set(event_target_value(&ev))
                            />
                        </label>
                        <Textarea
                            value=notes
                            label="Availability notes"
                            placeholder="e.g. No Sunday shifts; prefers early starts"
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Save"
                        </button>
                        <Show when=move || saved.get()>
                            <span class="settings-form__saved">"Saved."</span>
                        </Show>
                    </form>

                    <section class="settings-page__theme">
                        <h2>"Theme"</h2>
                        <div class="settings-page__theme-choices">
                            <ThemeChoice value=Theme::Light label="Light"/>
                            <ThemeChoice value=Theme::Dark label="Dark"/>
                            <ThemeChoice value=Theme::System label="System"/>
                        </div>
                    </section>
                </Show>
            </main>
        </div>
    }
}

/// One selectable theme option; highlights when it is the current theme.
#[component]
fn ThemeChoice(value: Theme, label: &'static str) -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class=move || {
                if theme.theme.get() == value { "btn btn--primary" } else { "btn" }
            }
            on:click=move |_| theme.set_theme(value)
        >
            {label}
        </button>
    }
}
