//! Landing page showing live authentication status.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::header::Header;
use crate::util::auth_status::use_auth_status;

fn status_label(is_authenticated: bool, user_email: Option<&str>) -> String {
    match (is_authenticated, user_email) {
        (true, Some(email)) => format!("Signed in as {email}"),
        (true, None) => "Signed in".to_owned(),
        (false, _) => "Signed out".to_owned(),
    }
}

/// Home page — workforce landing screen with the live session status.
#[component]
pub fn HomePage() -> impl IntoView {
    let status = use_auth_status();

    let label = move || {
        let email = status.user_email.get();
        status_label(status.is_authenticated.get(), email.as_deref())
    };

    view! {
        <div class="page home-page">
            <Header status=status/>
            <main class="home-page__body">
                <h1>"Shiftdeck"</h1>
                <p class="home-page__tagline">"Rosters, availability, and shift swaps in one place."</p>
                <p class="home-page__status">{label}</p>
                <Show
                    when=move || status.is_authenticated.get()
                    fallback=|| {
                        view! {
                            <div class="home-page__actions">
                                <a class="btn btn--primary" href="/signup">"Create an account"</a>
                                <a class="btn" href="/login">"Sign in"</a>
                            </div>
                        }
                    }
                >
                    <div class="home-page__actions">
                        <a class="btn btn--primary" href="/settings">"Account settings"</a>
                    </div>
                </Show>
            </main>
        </div>
    }
}
