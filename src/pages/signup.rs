//! Sign-up page with email + password + confirmation form.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::header::Header;
use crate::util::auth_status::use_auth_status;

const MIN_PASSWORD_CHARS: usize = 8;

/// Validate sign-up input, returning trimmed `(email, password)`.
fn validate_sign_up_input(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let status = use_auth_status();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_up_input(&email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        // The service starts a session on successful sign-up; force a status
        // check before leaving so the next page renders signed-in.
        #[cfg(feature = "hydrate")]
        {
            let refresh = status.refresh;
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&email_value, &password_value).await {
                    Ok(()) => {
                        refresh.run(());
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(e) => {
                        error.set(Some(e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="page auth-page">
            <Header status=status/>
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <ErrorBanner error=error/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already a member? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
