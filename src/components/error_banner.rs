//! Dismissible error banner for form and RPC failures.

use leptos::prelude::*;

/// Shows `error` while it holds a message; the dismiss button clears it.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">
                    {move || error.get().unwrap_or_default()}
                </span>
                <button
                    class="error-banner__dismiss"
                    on:click=move |_| error.set(None)
                    title="Dismiss"
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
