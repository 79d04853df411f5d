//! Service probe page: fires a ping RPC and surfaces the reply or the error.
//!
//! Diagnostic surface for checking that the hosted service is reachable from
//! the current browser session. Nothing here is load-bearing for the app.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::error_banner::ErrorBanner;
use crate::components::header::Header;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ProbeReply;
use crate::util::auth_status::use_auth_status;

#[cfg(any(test, feature = "hydrate"))]
fn probe_summary(reply: &ProbeReply) -> String {
    format!("{} (request {})", reply.status, reply.request_id)
}

#[component]
pub fn ProbePage() -> impl IntoView {
    let status = use_auth_status();
    let result = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_run = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        result.set(None);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request_id = uuid::Uuid::new_v4().to_string();
            match crate::net::api::probe_service(&request_id).await {
                Ok(reply) => result.set(Some(probe_summary(&reply))),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <div class="page probe-page">
            <Header status=status/>
            <main class="probe-page__body">
                <h1>"Service Probe"</h1>
                <p class="probe-page__hint">
                    "Sends a ping RPC to the hosted service and shows whatever comes back."
                </p>
                <ErrorBanner error=error/>
                <button class="btn btn--primary" on:click=on_run disabled=move || busy.get()>
                    {move || if busy.get() { "Probing..." } else { "Run Probe" }}
                </button>
                <Show when=move || result.get().is_some()>
                    <p class="probe-page__result">
                        <Badge variant=BadgeVariant::Outline>
                            {move || result.get().unwrap_or_default()}
                        </Badge>
                    </p>
                </Show>
            </main>
        </div>
    }
}
