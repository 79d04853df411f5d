//! Auth-status polling hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `use_auth_status` to learn "is someone signed in, and as whom"
//! without owning any session plumbing. The hook polls the session endpoint
//! on a fixed cadence and exposes a manual refresh for flows that just
//! changed the session (e.g. right after sign-up).
//!
//! TRADE-OFFS
//! ==========
//! Ticks are issued on cadence even when an earlier lookup is still in
//! flight, so lookups can overlap and the most recently *resolved* lookup
//! wins — which may be out of chronological order. Teardown stops future
//! ticks but does not cancel an in-flight lookup.

#[cfg(test)]
#[path = "auth_status_test.rs"]
mod auth_status_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthStatus;

/// Cadence for automatic session checks.
pub const POLL_INTERVAL_MS: u64 = 2_000;

/// Live auth status owned by a single consuming view.
#[derive(Clone, Copy)]
pub struct UseAuthStatus {
    pub is_authenticated: RwSignal<bool>,
    pub user_email: RwSignal<Option<String>>,
    pub refresh: Callback<()>,
}

/// Track the current session: one immediate check, then one check every
/// [`POLL_INTERVAL_MS`] until the consuming view unmounts.
///
/// Each check is an independent stateless attempt — no retries, no backoff;
/// a transient provider failure is superseded by the next tick. On the
/// server the status stays at its signed-out default.
pub fn use_auth_status() -> UseAuthStatus {
    let is_authenticated = RwSignal::new(false);
    let user_email = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();

        check_once(is_authenticated, user_email, "mount");
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    POLL_INTERVAL_MS,
                ))
                .await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                check_once(is_authenticated, user_email, "interval");
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let refresh = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        check_once(is_authenticated, user_email, "refresh");
    });

    UseAuthStatus {
        is_authenticated,
        user_email,
        refresh,
    }
}

/// Spawn one session lookup and store the derived status.
#[cfg(feature = "hydrate")]
fn check_once(
    is_authenticated: RwSignal<bool>,
    user_email: RwSignal<Option<String>>,
    origin: &'static str,
) {
    leptos::task::spawn_local(async move {
        let session = crate::net::api::fetch_session().await;
        let status = AuthStatus::from_session(session.as_ref());
        log::debug!("{}", check_trace_message(origin, status.is_authenticated));
        is_authenticated.set(status.is_authenticated);
        user_email.set(status.user_email);
    });
}

#[cfg(any(test, feature = "hydrate"))]
fn check_trace_message(origin: &str, authenticated: bool) -> String {
    format!("auth status check ({origin}): authenticated={authenticated}")
}
