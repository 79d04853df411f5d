//! REST helpers for the hosted auth/account service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/account
//! failures degrade UI behavior without crashing hydration. A failed session
//! lookup is indistinguishable from "no session"; the status poller treats
//! both as signed-out and the next tick supersedes the answer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AccountProfile, ProbeReply, Session};

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_failed_message(status: u16) -> String {
    format!("sign up failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_update_failed_message(status: u16) -> String {
    format!("profile update failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn probe_failed_message(status: u16) -> String {
    format!("probe failed: {status}")
}

/// Fetch the current session from `/api/auth/session`.
/// Returns `None` if not authenticated, on any transport failure, or on the
/// server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are
/// rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/sign-in")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/sign-up`. The service starts a
/// session on success, so callers should refresh their auth status next.
///
/// # Errors
///
/// Returns an error string if the request fails or the service rejects the
/// registration.
pub async fn sign_up(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/sign-up")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_up_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// End the current session via `POST /api/auth/sign-out`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/sign-out")
            .send()
            .await;
    }
}

/// Fetch the account profile from `/api/account/profile`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_profile() -> Option<AccountProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/account/profile")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AccountProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Update account profile fields via `PUT /api/account/profile`.
///
/// # Errors
///
/// Returns an error string if the request fails or the service rejects the
/// update.
pub async fn update_profile(profile: &AccountProfile) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/account/profile")
            .json(profile)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(profile_update_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
        Err("not available on server".to_owned())
    }
}

/// Invoke the service probe RPC via `POST /api/rpc/ping`.
///
/// # Errors
///
/// Returns an error string if the request fails or the service responds with
/// a non-OK status.
pub async fn probe_service(request_id: &str) -> Result<ProbeReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "request_id": request_id });
        let resp = gloo_net::http::Request::post("/api/rpc/ping")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(probe_failed_message(resp.status()));
        }
        resp.json::<ProbeReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request_id;
        Err("not available on server".to_owned())
    }
}
