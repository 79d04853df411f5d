//! Auth-session status for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! User-aware pages read this snapshot to coordinate sign-in prompts and
//! identity-dependent rendering. Each consuming view owns its own copy via
//! `util::auth_status::use_auth_status`; nothing here is shared process-wide.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Snapshot of the most recently resolved session lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub user_email: Option<String>,
}

impl AuthStatus {
    /// Derive a status from a session lookup result.
    ///
    /// A failed lookup and "no session" collapse to the same signed-out
    /// status. `user_email` is only ever set alongside `is_authenticated`.
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self {
                is_authenticated: true,
                user_email: session.user.email.clone(),
            },
            None => Self::default(),
        }
    }
}
