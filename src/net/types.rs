//! DTOs for the hosted-service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the hosted service's JSON payloads so serde round-trips
//! stay lossless; the app never invents fields the service does not send.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated session as returned by `/api/auth/session`.
///
/// The record's existence is what "authenticated" means to this app; no
/// token material is read client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identity attached to the session.
    pub user: SessionUser,
}

/// Identity record inside a [`Session`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Primary email, if the identity provider shared one.
    pub email: Option<String>,
    /// Display name shown in the header and on the settings page.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Editable account fields exchanged with `/api/account/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Display name shown to other members.
    pub display_name: String,
    /// Free-form availability notes shown to schedulers.
    #[serde(default)]
    pub availability_notes: String,
}

/// Reply payload of the service probe RPC.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReply {
    /// Correlation id echoed back by the service.
    pub request_id: String,
    /// Service-reported status string (e.g. `"ok"`).
    pub status: String,
}
