//! Networking modules for the hosted-service HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the hosted service's REST endpoints; `types` defines the DTOs
//! shared with it. Nothing else in the crate speaks HTTP.

pub mod api;
pub mod types;
