//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `theme`) so pages and components can
//! depend on small focused models.

pub mod auth;
pub mod theme;
