//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and form primitives while reading shared
//! state from Leptos context providers.

pub mod badge;
pub mod error_banner;
pub mod header;
pub mod textarea;
pub mod theme_provider;
