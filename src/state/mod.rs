//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The auth gate is split into a pure state machine (`auth`) and a route
//! guard (`access`) so the contractual behavior is testable without a
//! browser. Leptos signals only mirror what the machine decides.

pub mod access;
pub mod auth;
