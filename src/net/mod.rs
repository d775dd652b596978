//! Network-facing modules: wire types, the identity provider bridge, and
//! REST helpers for the backend API.

pub mod api;
pub mod identity;
pub mod types;
