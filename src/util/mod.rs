//! Browser utility helpers.

pub mod role_cache;
