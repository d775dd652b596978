//! Advisory cache of the last resolved role in `localStorage`.
//!
//! Written when profile resolution succeeds and cleared on sign-out, so
//! returning users don't see authorized chrome pop in after the network
//! round trip. Strictly non-authoritative: the route guard never reads it,
//! and an unrecognized stored value reads as absent.

#[cfg(test)]
#[path = "role_cache_test.rs"]
mod role_cache_test;

use crate::net::types::Role;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "shopfront_last_role";

/// Read the cached role, if any. Requires a browser environment.
pub fn read() -> Option<Role> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
        Role::from_str(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the last resolved role.
pub fn write(role: Role) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, role.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
    }
}

/// Remove the cached role.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
