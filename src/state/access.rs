//! Route guard: per-route access decisions over the shared auth context.
//!
//! The guard only reports state; navigation is performed by the consuming
//! layout through `redirect_unauthorized`, keeping decision and effect
//! separate.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{AuthError, User};
use crate::state::auth::{AuthHandle, AuthState};

/// Access decision for a route, derived per render.
///
/// While `loading` is true the decision is always "no", regardless of any
/// cached role flag, so stale storage can never flash privileged content.
pub fn can_access(state: &AuthState, require_admin: bool) -> bool {
    !state.loading
        && state
            .user
            .as_ref()
            .is_some_and(|user| !require_admin || user.role.is_admin())
}

/// Guard over the shared auth context for one route.
#[derive(Clone)]
pub struct ProtectedRoute {
    auth: RwSignal<AuthState>,
    handle: AuthHandle,
    require_admin: bool,
}

/// Read the auth context and build a guard for the current route.
pub fn use_protected_route(require_admin: bool) -> ProtectedRoute {
    ProtectedRoute {
        auth: expect_context::<RwSignal<AuthState>>(),
        handle: expect_context::<AuthHandle>(),
        require_admin,
    }
}

impl ProtectedRoute {
    pub fn user(&self) -> Option<User> {
        self.auth.get().user
    }

    pub fn loading(&self) -> bool {
        self.auth.get().loading
    }

    pub fn error(&self) -> Option<AuthError> {
        self.auth.get().error
    }

    pub fn can_access(&self) -> bool {
        can_access(&self.auth.get(), self.require_admin)
    }

    /// Sign out and drop the cached role flag. Navigation is left to the
    /// page's redirect effect.
    pub fn logout(&self) {
        self.handle.sign_out();
    }
}

/// Install the redirect policy for a protected page: anonymous users go to
/// the sign-in page, authenticated users lacking the required role go to the
/// landing page. Nothing happens until loading has settled.
pub fn redirect_unauthorized(route: &ProtectedRoute) {
    let route = route.clone();
    let navigate = use_navigate();
    Effect::new(move || {
        let state = route.auth.get();
        if state.loading {
            return;
        }
        if state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        } else if !can_access(&state, route.require_admin) {
            navigate("/", NavigateOptions::default());
        }
    });
}
