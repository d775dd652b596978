use super::*;
use crate::net::types::Role;
use crate::state::auth::AuthState;

fn user(role: Role) -> crate::net::types::User {
    crate::net::types::User {
        id: 1,
        uid: "uid-1".to_owned(),
        phone: "+15550100".to_owned(),
        role,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Loading blocks access unconditionally
// =============================================================

#[test]
fn loading_denies_access_even_with_user_present() {
    let state = AuthState {
        user: Some(user(Role::Admin)),
        loading: true,
        error: None,
    };
    assert!(!can_access(&state, false));
    assert!(!can_access(&state, true));
}

#[test]
fn unresolved_initial_state_denies_access() {
    let state = AuthState::default();
    assert!(!can_access(&state, false));
    assert!(!can_access(&state, true));
}

// =============================================================
// Resolved states
// =============================================================

#[test]
fn anonymous_denied_everywhere() {
    let state = AuthState::anonymous();
    assert!(!can_access(&state, false));
    assert!(!can_access(&state, true));
}

#[test]
fn plain_user_allowed_on_user_routes_only() {
    let state = AuthState::authenticated(user(Role::User));
    assert!(can_access(&state, false));
    assert!(!can_access(&state, true));
}

#[test]
fn manager_denied_admin_routes() {
    let state = AuthState::authenticated(user(Role::Manager));
    assert!(can_access(&state, false));
    assert!(!can_access(&state, true));
}

#[test]
fn admin_allowed_everywhere() {
    let state = AuthState::authenticated(user(Role::Admin));
    assert!(can_access(&state, false));
    assert!(can_access(&state, true));
}

#[test]
fn error_state_denies_access() {
    let state = AuthState::failed(crate::net::types::AuthError::ProfileFetch(
        "/auth/me returned 500".to_owned(),
    ));
    assert!(!can_access(&state, false));
    assert!(!can_access(&state, true));
}
