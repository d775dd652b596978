use super::*;
use crate::net::types::{AuthError, Role, User};

fn user(id: i64, role: Role) -> User {
    User {
        id,
        uid: format!("uid-{id}"),
        phone: "+15550100".to_owned(),
        role,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_unresolved() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Identity transitions
// =============================================================

#[test]
fn anonymous_identity_resolves_without_backend_call() {
    let mut machine = AuthMachine::default();
    let directive = machine.apply(AuthEvent::Identity(None));

    assert_eq!(directive, Directive::None);
    assert_eq!(*machine.state(), AuthState::anonymous());
}

#[test]
fn identity_token_starts_profile_fetch() {
    let mut machine = AuthMachine::default();
    let directive = machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));

    assert_eq!(
        directive,
        Directive::Fetch {
            seq: 1,
            token: "tok-a".to_owned()
        }
    );
    assert!(machine.state().loading);
    assert!(machine.state().error.is_none());
}

#[test]
fn token_refresh_keeps_user_while_resolving() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::Profile(1, Ok(user(1, Role::User))));

    let directive = machine.apply(AuthEvent::Identity(Some("tok-a2".to_owned())));

    assert_eq!(
        directive,
        Directive::Fetch {
            seq: 2,
            token: "tok-a2".to_owned()
        }
    );
    assert!(machine.state().loading);
    assert!(machine.state().user.is_some());
}

// =============================================================
// Profile resolution
// =============================================================

#[test]
fn profile_success_authenticates() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::Profile(1, Ok(user(1, Role::User))));

    let state = machine.state();
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
    assert!(state.error.is_none());
}

#[test]
fn profile_failure_resolves_to_error() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::Profile(
        1,
        Err(AuthError::ProfileFetch("/auth/me returned 500".to_owned())),
    ));

    let state = machine.state();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(matches!(state.error, Some(AuthError::ProfileFetch(_))));
}

// =============================================================
// Staleness: a newer identity change supersedes in-flight fetches
// =============================================================

#[test]
fn stale_profile_result_is_ignored() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::Identity(Some("tok-b".to_owned())));

    // A's fetch completes after B started: must not apply.
    machine.apply(AuthEvent::Profile(1, Ok(user(1, Role::Admin))));
    assert!(machine.state().loading);
    assert!(machine.state().user.is_none());

    machine.apply(AuthEvent::Profile(2, Ok(user(2, Role::User))));
    assert_eq!(machine.state().user.as_ref().map(|u| u.id), Some(2));
}

#[test]
fn completion_order_does_not_matter() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::Identity(Some("tok-b".to_owned())));

    // B's fetch lands first, then A's stale result trails in.
    machine.apply(AuthEvent::Profile(2, Ok(user(2, Role::User))));
    machine.apply(AuthEvent::Profile(1, Ok(user(1, Role::Admin))));

    assert_eq!(machine.state().user.as_ref().map(|u| u.id), Some(2));
}

#[test]
fn sign_out_supersedes_inflight_fetch() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::SignOut);

    machine.apply(AuthEvent::Profile(1, Ok(user(1, Role::Admin))));

    assert_eq!(*machine.state(), AuthState::anonymous());
}

#[test]
fn provider_sign_out_supersedes_inflight_fetch() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::Identity(None));

    machine.apply(AuthEvent::Profile(1, Ok(user(1, Role::Admin))));

    assert_eq!(*machine.state(), AuthState::anonymous());
}

// =============================================================
// Sign-out
// =============================================================

#[test]
fn sign_out_clears_authenticated_user() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::Profile(1, Ok(user(1, Role::Admin))));

    let directive = machine.apply(AuthEvent::SignOut);

    assert_eq!(directive, Directive::None);
    assert_eq!(*machine.state(), AuthState::anonymous());
}

// =============================================================
// Retry
// =============================================================

#[test]
fn retry_after_failure_refetches_with_retained_token() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::Profile(
        1,
        Err(AuthError::ProfileFetch("backend unreachable".to_owned())),
    ));

    let directive = machine.apply(AuthEvent::Retry);
    assert_eq!(
        directive,
        Directive::Fetch {
            seq: 2,
            token: "tok-a".to_owned()
        }
    );
    assert!(machine.state().loading);
    assert!(machine.state().error.is_none());

    machine.apply(AuthEvent::Profile(2, Ok(user(1, Role::User))));
    assert_eq!(machine.state().user.as_ref().map(|u| u.id), Some(1));
}

#[test]
fn retry_without_identity_is_a_noop() {
    let mut machine = AuthMachine::default();
    let directive = machine.apply(AuthEvent::Retry);

    assert_eq!(directive, Directive::None);
    assert_eq!(*machine.state(), AuthState::default());
}

#[test]
fn retry_after_sign_out_is_a_noop() {
    let mut machine = AuthMachine::default();
    machine.apply(AuthEvent::Identity(Some("tok-a".to_owned())));
    machine.apply(AuthEvent::SignOut);

    assert_eq!(machine.apply(AuthEvent::Retry), Directive::None);
    assert_eq!(*machine.state(), AuthState::anonymous());
}
