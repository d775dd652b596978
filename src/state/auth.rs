//! Auth context: the state machine resolving identity events into a user
//! record, and the page-session loop that drives it.
//!
//! ORDERING
//! ========
//! Identity changes and profile-fetch completions all flow through one
//! single-consumer queue. Every identity change bumps a private sequence
//! number, and a profile result is applied only if its sequence number is
//! still current, so a newer identity change always supersedes an in-flight
//! fetch regardless of completion order.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthError, User};

/// Authentication state shared across the component tree.
///
/// Owned by the auth context; consumers read it through the
/// `RwSignal<AuthState>` provided from `App` and must treat `loading == true`
/// as "access unknown".
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<AuthError>,
}

impl Default for AuthState {
    /// Initial state is unresolved: nothing known yet, resolution pending.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
            error: None,
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: AuthError) -> Self {
        Self {
            user: None,
            loading: false,
            error: Some(error),
        }
    }
}

/// Messages consumed by the auth resolution loop.
#[derive(Debug)]
pub enum AuthEvent {
    /// The identity provider reported a sign-in state change: the current
    /// token, or `None` when signed out.
    Identity(Option<String>),
    /// A profile fetch started under the given sequence number finished.
    Profile(u64, Result<User, AuthError>),
    /// Explicit sign-out requested by the UI.
    SignOut,
    /// User-initiated retry after a failed resolution.
    Retry,
}

/// Instruction returned by the machine for the driver to execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    None,
    /// Start a profile fetch; the result must be fed back to the queue as
    /// `AuthEvent::Profile(seq, ..)`.
    Fetch { seq: u64, token: String },
}

/// Pure state machine behind the auth context.
///
/// Single-owner: only the resolution loop mutates it, so no locking is
/// needed. All transitions are synchronous; asynchronous work happens in the
/// driver and re-enters through `apply`.
#[derive(Debug, Default)]
pub struct AuthMachine {
    seq: u64,
    state: AuthState,
    /// Token of the most recent identity, retained across fetch failures so
    /// a retry can re-resolve without a fresh provider event.
    token: Option<String>,
}

impl AuthMachine {
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn apply(&mut self, event: AuthEvent) -> Directive {
        match event {
            AuthEvent::Identity(Some(token)) => {
                self.seq += 1;
                self.token = Some(token.clone());
                // The previous user stays visible while resolving; access is
                // blocked by `loading` regardless.
                self.state.loading = true;
                self.state.error = None;
                Directive::Fetch {
                    seq: self.seq,
                    token,
                }
            }
            AuthEvent::Identity(None) => {
                // Signed out at the provider: resolved directly, no backend
                // call. Bumping seq supersedes any in-flight fetch.
                self.seq += 1;
                self.token = None;
                self.state = AuthState::anonymous();
                Directive::None
            }
            AuthEvent::Profile(seq, _) if seq != self.seq => {
                // Superseded by a newer identity change; drop the result.
                Directive::None
            }
            AuthEvent::Profile(_, Ok(user)) => {
                self.state = AuthState::authenticated(user);
                Directive::None
            }
            AuthEvent::Profile(_, Err(error)) => {
                self.state = AuthState::failed(error);
                Directive::None
            }
            AuthEvent::SignOut => {
                self.seq += 1;
                self.token = None;
                self.state = AuthState::anonymous();
                Directive::None
            }
            AuthEvent::Retry => match self.token.clone() {
                Some(token) => {
                    self.seq += 1;
                    self.state.loading = true;
                    self.state.error = None;
                    Directive::Fetch {
                        seq: self.seq,
                        token,
                    }
                }
                None => Directive::None,
            },
        }
    }
}

/// Handle for UI-initiated auth actions. Cloneable; inert outside the
/// browser.
#[derive(Clone)]
pub struct AuthHandle {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<AuthEvent>>,
}

impl AuthHandle {
    /// Handle with no resolution loop attached (SSR and tests).
    pub fn inert() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            tx: None,
        }
    }

    /// Sign out of the identity provider and force the anonymous state.
    /// Drops the advisory cached role flag immediately.
    pub fn sign_out(&self) {
        crate::util::role_cache::clear();
        #[cfg(feature = "hydrate")]
        {
            crate::net::identity::sign_out();
            if let Some(tx) = &self.tx {
                let _ = tx.unbounded_send(AuthEvent::SignOut);
            }
        }
    }

    /// Re-run profile resolution after a failure (user-initiated; the gate
    /// itself never retries).
    pub fn retry(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(tx) = &self.tx {
            let _ = tx.unbounded_send(AuthEvent::Retry);
        }
    }
}

/// Start the page-session auth resolution loop.
///
/// Subscribes the identity adapter into the event queue, mirrors every
/// machine transition into the shared signal, maintains the advisory role
/// cache, and spawns a profile fetch for every `Fetch` directive. Fetch
/// results re-enter the same queue, so ordering is decided by event recency
/// alone.
#[cfg(feature = "hydrate")]
pub fn spawn_auth_listener(auth: leptos::prelude::RwSignal<AuthState>) -> AuthHandle {
    use futures::StreamExt;
    use futures::channel::mpsc;
    use leptos::prelude::Set;

    let (tx, mut rx) = mpsc::unbounded::<AuthEvent>();

    {
        let tx = tx.clone();
        crate::net::identity::subscribe(move |token| {
            let _ = tx.unbounded_send(AuthEvent::Identity(token));
        });
    }

    let fetch_tx = tx.clone();
    leptos::task::spawn_local(async move {
        let mut machine = AuthMachine::default();
        while let Some(event) = rx.next().await {
            let directive = machine.apply(event);
            let state = machine.state().clone();

            // Advisory flag only: written on resolution, cleared whenever the
            // user is gone. Never consulted for access decisions.
            if !state.loading {
                match &state.user {
                    Some(user) => crate::util::role_cache::write(user.role),
                    None => crate::util::role_cache::clear(),
                }
            }

            auth.set(state);

            if let Directive::Fetch { seq, token } = directive {
                let tx = fetch_tx.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::fetch_profile(&token).await;
                    if let Err(err) = &result {
                        log::warn!("profile resolution failed: {err}");
                    }
                    let _ = tx.unbounded_send(AuthEvent::Profile(seq, result));
                });
            }
        }
    });

    AuthHandle { tx: Some(tx) }
}
