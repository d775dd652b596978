//! Sign-in and first-time registration page.
//!
//! Sign-in itself is delegated to the identity provider; this page only
//! triggers the provider flow and reacts to how resolution ended. A
//! `Registration` error means the identity has no backend record yet, so the
//! page collects a phone number and registers it. Other errors keep the
//! identity token and offer a user-initiated retry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::AuthError;
use crate::state::auth::{AuthHandle, AuthState};

/// Login page — sign-in trigger, registration form, and retry controls.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let handle = expect_context::<AuthHandle>();
    let navigate = use_navigate();

    // Already signed in with a resolved profile: leave the login page.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let phone = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let register_error = RwSignal::new(None::<String>);

    let on_sign_in = move |_| crate::net::identity::begin_sign_in();

    let on_retry = {
        let handle = handle.clone();
        move |_| handle.retry()
    };

    let on_register = {
        let handle = handle.clone();
        move |_| {
            let value = phone.get().trim().to_owned();
            if value.is_empty() || submitting.get() {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let handle = handle.clone();
                submitting.set(true);
                leptos::task::spawn_local(async move {
                    match crate::net::identity::current_token() {
                        Some(token) => {
                            match crate::net::api::register_profile(&token, &value).await {
                                // Re-resolve through the normal path; the
                                // machine still holds the identity token.
                                Ok(_) => handle.retry(),
                                Err(err) => register_error.set(Some(err.to_string())),
                            }
                        }
                        None => register_error.set(Some("sign in first".to_owned())),
                    }
                    submitting.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&handle, value);
            }
        }
    };

    let body = move || {
        let state = auth.get();
        if state.loading {
            return view! { <p class="login-page__status">"Checking session..."</p> }.into_any();
        }
        match state.error {
            Some(AuthError::Registration(_)) => view! {
                <div class="login-page__register">
                    <p>"Almost there: add a phone number to finish creating your account."</p>
                    <label class="login-page__label">
                        "Phone"
                        <input
                            class="login-page__input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=on_register.clone()
                    >
                        "Create account"
                    </button>
                    {move || {
                        register_error
                            .get()
                            .map(|msg| view! { <p class="login-page__error">{msg}</p> })
                    }}
                </div>
            }
            .into_any(),
            Some(err) => view! {
                <div class="login-page__retry">
                    <p class="login-page__error">{err.to_string()}</p>
                    <button class="btn" on:click=on_retry.clone()>"Try again"</button>
                </div>
            }
            .into_any(),
            None => view! {
                <button class="btn btn--primary" on:click=on_sign_in>
                    "Sign in"
                </button>
            }
            .into_any(),
        }
    };

    view! {
        <div class="login-page">
            <h1>"Shopfront"</h1>
            <p>"Sign in to shop, save favorites, and track orders."</p>
            {body}
        </div>
    }
}
