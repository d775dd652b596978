//! Bridge to the third-party identity provider.
//!
//! The vendor SDK is loaded by the host page, which installs a small shim on
//! `window`: `identityOnChange`, `identityCurrentToken`, `identityBeginSignIn`
//! and `identitySignOut`. This module only forwards calls across that
//! boundary; session handling, token refresh, and reconnection stay inside
//! the provider.
//!
//! All browser access is gated behind `hydrate`; outside the browser every
//! function is an inert stub.

#[cfg(feature = "hydrate")]
fn shim(name: &str) -> Option<js_sys::Function> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    js_sys::Reflect::get(window.as_ref(), &wasm_bindgen::JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

/// Register a page-session listener for sign-in state changes.
///
/// The callback receives the current identity token, or `None` when signed
/// out. It fires on sign-in, sign-out, and token refresh, arbitrarily many
/// times over the page session.
pub fn subscribe(on_change: impl FnMut(Option<String>) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let mut on_change = on_change;
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            on_change(value.as_string());
        });
        match shim("identityOnChange") {
            Some(f) => {
                let _ = f.call1(&JsValue::NULL, callback.as_ref());
                // The provider holds the callback for the page session.
                callback.forget();
            }
            None => log::warn!("identity shim missing: identityOnChange"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}

/// Last known identity token, if signed in. Synchronous snapshot.
pub fn current_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let f = shim("identityCurrentToken")?;
        f.call0(&wasm_bindgen::JsValue::NULL).ok()?.as_string()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Open the provider's sign-in flow. Completion is reported through the
/// `subscribe` callback, never as a return value.
pub fn begin_sign_in() {
    #[cfg(feature = "hydrate")]
    match shim("identityBeginSignIn") {
        Some(f) => {
            let _ = f.call0(&wasm_bindgen::JsValue::NULL);
        }
        None => log::warn!("identity shim missing: identityBeginSignIn"),
    }
}

/// Terminate the provider session. The subscription will observe the
/// resulting signed-out state as well.
pub fn sign_out() {
    #[cfg(feature = "hydrate")]
    match shim("identitySignOut") {
        Some(f) => {
            let _ = f.call0(&wasm_bindgen::JsValue::NULL);
        }
        None => log::warn!("identity shim missing: identitySignOut"),
    }
}
