//! REST helpers for the backend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! No retry logic lives here. Callers decide whether to retry, sign the user
//! out, or surface an error.

#![allow(clippy::unused_async)]

use super::types::{AuthError, User};

/// Backend API base URL. Compile-time configurable, defaults to the local
/// development endpoint.
pub fn api_base() -> &'static str {
    option_env!("SHOPFRONT_API_BASE").unwrap_or("http://localhost:8000/api/v1")
}

/// Fetch the canonical user record for a currently valid identity token via
/// `GET /auth/me`.
///
/// # Errors
///
/// `ProfileFetch` on transport failures and non-2xx statuses, except 404
/// which maps to `Registration`: the identity exists but has no backend
/// record yet, and the UI should offer first-time registration.
pub async fn fetch_profile(token: &str) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/auth/me", api_base());
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?;
        match resp.status() {
            200..=299 => resp
                .json::<User>()
                .await
                .map_err(|e| AuthError::ProfileFetch(e.to_string())),
            404 => Err(AuthError::Registration(
                "no profile for this identity".to_owned(),
            )),
            status => Err(AuthError::ProfileFetch(format!(
                "/auth/me returned {status}"
            ))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(AuthError::ProfileFetch(
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Register the backend user record for a new identity via
/// `POST /auth/register`.
///
/// Called once per new identity; the server deduplicates by external
/// identity id, so a repeated call is safe.
///
/// # Errors
///
/// `Registration` on transport failures and non-2xx statuses.
pub async fn register_profile(token: &str, phone: &str) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/auth/register", api_base());
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .json(&serde_json::json!({ "phone": phone }))
            .map_err(|e| AuthError::Registration(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Registration(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::Registration(format!(
                "/auth/register returned {}",
                resp.status()
            )));
        }
        resp.json::<User>()
            .await
            .map_err(|e| AuthError::Registration(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, phone);
        Err(AuthError::Registration(
            "not available outside the browser".to_owned(),
        ))
    }
}
