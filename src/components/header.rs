//! Site-wide header with navigation and auth controls.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::access::use_protected_route;
use crate::util::role_cache;

/// Header shown on every page: brand, nav links, and sign-in/sign-out.
///
/// The admin link is pre-shown while loading when the advisory cached role
/// says Admin, so returning admins don't see it pop in. The cache is
/// cosmetic only; the admin page itself re-checks the resolved role.
#[component]
pub fn Header() -> impl IntoView {
    let route = use_protected_route(false);

    let show_admin = {
        let route = route.clone();
        move || {
            route
                .user()
                .map_or_else(
                    || route.loading() && role_cache::read() == Some(Role::Admin),
                    |user| user.role.is_admin(),
                )
        }
    };

    let signed_in = {
        let route = route.clone();
        move || !route.loading() && route.user().is_some()
    };

    let on_logout = {
        let route = route.clone();
        move |_| route.logout()
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Shopfront"</a>
            <nav class="site-header__nav">
                <a href="/">"Catalog"</a>
                <a href="/cart">"Cart"</a>
                <a href="/favorites">"Favorites"</a>
                <a href="/dashboard">"Dashboard"</a>
                <Show when=show_admin>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            <Show
                when=signed_in
                fallback=|| view! { <a class="btn site-header__auth" href="/login">"Sign in"</a> }
            >
                <button class="btn site-header__auth" on:click=on_logout.clone()>
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}
