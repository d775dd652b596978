//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, cart::CartPage, dashboard::DashboardPage, favorites::FavoritesPage,
    home::HomePage, login::LoginPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the auth context: the shared state signal, the action handle, and
/// (in the browser) the page-session resolution loop. Both are provided to
/// the component tree here and torn down with it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    let handle = crate::state::auth::spawn_auth_listener(auth);
    #[cfg(not(feature = "hydrate"))]
    let handle = crate::state::auth::AuthHandle::inert();
    provide_context(handle);

    view! {
        <Stylesheet id="leptos" href="/pkg/shopfront.css"/>
        <Title text="Shopfront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("favorites") view=FavoritesPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
