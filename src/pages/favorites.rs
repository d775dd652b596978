//! Saved favorites page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::access::{redirect_unauthorized, use_protected_route};

/// Favorites page — requires any authenticated user.
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let route = use_protected_route(false);
    redirect_unauthorized(&route);

    view! {
        <div class="favorites-page">
            <Header/>
            <main class="favorites-page__content">
                <h1>"Favorites"</h1>
                <p class="favorites-page__placeholder">"Saved products render here."</p>
            </main>
        </div>
    }
}
