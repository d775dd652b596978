//! Public catalog landing page.

use leptos::prelude::*;

use crate::components::header::Header;

/// Catalog page — public, no guard. Product listings are presentational and
/// independent of the auth gate.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Header/>
            <main class="home-page__content">
                <h1>"Catalog"</h1>
                <p class="home-page__placeholder">"Product listings render here."</p>
            </main>
        </div>
    }
}
