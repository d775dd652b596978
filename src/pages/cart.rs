//! Shopping cart page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::access::{redirect_unauthorized, use_protected_route};

/// Cart page — requires any authenticated user.
#[component]
pub fn CartPage() -> impl IntoView {
    let route = use_protected_route(false);
    redirect_unauthorized(&route);

    view! {
        <div class="cart-page">
            <Header/>
            <main class="cart-page__content">
                <h1>"Shopping cart"</h1>
                <p class="cart-page__placeholder">"Cart items render here."</p>
            </main>
        </div>
    }
}
