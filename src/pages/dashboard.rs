//! Customer account dashboard.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::access::{redirect_unauthorized, use_protected_route};

/// Dashboard page — requires any authenticated user. Shows the resolved
/// profile as returned by the backend.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let route = use_protected_route(false);
    redirect_unauthorized(&route);

    let details = {
        let route = route.clone();
        move || {
            route.user().map(|user| {
                view! {
                    <dl class="dashboard-page__details">
                        <dt>"Phone"</dt>
                        <dd>{user.phone}</dd>
                        <dt>"Role"</dt>
                        <dd>{user.role.as_str()}</dd>
                        <dt>"Member since"</dt>
                        <dd>{user.created_at}</dd>
                    </dl>
                }
            })
        }
    };

    view! {
        <div class="dashboard-page">
            <Header/>
            <main class="dashboard-page__content">
                <h1>"Your account"</h1>
                <Show
                    when={
                        let route = route.clone();
                        move || route.can_access()
                    }
                    fallback=|| view! { <p class="dashboard-page__loading">"Loading..."</p> }
                >
                    {details.clone()}
                </Show>
            </main>
        </div>
    }
}
