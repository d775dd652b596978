//! Administrative panel with section stubs.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::access::{redirect_unauthorized, use_protected_route};

/// Sections of the admin panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AdminTab {
    #[default]
    Products,
    Chats,
    Analytics,
    Settings,
}

impl AdminTab {
    fn label(self) -> &'static str {
        match self {
            AdminTab::Products => "Products",
            AdminTab::Chats => "Chats",
            AdminTab::Analytics => "Analytics",
            AdminTab::Settings => "Settings",
        }
    }
}

/// Admin panel — requires the Admin role. Non-admin users are bounced to the
/// landing page by the redirect policy; the content itself is only rendered
/// once access is positively resolved.
#[component]
pub fn AdminPage() -> impl IntoView {
    let route = use_protected_route(true);
    redirect_unauthorized(&route);

    let tab = RwSignal::new(AdminTab::default());
    let tabs = [
        AdminTab::Products,
        AdminTab::Chats,
        AdminTab::Analytics,
        AdminTab::Settings,
    ];

    view! {
        <div class="admin-page">
            <Header/>
            <main class="admin-page__content">
                <h1>"Admin"</h1>
                <Show
                    when={
                        let route = route.clone();
                        move || route.can_access()
                    }
                    fallback=|| view! { <p class="admin-page__loading">"Loading..."</p> }
                >
                    <nav class="admin-page__tabs">
                        {tabs
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class="admin-page__tab"
                                        class=("admin-page__tab--active", move || tab.get() == t)
                                        on:click=move |_| tab.set(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                    <section class="admin-page__section">
                        {move || match tab.get() {
                            AdminTab::Products => "Product management renders here.",
                            AdminTab::Chats => "Customer chats render here.",
                            AdminTab::Analytics => "Analytics render here.",
                            AdminTab::Settings => "Store settings render here.",
                        }}
                    </section>
                </Show>
            </main>
        </div>
    }
}
