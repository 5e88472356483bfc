//! Fixed top navbar: product mark, nav pills, and the connected-channel
//! chip with an initials avatar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::format::initials;

#[component]
pub fn DashboardNavbar(
    login: Signal<Option<String>>,
    display_name: Signal<Option<String>>,
) -> impl IntoView {
    let location = use_location();

    let channel_text = move || {
        login
            .get()
            .map_or_else(|| "Not connected".to_owned(), |l| format!("@{l}"))
    };

    let avatar = move || {
        let login = login.get();
        let name = display_name.get();
        initials(login.as_deref(), name.as_deref())
    };

    let dashboard_active = move || {
        let path = location.pathname.get();
        path == "/" || path == "/dashboard"
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <div class="navbar__brand">
                    <div class="navbar__logo">"D"</div>
                    <span class="navbar__title">
                        "Dropify " <span class="navbar__title-muted">"bot"</span>
                    </span>
                </div>

                <nav class="navbar__pills">
                    <a
                        class="navbar__pill"
                        class:navbar__pill--active=dashboard_active
                        href="/"
                    >
                        "Dashboard"
                    </a>
                </nav>

                <div class="navbar__identity">
                    <div class="navbar__connected-as">
                        <span>"Connected as"</span>
                        <span class="navbar__channel">{channel_text}</span>
                    </div>
                    <div class="navbar__avatar">{avatar}</div>
                </div>
            </div>
        </header>
    }
}
