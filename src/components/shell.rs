//! Dark page background and base layout for the dashboard.

use leptos::prelude::*;

/// Wraps page content in the dark shell with its background glow layers.
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <div class="shell__backdrop" aria-hidden="true">
                <div class="shell__glow shell__glow--top"></div>
                <div class="shell__glow shell__glow--left"></div>
                <div class="shell__glow shell__glow--right"></div>
            </div>

            <div class="shell__content">{children()}</div>
        </div>
    }
}
