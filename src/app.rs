//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::util::browser::Browser;

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
/// Provides the browser capability used by the OAuth connect flows and sets
/// up client-side routing. `/dashboard` is an alias that renders the same
/// page as `/`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Browser::dom());

    view! {
        <Stylesheet id="leptos" href="/pkg/dropify-dashboard.css"/>
        <Title text="Dropify bot \u{2013} Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
