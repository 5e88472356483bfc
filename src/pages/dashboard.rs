//! The dashboard page: reads the `login` query parameter and assembles the
//! cards around it.
//!
//! Streamer info and stats are fetched once here and shared by the cards
//! that render them; the settings, plan, drops, and redemptions cards own
//! their fetches. Each card degrades to its own error or empty state
//! without taking the page down.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::connections_card::ConnectionsCard;
use crate::components::drops_card::DropsCard;
use crate::components::navbar::DashboardNavbar;
use crate::components::overview_card::OverviewCard;
use crate::components::plan_usage_card::PlanUsageCard;
use crate::components::redemptions_card::RedemptionsCard;
use crate::components::settings_card::SettingsCard;
use crate::components::shell::DashboardShell;
use crate::components::stats_card::StatsCard;
use crate::net::api::{self, normalize_login};
use crate::net::fetch::keyed_fetch;
use crate::net::types::DropKind;

/// How many rows the activity lists ask for.
const RECENT_LIMIT: u32 = 10;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let query = use_query_map();
    let login = Memo::new(move |_| normalize_login(query.with(|q| q.get("login"))));

    let streamer = keyed_fetch(login.into(), api::fetch_streamer_info);
    let stats = keyed_fetch(login.into(), api::fetch_stats);

    // Navbar identity prefers what the API reports over the raw query value.
    let navbar_login = Signal::derive(move || {
        streamer
            .with(|s| s.data.as_ref().map(|i| i.twitch_login.clone()))
            .or_else(|| login.get())
    });
    let navbar_display_name =
        Signal::derive(move || streamer.with(|s| s.data.as_ref().map(|i| i.display_name.clone())));

    view! {
        <DashboardShell>
            <DashboardNavbar login=navbar_login display_name=navbar_display_name/>

            <main class="dashboard">
                <p class="dashboard__intro">
                    "Dropify watches your Twitch chat and creates single-use Shopify "
                    "discounts in real time when viewers trigger commands like "
                    <code class="dashboard__command">"!drop"</code> "."
                </p>

                <section class="dashboard__row dashboard__row--top">
                    <OverviewCard streamer=streamer stats=stats/>
                    <ConnectionsCard login=login.into() streamer=streamer stats=stats/>
                </section>

                <section class="dashboard__row">
                    <PlanUsageCard login=login.into()/>
                </section>

                <section class="dashboard__row">
                    <SettingsCard login=login.into()/>
                </section>

                <Show when=move || login.get().is_some()>
                    <section class="dashboard__row dashboard__row--activity">
                        <DropsCard login=login.into() limit=RECENT_LIMIT kind=Some(DropKind::Viewer)/>
                        <RedemptionsCard login=login.into() limit=RECENT_LIMIT/>
                        <StatsCard login=login.into() stats=stats/>
                    </section>
                </Show>
            </main>
        </DashboardShell>
    }
}
