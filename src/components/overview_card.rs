//! Overview card: connection badges, identity tiles, and today's headline
//! metrics.

use leptos::prelude::*;

use crate::net::fetch::FetchState;
use crate::net::types::{Stats, StreamerInfo};
use crate::util::format::{format_number, format_percent, format_timestamp};

#[component]
pub fn OverviewCard(
    streamer: RwSignal<FetchState<StreamerInfo>>,
    stats: RwSignal<FetchState<Stats>>,
) -> impl IntoView {
    let twitch_connected =
        move || streamer.with(|s| s.data.is_some() && s.error.is_none());
    let shopify_connected = move || {
        streamer.with(|s| s.data.as_ref().is_some_and(|i| i.shopify_connected))
    };
    let store_domain = move || {
        streamer.with(|s| s.data.as_ref().and_then(|i| i.shopify_store_domain.clone()))
    };

    let shopify_badge = move || {
        if shopify_connected() {
            if let Some(domain) = store_domain() {
                return format!("Shopify \u{2022} connected ({domain})");
            }
        }
        "Shopify \u{2022} not connected".to_owned()
    };

    // Headline metrics render `…` while loading and `—` when absent.
    let metric = move |select: fn(&Stats) -> String| {
        stats.with(|s| {
            if s.loading {
                "\u{2026}".to_owned()
            } else {
                s.data.as_ref().map_or_else(|| "\u{2014}".to_owned(), select)
            }
        })
    };

    view! {
        <div class="card overview-card">
            <div class="card__header">
                <h2 class="card__title">"Dropify overview"</h2>
                <p class="card__description">
                    "High-level health of your Twitch and Shopify connections plus today's performance."
                </p>
            </div>

            <div class="card__content">
                <div class="overview-card__badges">
                    <span
                        class="overview-card__badge"
                        class:overview-card__badge--ok=twitch_connected
                    >
                        <span class="overview-card__dot"></span>
                        {move || {
                            if twitch_connected() {
                                "Twitch \u{2022} Connected"
                            } else {
                                "Twitch \u{2022} Not connected"
                            }
                        }}
                    </span>
                    <span
                        class="overview-card__badge"
                        class:overview-card__badge--ok=shopify_connected
                        class:overview-card__badge--warn=move || !shopify_connected()
                    >
                        <span class="overview-card__dot"></span>
                        <span class="overview-card__badge-text">{shopify_badge}</span>
                    </span>
                </div>

                <Show when=move || streamer.with(|s| s.data.is_some())>
                    {move || {
                        streamer
                            .with(|s| s.data.clone())
                            .map(|info| {
                                let connected_at = info
                                    .connected_at
                                    .as_deref()
                                    .map(format_timestamp)
                                    .filter(|t| !t.is_empty())
                                    .unwrap_or_else(|| "Not yet".to_owned());
                                let store = info
                                    .shopify_store_domain
                                    .filter(|_| info.shopify_connected)
                                    .unwrap_or_else(|| "Not connected".to_owned());

                                view! {
                                    <div class="overview-card__tiles">
                                        <OverviewTile label="Twitch login">
                                            {format!("{} ({})", info.display_name, info.twitch_login)}
                                        </OverviewTile>
                                        <OverviewTile label="Shopify store">{store}</OverviewTile>
                                        <OverviewTile label="Connected at">{connected_at}</OverviewTile>
                                    </div>
                                }
                            })
                    }}
                </Show>

                <div class="overview-card__metrics">
                    <OverviewTile label="Active codes today">
                        {move || metric(|s| format_number(s.drops_today as f64))}
                    </OverviewTile>
                    <OverviewTile label="Redemption rate">
                        {move || metric(|s| format_percent(s.redemption_rate))}
                    </OverviewTile>
                    <OverviewTile label="Revenue influenced (24h)">
                        {move || metric(|s| format_number(s.revenue_24h))}
                        <p class="overview-card__hint">"Store currency, last 24 hours."</p>
                    </OverviewTile>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OverviewTile(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="overview-card__tile">
            <p class="overview-card__tile-label">{label}</p>
            <div class="overview-card__tile-value">{children()}</div>
        </div>
    }
}
