//! Stream performance card: today's drop/order counters and value totals.

use leptos::prelude::*;

use crate::net::fetch::FetchState;
use crate::net::types::Stats;
use crate::util::format::{format_currency, format_number, format_percent, format_time};

#[component]
pub fn StatsCard(
    login: Signal<Option<String>>,
    stats: RwSignal<FetchState<Stats>>,
) -> impl IntoView {
    let loading = move || stats.with(|s| s.loading);
    let snapshot = move || stats.with(|s| s.data.clone());

    let updated_at = move || {
        snapshot().map(|s| format!("Updated {}", format_time(&s.period.now)))
    };

    let channel = move || login.get().unwrap_or_else(|| "this channel".to_owned());

    view! {
        <div class="card stats-card">
            <div class="card__header stats-card__header">
                <div>
                    <h2 class="card__title">"Stream performance"</h2>
                    <p class="card__description">"How your drops are turning into orders."</p>
                </div>
                {move || updated_at().map(|t| view! { <span class="stats-card__updated">{t}</span> })}
            </div>

            <div class="card__content">
                <Show when=loading>
                    <p class="stats-card__placeholder">"Loading stats\u{2026}"</p>
                </Show>

                <Show when=move || !loading() && snapshot().is_none()>
                    <p class="stats-card__placeholder">
                        "No stats yet for " <span class="stats-card__channel">{channel}</span>
                        ". Once viewers start using "
                        <code class="stats-card__command">"!discount"</code>
                        " and those codes are redeemed on Shopify, we'll show performance here."
                    </p>
                </Show>

                {move || {
                    (!loading())
                        .then(snapshot)
                        .flatten()
                        .map(|s| {
                            view! {
                                <div class="stats-card__metrics">
                                    <StatTile
                                        label="Drops today"
                                        value=format_number(s.drops_today as f64)
                                        hint="Viewers who claimed a code."
                                    />
                                    <StatTile
                                        label="Orders today"
                                        value=format_number(s.redemptions_today as f64)
                                        hint="Shopify orders using Dropify codes."
                                    />
                                    <StatTile
                                        label="Conversion rate"
                                        value=format_percent(s.redemption_rate)
                                        hint="Orders / drops for today."
                                    />
                                    <StatTile
                                        label="Discount given today"
                                        value=format_currency(s.discount_value_today)
                                        hint="Total discount value applied today."
                                    />
                                    <StatTile
                                        label="Revenue influenced (24h)"
                                        value=format_currency(s.revenue_24h)
                                        hint="Total discount value in the last 24 hours."
                                    />
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn StatTile(label: &'static str, value: String, hint: &'static str) -> impl IntoView {
    view! {
        <div class="stats-card__tile">
            <div class="stats-card__tile-label">{label}</div>
            <div class="stats-card__tile-value">{value}</div>
            <div class="stats-card__tile-hint">{hint}</div>
        </div>
    }
}
