//! Recent redemptions card: storefront orders that used a drop code.

use leptos::prelude::*;

use crate::net::api;
use crate::net::fetch::{CancelToken, keyed_fetch};
use crate::net::types::Redemption;
use crate::util::format::format_timestamp;

#[component]
pub fn RedemptionsCard(login: Signal<Option<String>>, limit: u32) -> impl IntoView {
    let redemptions = keyed_fetch(login, move |login, token: CancelToken| {
        api::fetch_recent_redemptions(login, limit, token)
    });

    let rows = move || redemptions.with(|r| r.data.clone());
    let loading = move || redemptions.with(|r| r.loading);
    let error = move || redemptions.with(|r| r.error.clone());
    let is_empty = move || !loading() && error().is_none() && rows().is_some_and(|r| r.is_empty());

    view! {
        <div class="card list-card redemptions-card">
            <div class="card__header list-card__header">
                <div class="list-card__heading">
                    <span class="list-card__icon redemptions-card__icon">"\u{2705}"</span>
                    <h2 class="card__title">"Recent redemptions"</h2>
                </div>
                <span class="list-card__limit">{format!("Showing last {limit}")}</span>
            </div>

            <div class="card__content">
                <Show when=loading>
                    <p class="list-card__placeholder">"Loading recent redemptions\u{2026}"</p>
                </Show>

                {move || {
                    (!loading())
                        .then(error)
                        .flatten()
                        .map(|msg| view! { <p class="list-card__error">{msg}</p> })
                }}

                <Show when=is_empty>
                    <p class="list-card__placeholder">
                        "No redemptions yet. Once viewers start using their codes in your Shopify store, they'll show up here."
                    </p>
                </Show>

                {move || {
                    (!loading())
                        .then(rows)
                        .flatten()
                        .filter(|rows| !rows.is_empty())
                        .map(|rows| {
                            view! {
                                <div class="list-card__rows">
                                    {rows
                                        .into_iter()
                                        .enumerate()
                                        .map(|(idx, row)| {
                                            view! { <RedemptionRow row=row highlight=idx == 0/> }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn RedemptionRow(row: Redemption, highlight: bool) -> impl IntoView {
    let discount = row.discount_label();
    let timestamp = format_timestamp(&row.created_at);
    let order = format!("Order #{}", row.order_number);

    view! {
        <div class="list-card__row redemptions-card__row" class:list-card__row--highlight=highlight>
            <div class="list-card__row-top">
                <div class="list-card__row-who">
                    <span class="list-card__row-name">{row.customer_email.clone()}</span>
                    <span class="redemptions-card__tag">"Customer"</span>
                </div>
                <span class="list-card__row-time">{timestamp}</span>
            </div>

            <div class="redemptions-card__order">
                <span>{order}</span>
                <span class="redemptions-card__store">{row.shopify_store_domain.clone()}</span>
            </div>

            <div class="list-card__row-code">
                <div>
                    <div class="list-card__row-code-label">"Code"</div>
                    <code class="redemptions-card__code">{row.discount_code.clone()}</code>
                </div>
                <span class="list-card__row-discount">{discount}</span>
            </div>
        </div>
    }
}
