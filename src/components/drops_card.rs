//! Recent drops card: the latest issued discount codes, newest first.

use leptos::prelude::*;

use crate::net::api;
use crate::net::fetch::{CancelToken, keyed_fetch};
use crate::net::types::{Drop, DropKind, filter_drops};
use crate::util::format::format_timestamp;

#[component]
pub fn DropsCard(
    login: Signal<Option<String>>,
    limit: u32,
    /// `None` lists every drop regardless of kind.
    kind: Option<DropKind>,
) -> impl IntoView {
    let drops = keyed_fetch(login, move |login, token: CancelToken| {
        api::fetch_recent_drops(login, limit, token)
    });

    let title = match kind {
        Some(DropKind::Global) => "Recent global drops",
        _ => "Recent drops",
    };

    let rows = move || drops.with(|d| d.data.as_deref().map(|all| filter_drops(all, kind)));
    let loading = move || drops.with(|d| d.loading);
    let error = move || drops.with(|d| d.error.clone());
    let is_empty = move || !loading() && error().is_none() && rows().is_some_and(|r| r.is_empty());

    let empty_hint = match kind {
        Some(DropKind::Global) => ("No global drops yet. Trigger one with ", "!drop 10"),
        _ => ("No viewer discounts yet. Let viewers try ", "!discount"),
    };

    view! {
        <div class="card list-card drops-card">
            <div class="card__header list-card__header">
                <div class="list-card__heading">
                    <span class="list-card__icon drops-card__icon">"\u{1F381}"</span>
                    <h2 class="card__title">{title}</h2>
                </div>
                <span class="list-card__limit">{format!("Showing last {limit}")}</span>
            </div>

            <div class="card__content">
                <Show when=loading>
                    <p class="list-card__placeholder">"Loading recent drops\u{2026}"</p>
                </Show>

                {move || {
                    (!loading())
                        .then(error)
                        .flatten()
                        .map(|msg| view! { <p class="list-card__error">{msg}</p> })
                }}

                <Show when=is_empty>
                    <p class="list-card__placeholder">
                        {empty_hint.0} <code class="list-card__command">{empty_hint.1}</code> "."
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
                                            view! { <DropRow row=row highlight=idx == 0/> }
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

/// One issued code. Global drops carry a distinct badge and hide the
/// viewer handle.
#[component]
fn DropRow(row: Drop, highlight: bool) -> impl IntoView {
    let is_global = row.kind == DropKind::Global;
    let name = if is_global { "Global drop".to_owned() } else { row.viewer_name().to_owned() };
    let handle = (!is_global).then(|| format!("@{}", row.viewer_login));
    let discount = row.discount_label();
    let timestamp = format_timestamp(&row.created_at);

    view! {
        <div class="list-card__row drops-card__row" class:list-card__row--highlight=highlight>
            <div class="list-card__row-top">
                <div class="list-card__row-who">
                    <span class="list-card__row-name">{name}</span>
                    <span
                        class="drops-card__kind"
                        class:drops-card__kind--global=is_global
                    >
                        {if is_global { "Global" } else { "Viewer" }}
                    </span>
                </div>
                <span class="list-card__row-time">{timestamp}</span>
            </div>

            {handle.map(|h| view! { <div class="drops-card__handle">{h}</div> })}

            <div class="list-card__row-code">
                <div class="list-card__row-code-label">"Code"</div>
                <code class="drops-card__code">{row.discount_code.clone()}</code>
                {discount.map(|d| view! { <p class="list-card__row-discount">{d}</p> })}
            </div>
        </div>
    }
}
