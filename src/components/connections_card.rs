//! Connections card: Twitch and Shopify connect/reconnect flows plus the
//! setup-progress checklist.
//!
//! Both OAuth flows leave the page entirely, so they go through the
//! injected [`Browser`] capability instead of touching `window` directly.

use leptos::prelude::*;

use crate::net::api::{shopify_auth_url, twitch_login_url};
use crate::net::fetch::FetchState;
use crate::net::types::{Stats, StreamerInfo};
use crate::state::setup::SetupProgress;
use crate::util::browser::Browser;

#[component]
pub fn ConnectionsCard(
    login: Signal<Option<String>>,
    streamer: RwSignal<FetchState<StreamerInfo>>,
    stats: RwSignal<FetchState<Stats>>,
) -> impl IntoView {
    let browser = expect_context::<Browser>();

    let progress = Memo::new(move |_| {
        streamer.with(|s| stats.with(|t| SetupProgress::evaluate(s, t)))
    });

    // Domain field is prefilled from the loaded streamer record.
    let shop_domain = RwSignal::new(String::new());
    let shopify_message = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if let Some(domain) =
            streamer.with(|s| s.data.as_ref().and_then(|i| i.shopify_store_domain.clone()))
        {
            shop_domain.set(domain);
        }
    });

    let twitch_label = move || {
        if progress.get().twitch_connected { "Reconnect Twitch" } else { "Connect Twitch" }
    };
    let shopify_label = move || {
        if progress.get().shopify_connected { "Reconnect Shopify" } else { "Connect Shopify" }
    };

    let twitch_status = move || {
        if progress.get().twitch_connected {
            streamer.with(|s| {
                s.data.as_ref().map_or_else(
                    || "Not connected yet.".to_owned(),
                    |i| format!("Connected as {} ({})", i.display_name, i.twitch_login),
                )
            })
        } else {
            "Not connected yet.".to_owned()
        }
    };
    let shopify_status = move || {
        if progress.get().shopify_connected {
            streamer.with(|s| {
                s.data
                    .as_ref()
                    .and_then(|i| i.shopify_store_domain.clone())
                    .map_or_else(
                        || "Not connected yet.".to_owned(),
                        |domain| format!("Connected to {domain}"),
                    )
            })
        } else {
            "Not connected yet.".to_owned()
        }
    };

    let connect_twitch = {
        let browser = browser.clone();
        move |_| browser.redirect(&twitch_login_url())
    };

    let connect_shopify = move |_| {
        shopify_message.set(None);

        // The OAuth flow needs to know whose store this is.
        let effective_login = streamer
            .with(|s| s.data.as_ref().map(|i| i.twitch_login.clone()))
            .or_else(|| login.get());
        let Some(effective_login) = effective_login else {
            shopify_message.set(Some("Connect Twitch first so we know who you are.".to_owned()));
            return;
        };

        let field = shop_domain.get();
        let domain = if field.trim().is_empty() {
            browser.prompt("Enter your Shopify store domain (e.g. mystore.myshopify.com)")
        } else {
            Some(field)
        };
        let Some(domain) = domain.filter(|d| !d.trim().is_empty()) else {
            return;
        };

        browser.redirect(&shopify_auth_url(&effective_login, &domain));
    };

    view! {
        <div class="card connections-card">
            <div class="card__header">
                <h2 class="card__title">"Connections"</h2>
                <p class="card__description">
                    "Make sure Twitch and Shopify are connected so Dropify can drop codes live on stream."
                </p>
            </div>

            <div class="card__content">
                <div class="connections-card__service">
                    <div class="connections-card__service-row">
                        <div class="connections-card__service-mark connections-card__service-mark--twitch">
                            "T"
                        </div>
                        <div class="connections-card__service-info">
                            <p class="connections-card__service-name">"Twitch"</p>
                            <p class="connections-card__service-status">{twitch_status}</p>
                        </div>
                        <ConnectionPill
                            connected=Signal::derive(move || progress.get().twitch_connected)
                        />
                    </div>
                    <p class="connections-card__service-hint">
                        "Dropify listens for commands like "
                        <code class="connections-card__command">"!drop"</code>
                        " in your Twitch chat."
                    </p>
                    <button class="btn btn--primary connections-card__connect" on:click=connect_twitch>
                        {twitch_label}
                    </button>
                </div>

                <div class="connections-card__service">
                    <div class="connections-card__service-row">
                        <div class="connections-card__service-mark connections-card__service-mark--shopify">
                            "S"
                        </div>
                        <div class="connections-card__service-info">
                            <p class="connections-card__service-name">"Shopify"</p>
                            <p class="connections-card__service-status">{shopify_status}</p>
                        </div>
                        <ConnectionPill
                            connected=Signal::derive(move || progress.get().shopify_connected)
                        />
                    </div>

                    <Show when=move || !progress.get().shopify_connected>
                        <label class="connections-card__domain">
                            "Shopify store domain"
                            <input
                                type="text"
                                class="connections-card__domain-input"
                                placeholder="mystore.myshopify.com"
                                prop:value=move || shop_domain.get()
                                on:input=move |ev| shop_domain.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    {move || {
                        shopify_message
                            .get()
                            .map(|msg| view! { <p class="connections-card__message">{msg}</p> })
                    }}

                    <button class="btn btn--secondary connections-card__connect" on:click=connect_shopify>
                        {shopify_label}
                    </button>
                    <p class="connections-card__service-hint">
                        "Once Twitch and Shopify are connected, your "
                        <code class="connections-card__command">"!discount"</code> " and "
                        <code class="connections-card__command">"!drop"</code>
                        " commands are ready to go."
                    </p>
                </div>

                <div class="connections-card__progress">
                    <p class="connections-card__progress-title">"Setup progress"</p>
                    <ol class="connections-card__steps">
                        <SetupStep
                            number=1
                            done=Signal::derive(move || progress.get().twitch_connected)
                            label="Connect Twitch"
                        />
                        <SetupStep
                            number=2
                            done=Signal::derive(move || progress.get().shopify_connected)
                            label="Connect Shopify"
                        />
                        <SetupStep
                            number=3
                            done=Signal::derive(move || progress.get().test_drop_done)
                            label="Run a test drop"
                        />
                        <Show when=move || progress.get().test_drop_done>
                            <span class="connections-card__step-note">
                                {move || format!("({} drops today)", progress.get().drops_today)}
                            </span>
                        </Show>
                    </ol>
                </div>
            </div>
        </div>
    }
}

/// Small connected/not-connected pill with a status dot.
#[component]
fn ConnectionPill(connected: Signal<bool>) -> impl IntoView {
    view! {
        <span class="connections-card__pill" class:connections-card__pill--ok=move || connected.get()>
            <span class="connections-card__dot"></span>
            {move || if connected.get() { "Connected" } else { "Not connected" }}
        </span>
    }
}

/// One checklist row: shows its number until the step completes.
#[component]
fn SetupStep(number: u8, done: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <li class="connections-card__step" class:connections-card__step--done=move || done.get()>
            <span class="connections-card__step-marker">
                {move || if done.get() { "\u{2713}".to_owned() } else { number.to_string() }}
            </span>
            {label}
        </li>
    }
}
