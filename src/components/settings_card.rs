//! Streamer settings card: the read-modify-write form.
//!
//! Loading seeds the draft (defaults fill whatever the server omits);
//! edits touch only the local draft; saving PATCHes the full draft and
//! adopts the server's echoed record so its normalization wins. A failed
//! save keeps the draft so nothing typed is lost.

use leptos::prelude::*;

use crate::net::api;
use crate::net::fetch::keyed_fetch;
use crate::state::settings::{DiscountType, Settings, parse_amount, parse_count};

#[component]
pub fn SettingsCard(login: Signal<Option<String>>) -> impl IntoView {
    let draft = RwSignal::new(Settings::default());
    let saving = RwSignal::new(false);
    let save_error = RwSignal::new(None::<String>);
    let saved_message = RwSignal::new(None::<String>);

    let loaded = keyed_fetch(login, api::load_settings);

    // Adopt each freshly loaded record as the new draft.
    Effect::new(move |_| {
        if let Some(settings) = loaded.with(|s| s.data.clone()) {
            draft.set(settings);
            save_error.set(None);
            saved_message.set(None);
        }
    });

    let touch = move || saved_message.set(None);

    let save = move |_| {
        let Some(login) = login.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            save_error.set(None);
            saved_message.set(None);

            let payload = draft.get_untracked();
            leptos::task::spawn_local(async move {
                match api::save_settings(login, payload).await {
                    Ok(canonical) => {
                        draft.set(canonical);
                        saved_message.set(Some("Settings saved.".to_owned()));
                    }
                    Err(err) => {
                        leptos::logging::warn!("settings save failed: {err}");
                        save_error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = login;
    };

    let connected = move || login.get().is_some();
    let loading = move || loaded.with(|s| s.loading);
    let load_error = move || loaded.with(|s| s.error.clone());
    let form_visible = move || connected() && !loading() && load_error().is_none();

    view! {
        <div class="card settings-card">
            <div class="card__header settings-card__header">
                <div>
                    <h2 class="card__title">"Streamer settings"</h2>
                    <p class="card__description">
                        "Configure how Dropify behaves when your chat uses !drop or !discount."
                    </p>
                </div>
                <Show when=connected>
                    <span class="settings-card__for">
                        "For " <span class="settings-card__login">{move || login.get()}</span>
                    </span>
                </Show>
            </div>

            <div class="card__content">
                <Show when=move || !connected()>
                    <p class="settings-card__placeholder">
                        "Connect with Twitch first to configure Dropify for your channel."
                    </p>
                </Show>

                <Show when=move || connected() && loading()>
                    <p class="settings-card__placeholder">"Loading settings\u{2026}"</p>
                </Show>

                <Show when=move || connected() && !loading() && load_error().is_some()>
                    <p class="settings-card__error">{load_error}</p>
                </Show>

                <Show when=form_visible>
                    <SettingsToggle
                        label="Enable Dropify"
                        hint="When disabled, the bot will not drop new discount codes even if viewers use your commands."
                        checked=Signal::derive(move || draft.get().enabled)
                        on_toggle=Callback::new(move |on| {
                            draft.update(|d| d.enabled = on);
                            touch();
                        })
                    />

                    <div class="settings-card__grid">
                        <label class="settings-card__field">
                            "Discount type"
                            <select
                                class="settings-card__input"
                                prop:value=move || draft.get().discount_type.as_str()
                                on:change=move |ev| {
                                    draft
                                        .update(|d| {
                                            d.discount_type = DiscountType::from_input(
                                                &event_target_value(&ev),
                                            );
                                        });
                                    touch();
                                }
                            >
                                <option value="percentage">"Percentage (%)"</option>
                                <option value="fixed_amount">"Fixed amount"</option>
                            </select>
                        </label>

                        <label class="settings-card__field">
                            "Discount value"
                            <input
                                type="number"
                                min="0"
                                class="settings-card__input"
                                prop:value=move || draft.get().discount_value.to_string()
                                on:input=move |ev| {
                                    draft
                                        .update(|d| {
                                            d.discount_value = parse_amount(&event_target_value(&ev));
                                        });
                                    touch();
                                }
                            />
                            <span class="settings-card__hint">
                                "If percentage: 10 = 10% off. If fixed: 10 = 10 in your store's currency."
                            </span>
                        </label>

                        <label class="settings-card__field">
                            "Discount code prefix"
                            <input
                                type="text"
                                class="settings-card__input settings-card__input--mono"
                                prop:value=move || draft.get().discount_prefix
                                on:input=move |ev| {
                                    draft.update(|d| d.discount_prefix = event_target_value(&ev));
                                    touch();
                                }
                            />
                            <span class="settings-card__hint">
                                "Codes will start with this, e.g. "
                                <span class="settings-card__login">
                                    {move || format!("{}ABC123", draft.get().discount_prefix)}
                                </span> "."
                            </span>
                        </label>

                        <label class="settings-card__field">
                            "Minimum order subtotal"
                            <input
                                type="number"
                                min="0"
                                class="settings-card__input"
                                prop:value=move || draft.get().order_min_subtotal.to_string()
                                on:input=move |ev| {
                                    draft
                                        .update(|d| {
                                            d.order_min_subtotal = parse_amount(
                                                &event_target_value(&ev),
                                            );
                                        });
                                    touch();
                                }
                            />
                            <span class="settings-card__hint">
                                "Only apply discounts when the cart subtotal is at least this amount (store currency)."
                            </span>
                        </label>

                        <label class="settings-card__field">
                            "Max redemptions per viewer (per stream)"
                            <input
                                type="number"
                                min="0"
                                class="settings-card__input"
                                prop:value=move || draft.get().max_per_viewer_per_stream.to_string()
                                on:input=move |ev| {
                                    draft
                                        .update(|d| {
                                            d.max_per_viewer_per_stream = parse_count(
                                                &event_target_value(&ev),
                                            );
                                        });
                                    touch();
                                }
                            />
                            <span class="settings-card__hint">
                                "1 is usually enough. Set to 0 for unlimited (not recommended)."
                            </span>
                        </label>

                        <label class="settings-card__field">
                            "Global cooldown (seconds)"
                            <input
                                type="number"
                                min="0"
                                class="settings-card__input"
                                prop:value=move || draft.get().global_cooldown_seconds.to_string()
                                on:input=move |ev| {
                                    draft
                                        .update(|d| {
                                            d.global_cooldown_seconds = parse_count(
                                                &event_target_value(&ev),
                                            );
                                        });
                                    touch();
                                }
                            />
                            <span class="settings-card__hint">
                                "Minimum time between new discount drops across all viewers."
                            </span>
                        </label>
                    </div>

                    <SettingsToggle
                        label="Auto-enable when you go live"
                        hint="If enabled, Dropify will automatically start dropping discounts when your stream is live (once the bot is in your channel)."
                        checked=Signal::derive(move || draft.get().auto_enable_on_stream_start)
                        on_toggle=Callback::new(move |on| {
                            draft.update(|d| d.auto_enable_on_stream_start = on);
                            touch();
                        })
                    />
                </Show>
            </div>

            <div class="card__footer settings-card__footer">
                <span class="settings-card__footnote">
                    "These settings control how Dropify behaves in your channel."
                </span>
                <div class="settings-card__actions">
                    {move || {
                        saved_message
                            .get()
                            .map(|msg| view! { <span class="settings-card__saved">{msg}</span> })
                    }}
                    {move || {
                        save_error
                            .get()
                            .map(|msg| view! { <span class="settings-card__error">{msg}</span> })
                    }}
                    <button
                        class="btn btn--primary"
                        disabled=move || !connected() || saving.get()
                        on:click=save
                    >
                        {move || if saving.get() { "Saving\u{2026}" } else { "Save settings" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Checkbox-backed toggle row with a label and explanatory hint.
#[component]
fn SettingsToggle(
    label: &'static str,
    hint: &'static str,
    checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="settings-card__toggle-row">
            <div>
                <div class="settings-card__toggle-label">{label}</div>
                <div class="settings-card__hint">{hint}</div>
            </div>
            <label class="settings-card__switch">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
                <span
                    class="settings-card__switch-track"
                    class:settings-card__switch-track--on=move || checked.get()
                ></span>
            </label>
        </div>
    }
}
