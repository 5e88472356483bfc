//! Plan & usage card: monthly drop allowances with progress bars.

use leptos::prelude::*;

use crate::net::api;
use crate::net::fetch::keyed_fetch;

#[component]
pub fn PlanUsageCard(login: Signal<Option<String>>) -> impl IntoView {
    let plan = keyed_fetch(login, api::fetch_plan_usage);

    let badge = move || {
        plan.with(|p| {
            p.data
                .as_ref()
                .map_or_else(|| "\u{2014}".to_owned(), |u| u.plan_label().to_owned())
        })
    };

    view! {
        <div class="card plan-card">
            <div class="card__header plan-card__header">
                <div>
                    <p class="plan-card__title">"Plan & usage this month"</p>
                    <p class="card__description">
                        "Free beta plan with monthly limits on viewer & global drops."
                    </p>
                </div>
                <span class="plan-card__badge">{badge}</span>
            </div>

            <div class="plan-card__divider"></div>

            <div class="card__content plan-card__meters">
                {move || {
                    plan.with(|p| p.data.clone())
                        .map(|usage| {
                            view! {
                                <UsageMeter
                                    label="Viewer drops"
                                    summary=usage.viewer_label()
                                    percent=usage.viewer_percent()
                                    hint_code="!discount"
                                    hint=" Personal codes viewers claim with "
                                />
                                <UsageMeter
                                    label="Global drops"
                                    summary=usage.global_label()
                                    percent=usage.global_percent()
                                    hint_code="!drop 10"
                                    hint=" Stream-wide codes you trigger with "
                                />
                            }
                        })
                }}
            </div>

            <div class="plan-card__footer">
                <span>"Need more drops or higher limits?"</span>
                <a
                    class="plan-card__upgrade"
                    href="https://dropifybot.com#pricing"
                    target="_blank"
                    rel="noreferrer"
                >
                    "Upgrade your plan on dropifybot.com"
                </a>
            </div>

            <Show when=move || plan.with(|p| p.loading)>
                <p class="plan-card__note">"Loading usage\u{2026}"</p>
            </Show>
            {move || {
                plan.with(|p| p.error.clone())
                    .map(|msg| view! { <p class="plan-card__error">{msg}</p> })
            }}
        </div>
    }
}

/// One usage row: label, `used/limit` summary, and a clamped progress bar.
/// Unlimited plans show an empty bar rather than a percentage of nothing.
#[component]
fn UsageMeter(
    label: &'static str,
    summary: String,
    percent: u32,
    hint: &'static str,
    hint_code: &'static str,
) -> impl IntoView {
    let width = format!("width: {percent}%");

    view! {
        <div class="plan-card__meter">
            <div class="plan-card__meter-head">
                <span class="plan-card__meter-label">{label}</span>
                <span class="plan-card__meter-summary">{summary}</span>
            </div>
            <div class="plan-card__meter-track">
                <div class="plan-card__meter-fill" style=width></div>
            </div>
            <p class="plan-card__meter-hint">
                {hint} <code class="plan-card__command">{hint_code}</code> "."
            </p>
        </div>
    }
}
