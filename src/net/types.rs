//! API response types shared across the dashboard.
//!
//! Every record here is an immutable snapshot mirrored one-to-one from the
//! Dropify API's camelCase JSON. Cards replace a snapshot wholesale on each
//! fetch; nothing is patched incrementally.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Identity and connection flags for the channel's Twitch and Shopify
/// accounts, from `GET /api/streamers/{login}/info`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamerInfo {
    pub twitch_id: String,
    pub twitch_login: String,
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub connected_at: Option<String>,
    #[serde(default)]
    pub shopify_connected: bool,
    #[serde(default)]
    pub shopify_store_domain: Option<String>,
    #[serde(default)]
    pub shopify_api_version: Option<String>,
}

/// Rolling day / 24h counters from `GET /api/stats/{login}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub drops_today: u64,
    pub redemptions_today: u64,
    /// Orders per drop for today, in `0..=1`.
    pub redemption_rate: f64,
    #[serde(rename = "revenue24h")]
    pub revenue_24h: f64,
    pub discount_value_today: f64,
    pub period: StatsPeriod,
}

/// Window boundaries for a [`Stats`] snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPeriod {
    pub start_of_today: String,
    #[serde(rename = "since24h")]
    pub since_24h: String,
    pub now: String,
}

/// Plan name, limits, and usage for the current billing month, from
/// `GET /api/plan/{login}`. The API splays these across the envelope root,
/// so this deserializes the whole response object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanUsage {
    pub plan: String,
    pub limits: PlanLimits,
    pub usage: PlanCounters,
    pub period: PlanPeriod,
}

/// Monthly drop allowances. `None` means the plan has no limit.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLimits {
    #[serde(default)]
    pub viewer_drops_per_month: Option<u64>,
    #[serde(default)]
    pub global_drops_per_month: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCounters {
    pub viewer_drops_this_month: u64,
    pub global_drops_this_month: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPeriod {
    pub month_start: String,
    pub month_end: String,
    pub now: String,
}

impl PlanUsage {
    /// Human label for the plan badge.
    pub fn plan_label(&self) -> &str {
        if self.plan == "free_beta" { "Free" } else { &self.plan }
    }

    pub fn viewer_percent(&self) -> u32 {
        usage_percent(self.usage.viewer_drops_this_month, self.limits.viewer_drops_per_month)
    }

    pub fn global_percent(&self) -> u32 {
        usage_percent(self.usage.global_drops_this_month, self.limits.global_drops_per_month)
    }

    pub fn viewer_label(&self) -> String {
        usage_label(self.usage.viewer_drops_this_month, self.limits.viewer_drops_per_month)
    }

    pub fn global_label(&self) -> String {
        usage_label(self.usage.global_drops_this_month, self.limits.global_drops_per_month)
    }
}

/// Progress-bar width in percent, clamped to 100. A `None` or zero limit
/// means unlimited, which renders as an empty bar rather than dividing.
pub fn usage_percent(used: u64, limit: Option<u64>) -> u32 {
    match limit {
        Some(limit) if limit > 0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
            let pct = ((used as f64 / limit as f64) * 100.0).round() as u32;
            pct.min(100)
        }
        _ => 0,
    }
}

/// `"3/100 used"` for limited plans, `"3 used • No limit"` otherwise.
pub fn usage_label(used: u64, limit: Option<u64>) -> String {
    match limit {
        Some(limit) => format!("{used}/{limit} used"),
        None => format!("{used} used \u{2022} No limit"),
    }
}

/// Whether a drop went to one viewer or the whole channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropKind {
    Global,
    // serde requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    Viewer,
}

/// One issued discount code, from `GET /api/drops/{login}/recent`.
/// Rows arrive newest-first and are rendered in API order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drop {
    pub id: String,
    #[serde(default)]
    pub kind: DropKind,
    pub viewer_login: String,
    #[serde(default)]
    pub viewer_display_name: Option<String>,
    pub discount_code: String,
    #[serde(default)]
    pub discount_type: Option<String>,
    #[serde(default)]
    pub discount_value: Option<f64>,
    pub created_at: String,
}

impl Drop {
    /// Name shown on the row: the display name when present, the login
    /// otherwise; global drops are labelled as such by the card.
    pub fn viewer_name(&self) -> &str {
        self.viewer_display_name.as_deref().unwrap_or(&self.viewer_login)
    }

    /// `"10% off"` / `"10 off"`, when the API included the discount shape.
    pub fn discount_label(&self) -> Option<String> {
        let value = self.discount_value?;
        let kind = self.discount_type.as_deref()?;
        Some(if kind == "percentage" {
            format!("{value}% off")
        } else {
            format!("{value} off")
        })
    }
}

/// Keep only drops of `kind`, or everything when `kind` is `None`.
pub fn filter_drops(drops: &[Drop], kind: Option<DropKind>) -> Vec<Drop> {
    match kind {
        None => drops.to_vec(),
        Some(kind) => drops.iter().filter(|d| d.kind == kind).cloned().collect(),
    }
}

/// One storefront order that used a drop code, from
/// `GET /api/redemptions/{login}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    pub id: String,
    pub order_number: String,
    pub order_id: String,
    pub discount_code: String,
    /// The API returns the amount as a string.
    pub discount_amount: String,
    pub discount_type: String,
    pub customer_email: String,
    pub customer_id: String,
    pub shopify_store_domain: String,
    pub created_at: String,
}

impl Redemption {
    pub fn discount_label(&self) -> String {
        if self.discount_type.eq_ignore_ascii_case("percentage") {
            format!("{}% off", self.discount_amount)
        } else {
            format!("{} off", self.discount_amount)
        }
    }
}
