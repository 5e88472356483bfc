//! Channel behavior settings: the one mutable record on the dashboard.
//!
//! The form follows read-modify-write: load seeds a draft (defaults fill
//! anything the server omits), edits touch only the in-memory draft, and a
//! save PATCHes the full draft. On success the server's echoed record
//! replaces the draft so any normalization or clamping it applied wins.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

/// How an issued discount is denominated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    FixedAmount,
    // serde requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    Percentage,
}

impl DiscountType {
    /// Map a `<select>` value; anything unrecognized falls back to
    /// percentage, matching the wire default.
    pub fn from_input(value: &str) -> Self {
        if value == "fixed_amount" { Self::FixedAmount } else { Self::Percentage }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::FixedAmount => "fixed_amount",
        }
    }
}

/// Behavior configuration for a channel, round-tripped through
/// `GET`/`PATCH /api/settings/{login}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Master switch; when off the bot drops no codes at all.
    pub enabled: bool,
    pub discount_type: DiscountType,
    /// 10 means 10% off for percentage, 10 in store currency for fixed.
    pub discount_value: f64,
    /// Issued codes start with this, e.g. `DROP-ABC123`.
    pub discount_prefix: String,
    /// 0 means unlimited.
    pub max_per_viewer_per_stream: u32,
    /// Minimum time between drops across all viewers.
    pub global_cooldown_seconds: u32,
    /// Only discount carts at or above this subtotal (store currency).
    pub order_min_subtotal: f64,
    pub auto_enable_on_stream_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            discount_prefix: "DROP-".to_owned(),
            max_per_viewer_per_stream: 1,
            global_cooldown_seconds: 120,
            order_min_subtotal: 0.0,
            auto_enable_on_stream_start: false,
        }
    }
}

/// Coerce numeric text-input contents; anything unparseable becomes 0.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Integer flavor of [`parse_amount`] for the count/seconds fields.
pub fn parse_count(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}
