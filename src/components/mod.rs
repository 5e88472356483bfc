//! Presentational dashboard components. One canonical version per card;
//! all data arrives via props or the keyed-fetch helper.

pub mod connections_card;
pub mod drops_card;
pub mod navbar;
pub mod overview_card;
pub mod plan_usage_card;
pub mod redemptions_card;
pub mod settings_card;
pub mod shell;
pub mod stats_card;
