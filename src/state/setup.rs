//! Onboarding checklist derived from the page-level fetches.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use crate::net::fetch::FetchState;
use crate::net::types::{Stats, StreamerInfo};

/// The three setup steps shown on the connections card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetupProgress {
    pub twitch_connected: bool,
    pub shopify_connected: bool,
    pub test_drop_done: bool,
    /// Drops counted today, shown next to the completed test-drop step.
    pub drops_today: u64,
}

impl SetupProgress {
    /// Twitch counts as connected once streamer info loaded without error,
    /// Shopify once the store flag is set, and the test drop once at least
    /// one code went out today.
    pub fn evaluate(streamer: &FetchState<StreamerInfo>, stats: &FetchState<Stats>) -> Self {
        let twitch_connected = streamer.data.is_some() && streamer.error.is_none();
        // Stale streamer data kept around after a failed refetch must not
        // light up the Shopify step either.
        let shopify_connected = twitch_connected
            && streamer
                .data
                .as_ref()
                .is_some_and(|s| s.shopify_connected);
        let drops_today = stats.data.as_ref().map_or(0, |s| s.drops_today);

        Self {
            twitch_connected,
            shopify_connected,
            test_drop_done: drops_today > 0,
            drops_today,
        }
    }
}
