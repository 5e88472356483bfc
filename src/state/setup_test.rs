use super::*;
use crate::net::fetch::FetchError;

fn streamer(shopify: bool) -> StreamerInfo {
    serde_json::from_value(serde_json::json!({
        "twitchId": "123",
        "twitchLogin": "ninja",
        "displayName": "Ninja",
        "shopifyConnected": shopify
    }))
    .unwrap()
}

fn stats(drops_today: u64) -> Stats {
    serde_json::from_value(serde_json::json!({
        "dropsToday": drops_today,
        "redemptionsToday": 0,
        "redemptionRate": 0.0,
        "revenue24h": 0.0,
        "discountValueToday": 0.0,
        "period": {"startOfToday": "", "since24h": "", "now": ""}
    }))
    .unwrap()
}

fn loaded<T>(data: T) -> FetchState<T> {
    let mut state = FetchState::default();
    let ticket = state.begin();
    state.settle(ticket, Ok(data));
    state
}

#[test]
fn nothing_loaded_means_nothing_complete() {
    let progress = SetupProgress::evaluate(&FetchState::default(), &FetchState::default());
    assert_eq!(progress, SetupProgress::default());
}

#[test]
fn twitch_step_completes_once_streamer_info_loads() {
    let progress = SetupProgress::evaluate(&loaded(streamer(false)), &FetchState::default());
    assert!(progress.twitch_connected);
    assert!(!progress.shopify_connected);
}

#[test]
fn a_failed_streamer_fetch_does_not_count_as_connected() {
    let mut state = loaded(streamer(true));
    let ticket = state.begin();
    state.settle(ticket, Err(FetchError::Api("gone".to_owned())));

    let progress = SetupProgress::evaluate(&state, &FetchState::default());
    assert!(!progress.twitch_connected);
    assert!(!progress.shopify_connected);
}

#[test]
fn shopify_step_follows_the_store_flag() {
    let progress = SetupProgress::evaluate(&loaded(streamer(true)), &FetchState::default());
    assert!(progress.shopify_connected);
}

#[test]
fn test_drop_step_is_incomplete_at_zero_drops() {
    let progress = SetupProgress::evaluate(&loaded(streamer(true)), &loaded(stats(0)));
    assert!(!progress.test_drop_done);
    assert_eq!(progress.drops_today, 0);
}

#[test]
fn test_drop_step_completes_with_any_drop_today() {
    let progress = SetupProgress::evaluate(&loaded(streamer(true)), &loaded(stats(3)));
    assert!(progress.test_drop_done);
    assert_eq!(progress.drops_today, 3);
}
