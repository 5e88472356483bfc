use super::*;

// =============================================================
// Defaults and key-absent behavior
// =============================================================

#[test]
fn default_state_is_empty_placeholder() {
    let s = FetchState::<u32>::default();
    assert!(s.data.is_none());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn clear_drops_data_and_error() {
    let mut s = FetchState::default();
    let t = s.begin();
    s.settle(t, Ok(7));
    s.error = Some("stale".to_owned());

    s.clear();
    assert!(s.data.is_none());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn clear_invalidates_the_inflight_request() {
    let mut s = FetchState::default();
    let t = s.begin();
    s.clear();

    // The late result for the cleared key must not resurface.
    s.settle(t, Ok(7));
    assert!(s.data.is_none());
    assert!(!s.loading);
}

// =============================================================
// Loading and success
// =============================================================

#[test]
fn begin_asserts_loading_and_keeps_prior_data() {
    let mut s = FetchState::default();
    let t = s.begin();
    s.settle(t, Ok(1));

    s.begin();
    assert!(s.loading);
    assert_eq!(s.data, Some(1));
    assert!(s.error.is_none());
}

#[test]
fn success_replaces_data_wholesale() {
    let mut s = FetchState::default();
    let t = s.begin();
    s.settle(t, Ok(vec![1, 2, 3]));
    let t = s.begin();
    s.settle(t, Ok(vec![9]));

    assert_eq!(s.data, Some(vec![9]));
    assert!(!s.loading);
}

// =============================================================
// Key changes racing an in-flight request
// =============================================================

#[test]
fn stale_result_never_overwrites_the_new_key() {
    let mut s = FetchState::default();
    let old = s.begin();
    let new = s.begin();
    s.settle(new, Ok("new"));

    // Old request's late arrival is dropped.
    s.settle(old, Ok("old"));
    assert_eq!(s.data, Some("new"));
}

#[test]
fn stale_error_is_dropped_too() {
    let mut s = FetchState::default();
    let old = s.begin();
    let new = s.begin();
    s.settle(new, Ok(1));
    s.settle(old, Err(FetchError::Api("boom".to_owned())));

    assert!(s.error.is_none());
    assert_eq!(s.data, Some(1));
}

// =============================================================
// Errors and cancellation
// =============================================================

#[test]
fn failure_surfaces_message_and_keeps_prior_data() {
    let mut s = FetchState::default();
    let t = s.begin();
    s.settle(t, Ok(42));

    let t = s.begin();
    s.settle(
        t,
        Err(FetchError::Http { status: 503, body: "unavailable".to_owned() }),
    );

    assert!(!s.loading);
    assert_eq!(s.error.as_deref(), Some("HTTP 503 – unavailable"));
    assert_eq!(s.data, Some(42), "prior data survives a failed reload");
}

#[test]
fn api_layer_failure_is_an_error_even_on_http_200() {
    let mut s = FetchState::<u32>::default();
    let t = s.begin();
    s.settle(t, Err(FetchError::Api("streamer not found".to_owned())));

    assert_eq!(s.error.as_deref(), Some("streamer not found"));
    assert!(!s.loading);
}

#[test]
fn cancellation_is_a_silent_noop() {
    let mut s = FetchState::<u32>::default();
    let t = s.begin();
    s.settle(t, Err(FetchError::Cancelled));

    assert!(s.error.is_none(), "cancellation must never surface as an error");
    assert!(s.data.is_none());
}

#[test]
fn guard_teardown_aborts_without_panicking() {
    // Dropping the guard runs the same abort as an explicit key change.
    let mut guard = AbortGuard::default();
    let _token = guard.renew();
    let _token = guard.renew();
    drop(guard);
}

#[test]
fn a_later_success_clears_a_previous_error() {
    let mut s = FetchState::default();
    let t = s.begin();
    s.settle(
        t,
        Err(FetchError::Http { status: 500, body: String::new() }),
    );
    assert!(s.error.is_some());

    let t = s.begin();
    assert!(s.error.is_none(), "starting a reload clears the message");
    s.settle(t, Ok(5));
    assert_eq!(s.data, Some(5));
    assert!(s.error.is_none());
    assert!(!s.loading);
}
