use serde_json::json;

use super::*;
use crate::net::types::StreamerInfo;

// =============================================================
// Login normalization
// =============================================================

#[test]
fn normalize_login_trims_and_rejects_empty() {
    assert_eq!(normalize_login(Some("  ninja ".to_owned())).as_deref(), Some("ninja"));
    assert_eq!(normalize_login(Some("   ".to_owned())), None);
    assert_eq!(normalize_login(Some(String::new())), None);
    assert_eq!(normalize_login(None), None);
}

// =============================================================
// OAuth redirect URLs
// =============================================================

#[test]
fn twitch_login_url_points_at_the_auth_endpoint() {
    assert_eq!(twitch_login_url(), format!("{}/api/auth/twitch/login", api_base()));
}

#[test]
fn shopify_auth_url_lowercases_login_and_trims_shop() {
    let url = shopify_auth_url("NinjaStream", "  mystore.myshopify.com ");
    assert_eq!(
        url,
        format!(
            "{}/api/shopify/auth/start?login=ninjastream&shop=mystore.myshopify.com",
            api_base()
        )
    );
}

#[test]
fn shopify_auth_url_escapes_reserved_characters() {
    // A crafted login must not smuggle extra query parameters in.
    let url = shopify_auth_url("bad login", "shop.example&login=evil");
    assert_eq!(
        url,
        format!(
            "{}/api/shopify/auth/start?login=bad%20login&shop=shop.example%26login%3Devil",
            api_base()
        )
    );
}

#[test]
fn encode_escapes_path_components() {
    assert_eq!(encode("ninja"), "ninja");
    assert_eq!(encode("mystore.myshopify.com"), "mystore.myshopify.com");
    assert_eq!(encode("a/b?c=d"), "a%2Fb%3Fc%3Dd");
}

// =============================================================
// Envelope checks
// =============================================================

#[test]
fn check_ok_accepts_a_true_flag() {
    assert!(check_ok(&json!({"ok": true, "streamer": {}})).is_ok());
}

#[test]
fn check_ok_surfaces_the_error_message() {
    let err = check_ok(&json!({"ok": false, "error": "streamer not found"})).unwrap_err();
    assert_eq!(err, FetchError::Api("streamer not found".to_owned()));
}

#[test]
fn check_ok_rejects_a_missing_flag() {
    // The ok-less redemptions variant is not preserved: no flag means failure.
    let err = check_ok(&json!({"redemptions": []})).unwrap_err();
    assert_eq!(err, FetchError::Api("Unknown error".to_owned()));
}

#[test]
fn extract_deserializes_the_named_field() {
    let value = json!({
        "ok": true,
        "streamer": {
            "twitchId": "123",
            "twitchLogin": "ninja",
            "displayName": "Ninja",
            "shopifyConnected": true,
            "shopifyStoreDomain": "ninja.myshopify.com"
        }
    });
    let streamer: StreamerInfo = extract(value, "streamer").unwrap();
    assert_eq!(streamer.twitch_login, "ninja");
    assert!(streamer.shopify_connected);
    assert_eq!(streamer.email, None);
}

#[test]
fn extract_reports_a_missing_field() {
    let err = extract::<StreamerInfo>(json!({"ok": true}), "streamer").unwrap_err();
    assert_eq!(err, FetchError::Decode("missing `streamer` field".to_owned()));
}

#[test]
fn extract_root_ignores_envelope_noise() {
    let value = json!({
        "ok": true,
        "plan": "free_beta",
        "limits": {"viewerDropsPerMonth": 100, "globalDropsPerMonth": null},
        "usage": {"viewerDropsThisMonth": 3, "globalDropsThisMonth": 0},
        "period": {"monthStart": "a", "monthEnd": "b", "now": "c"}
    });
    let plan: crate::net::types::PlanUsage = extract_root(value).unwrap();
    assert_eq!(plan.plan, "free_beta");
    assert_eq!(plan.limits.global_drops_per_month, None);
}
