//! REST helpers for the Dropify API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! caller's [`CancelToken`] so a superseded request is aborted in flight.
//! Server-side (SSR): stubs, since effects never run during server
//! rendering; they exist only to keep the cfg surface compiling.
//!
//! Every response goes through two checks: transport (non-2xx is an error)
//! and the application envelope (`ok` must be `true`, `error` carries the
//! message). The redemptions endpoint historically shipped without the `ok`
//! flag; this client standardizes on the enveloped shape.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::fetch::{CancelToken, FetchError};
use super::types::{Drop, PlanUsage, Redemption, Stats, StreamerInfo};
use crate::state::settings::Settings;

/// Base URL of the Dropify API, overridable at compile time.
pub fn api_base() -> &'static str {
    option_env!("DROPIFY_API_URL").unwrap_or("https://api.dropifybot.com")
}

/// Trim the `login` query parameter; an empty or whitespace value means no
/// channel is selected and no request may be issued.
pub fn normalize_login(raw: Option<String>) -> Option<String> {
    let login = raw?.trim().to_owned();
    if login.is_empty() { None } else { Some(login) }
}

/// Everything but RFC 3986 unreserved characters gets escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode one path or query component. Logins come straight from
/// user-editable URL parameters, so reserved characters must not pass
/// through into paths or query strings as-is.
fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// URL that starts the Twitch OAuth flow (full browser redirect).
pub fn twitch_login_url() -> String {
    format!("{}/api/auth/twitch/login", api_base())
}

/// URL that starts the Shopify OAuth flow for `login`'s store.
/// Logins are matched case-insensitively server-side, so lowercase here.
pub fn shopify_auth_url(login: &str, shop: &str) -> String {
    format!(
        "{}/api/shopify/auth/start?login={}&shop={}",
        api_base(),
        encode(&login.to_lowercase()),
        encode(shop.trim())
    )
}

/// Envelope check: `ok` must be present and `true`, otherwise the `error`
/// field becomes the user-facing message.
fn check_ok(value: &Value) -> Result<(), FetchError> {
    if value.get("ok").and_then(Value::as_bool) == Some(true) {
        return Ok(());
    }
    let message = value
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_owned();
    Err(FetchError::Api(message))
}

/// Pull `field` out of a checked envelope and deserialize it.
fn extract<T: DeserializeOwned>(mut value: Value, field: &str) -> Result<T, FetchError> {
    let Some(inner) = value.get_mut(field).map(Value::take) else {
        return Err(FetchError::Decode(format!("missing `{field}` field")));
    };
    serde_json::from_value(inner).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Deserialize the whole envelope object (for endpoints that splay their
/// payload across the root, like `/api/plan`).
fn extract_root<T: DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn into_fetch_error(err: gloo_net::Error) -> FetchError {
    let message = err.to_string();
    if message.contains("AbortError") {
        FetchError::Cancelled
    } else {
        FetchError::Network(message)
    }
}

/// GET `url` as JSON with both error layers applied up to the envelope.
#[cfg(feature = "hydrate")]
async fn get_json(url: &str, token: &CancelToken) -> Result<Value, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .abort_signal(token.signal())
        .send()
        .await
        .map_err(into_fetch_error)?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(FetchError::Http { status: resp.status(), body });
    }
    resp.json::<Value>().await.map_err(into_fetch_error)
}

/// Fetch connection identity and status for a channel.
pub async fn fetch_streamer_info(
    login: String,
    token: CancelToken,
) -> Result<StreamerInfo, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/streamers/{}/info", api_base(), encode(&login));
        let value = get_json(&url, &token).await?;
        check_ok(&value)?;
        return extract(value, "streamer");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (login, token);
        Err(FetchError::Cancelled)
    }
}

/// Fetch today's / last-24h metrics for a channel.
pub async fn fetch_stats(login: String, token: CancelToken) -> Result<Stats, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/stats/{}", api_base(), encode(&login));
        let value = get_json(&url, &token).await?;
        check_ok(&value)?;
        return extract(value, "stats");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (login, token);
        Err(FetchError::Cancelled)
    }
}

/// Fetch plan limits and usage for the current billing month.
pub async fn fetch_plan_usage(login: String, token: CancelToken) -> Result<PlanUsage, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/plan/{}", api_base(), encode(&login));
        let value = get_json(&url, &token).await?;
        check_ok(&value)?;
        return extract_root(value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (login, token);
        Err(FetchError::Cancelled)
    }
}

/// Fetch the most recent issued drop codes, newest first.
pub async fn fetch_recent_drops(
    login: String,
    limit: u32,
    token: CancelToken,
) -> Result<Vec<Drop>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/drops/{}/recent?limit={limit}", api_base(), encode(&login));
        let value = get_json(&url, &token).await?;
        check_ok(&value)?;
        return extract(value, "drops");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (login, limit, token);
        Err(FetchError::Cancelled)
    }
}

/// Fetch the most recent order redemptions, newest first.
pub async fn fetch_recent_redemptions(
    login: String,
    limit: u32,
    token: CancelToken,
) -> Result<Vec<Redemption>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/redemptions/{}?limit={limit}", api_base(), encode(&login));
        let value = get_json(&url, &token).await?;
        check_ok(&value)?;
        return extract(value, "redemptions");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (login, limit, token);
        Err(FetchError::Cancelled)
    }
}

/// Load the channel's behavior settings.
pub async fn load_settings(login: String, token: CancelToken) -> Result<Settings, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/settings/{}", api_base(), encode(&login));
        let value = get_json(&url, &token).await?;
        check_ok(&value)?;
        return extract(value, "settings");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (login, token);
        Err(FetchError::Cancelled)
    }
}

/// PATCH the full settings draft. On success the server echoes the
/// canonical record (it may normalize or clamp values), which the caller
/// must adopt as its new local state.
pub async fn save_settings(login: String, draft: Settings) -> Result<Settings, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/settings/{}", api_base(), encode(&login));
        let resp = gloo_net::http::Request::patch(&url)
            .json(&draft)
            .map_err(into_fetch_error)?
            .send()
            .await
            .map_err(into_fetch_error)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Http { status: resp.status(), body });
        }
        let value = resp.json::<Value>().await.map_err(into_fetch_error)?;
        check_ok(&value)?;
        return extract(value, "settings");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (login, draft);
        Err(FetchError::Cancelled)
    }
}
