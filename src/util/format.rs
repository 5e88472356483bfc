//! Display formatting for counters, rates, money, and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::DateTime;

/// Whole number with thousands separators; non-finite values render as 0.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let whole = value.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 { format!("-{grouped}") } else { grouped }
}

/// Rate in `0..=1` as a percentage with one decimal, e.g. `"12.5%"`.
pub fn format_percent(rate: f64) -> String {
    if !rate.is_finite() {
        return "0%".to_owned();
    }
    format!("{:.1}%", rate * 100.0)
}

/// Currency amount with two decimals; zero and non-finite render as an
/// em-dash placeholder since the store currency is unknown client-side.
pub fn format_currency(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "\u{2014}".to_owned();
    }
    format!("{value:.2}")
}

/// RFC 3339 timestamp as `"Mar 04, 2026 18:32"`. Anything unparseable is
/// echoed back rather than hidden; empty input renders empty.
pub fn format_timestamp(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    DateTime::parse_from_rfc3339(iso)
        .map_or_else(|_| iso.to_owned(), |dt| dt.format("%b %d, %Y %H:%M").to_string())
}

/// Just the clock portion, for the "Updated HH:MM" stamp.
pub fn format_time(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map_or_else(|_| iso.to_owned(), |dt| dt.format("%H:%M").to_string())
}

/// Avatar initials from the display name, falling back to the login, then
/// to the product initial.
pub fn initials(login: Option<&str>, display_name: Option<&str>) -> String {
    let source = display_name.or(login).unwrap_or("").trim();
    if source.is_empty() {
        return "D".to_owned();
    }

    let mut words = source.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let second = words.next().and_then(|w| w.chars().next());

    match (first, second) {
        (Some(a), Some(b)) => format!("{}{}", a.to_uppercase(), b.to_uppercase()),
        (Some(a), None) => a.to_uppercase().to_string(),
        _ => "D".to_owned(),
    }
}
