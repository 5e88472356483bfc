use super::*;

// =============================================================
// Numbers
// =============================================================

#[test]
fn format_number_groups_thousands() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1000.0), "1,000");
    assert_eq!(format_number(1_234_567.0), "1,234,567");
    assert_eq!(format_number(-1234.0), "-1,234");
}

#[test]
fn format_number_rounds_and_survives_non_finite() {
    assert_eq!(format_number(1499.6), "1,500");
    assert_eq!(format_number(f64::NAN), "0");
    assert_eq!(format_number(f64::INFINITY), "0");
}

#[test]
fn format_percent_shows_one_decimal() {
    assert_eq!(format_percent(0.125), "12.5%");
    assert_eq!(format_percent(0.0), "0.0%");
    assert_eq!(format_percent(1.0), "100.0%");
    assert_eq!(format_percent(f64::NAN), "0%");
}

#[test]
fn format_currency_uses_a_placeholder_for_nothing() {
    assert_eq!(format_currency(129.5), "129.50");
    assert_eq!(format_currency(0.0), "\u{2014}");
    assert_eq!(format_currency(f64::NAN), "\u{2014}");
}

// =============================================================
// Timestamps
// =============================================================

#[test]
fn format_timestamp_renders_rfc3339() {
    assert_eq!(format_timestamp("2026-03-04T18:32:00Z"), "Mar 04, 2026 18:32");
    assert_eq!(format_timestamp(""), "");
}

#[test]
fn format_timestamp_echoes_unparseable_input() {
    assert_eq!(format_timestamp("yesterday-ish"), "yesterday-ish");
}

#[test]
fn format_time_extracts_the_clock() {
    assert_eq!(format_time("2026-03-04T18:32:00Z"), "18:32");
}

// =============================================================
// Navbar initials
// =============================================================

#[test]
fn initials_prefer_display_name_words() {
    assert_eq!(initials(Some("ninja"), Some("Ninja Stream")), "NS");
    assert_eq!(initials(Some("ninja"), Some("Ninja")), "N");
}

#[test]
fn initials_fall_back_to_login_then_product() {
    assert_eq!(initials(Some("ninja"), None), "N");
    assert_eq!(initials(None, None), "D");
    assert_eq!(initials(Some("  "), None), "D");
}
