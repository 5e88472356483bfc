use serde_json::json;

use super::*;

// =============================================================
// Plan usage math
// =============================================================

#[test]
fn usage_percent_with_no_limit_is_zero() {
    // `null` limit must render as "no limit" and never divide.
    assert_eq!(usage_percent(250, None), 0);
    assert_eq!(usage_percent(0, None), 0);
}

#[test]
fn usage_percent_with_zero_limit_is_zero() {
    assert_eq!(usage_percent(5, Some(0)), 0);
}

#[test]
fn usage_percent_rounds_and_clamps() {
    assert_eq!(usage_percent(1, Some(3)), 33);
    assert_eq!(usage_percent(2, Some(3)), 67);
    assert_eq!(usage_percent(150, Some(100)), 100);
}

#[test]
fn usage_label_distinguishes_limited_and_unlimited() {
    assert_eq!(usage_label(3, Some(100)), "3/100 used");
    assert_eq!(usage_label(3, None), "3 used \u{2022} No limit");
}

#[test]
fn free_beta_plan_gets_a_short_badge() {
    let plan: PlanUsage = serde_json::from_value(json!({
        "plan": "free_beta",
        "limits": {"viewerDropsPerMonth": null, "globalDropsPerMonth": 20},
        "usage": {"viewerDropsThisMonth": 7, "globalDropsThisMonth": 5},
        "period": {"monthStart": "a", "monthEnd": "b", "now": "c"}
    }))
    .unwrap();

    assert_eq!(plan.plan_label(), "Free");
    assert_eq!(plan.viewer_percent(), 0);
    assert_eq!(plan.viewer_label(), "7 used \u{2022} No limit");
    assert_eq!(plan.global_percent(), 25);
    assert_eq!(plan.global_label(), "5/20 used");
}

// =============================================================
// Drops
// =============================================================

fn drop_row(id: &str, kind: &str) -> Drop {
    serde_json::from_value(json!({
        "id": id,
        "kind": kind,
        "viewerLogin": "viewer1",
        "discountCode": "DROP-ABC123",
        "createdAt": "2026-03-04T18:32:00Z"
    }))
    .unwrap()
}

#[test]
fn drop_kind_defaults_to_viewer_when_absent_or_unknown() {
    let row: Drop = serde_json::from_value(json!({
        "id": "d1",
        "viewerLogin": "viewer1",
        "discountCode": "DROP-X",
        "createdAt": ""
    }))
    .unwrap();
    assert_eq!(row.kind, DropKind::Viewer);

    assert_eq!(drop_row("d2", "mystery").kind, DropKind::Viewer);
    assert_eq!(drop_row("d3", "global").kind, DropKind::Global);
}

#[test]
fn viewer_name_prefers_the_display_name() {
    let mut row = drop_row("d1", "viewer");
    assert_eq!(row.viewer_name(), "viewer1");
    row.viewer_display_name = Some("Viewer One".to_owned());
    assert_eq!(row.viewer_name(), "Viewer One");
}

#[test]
fn discount_label_needs_both_value_and_type() {
    let mut row = drop_row("d1", "viewer");
    assert_eq!(row.discount_label(), None);

    row.discount_value = Some(10.0);
    assert_eq!(row.discount_label(), None);

    row.discount_type = Some("percentage".to_owned());
    assert_eq!(row.discount_label().as_deref(), Some("10% off"));

    row.discount_type = Some("fixed_amount".to_owned());
    assert_eq!(row.discount_label().as_deref(), Some("10 off"));
}

#[test]
fn filter_drops_by_kind() {
    let rows = vec![drop_row("d1", "viewer"), drop_row("d2", "global"), drop_row("d3", "viewer")];

    assert_eq!(filter_drops(&rows, None).len(), 3);
    let viewers = filter_drops(&rows, Some(DropKind::Viewer));
    assert_eq!(viewers.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), ["d1", "d3"]);
    assert_eq!(filter_drops(&rows, Some(DropKind::Global)).len(), 1);
}

// =============================================================
// Redemptions
// =============================================================

#[test]
fn redemption_label_matches_discount_type_case_insensitively() {
    let mut row: Redemption = serde_json::from_value(json!({
        "id": "r1",
        "orderNumber": "1042",
        "orderId": "gid-1042",
        "discountCode": "DROP-ZZZ999",
        "discountAmount": "15",
        "discountType": "Percentage",
        "customerEmail": "buyer@example.com",
        "customerId": "c-9",
        "shopifyStoreDomain": "mystore.myshopify.com",
        "createdAt": "2026-03-04T18:32:00Z"
    }))
    .unwrap();

    assert_eq!(row.discount_label(), "15% off");
    row.discount_type = "fixed_amount".to_owned();
    assert_eq!(row.discount_label(), "15 off");
}

// =============================================================
// Stats wire names
// =============================================================

#[test]
fn stats_decode_uses_the_wire_field_names() {
    let stats: Stats = serde_json::from_value(json!({
        "dropsToday": 4,
        "redemptionsToday": 2,
        "redemptionRate": 0.5,
        "revenue24h": 129.5,
        "discountValueToday": 18.0,
        "period": {
            "startOfToday": "2026-03-04T00:00:00Z",
            "since24h": "2026-03-03T18:32:00Z",
            "now": "2026-03-04T18:32:00Z"
        }
    }))
    .unwrap();

    assert_eq!(stats.drops_today, 4);
    assert_eq!(stats.revenue_24h, 129.5);
    assert_eq!(stats.period.since_24h, "2026-03-03T18:32:00Z");
}
