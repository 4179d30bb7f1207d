//! Cross-cutting checks on the display-price rules.
//!
//! The Platform API owns authoritative totals; these tests pin down the
//! client-side display math used on catalog and detail pages.

#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use rust_decimal::Decimal;

use bristle_core::{CurrencyCode, Discount};

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_discounted_price_never_exceeds_list_price() {
    let prices = ["0.99", "4.69", "12.00", "19.99", "149.50"];
    let discounts = [
        Discount::Percentage(d("0")),
        Discount::Percentage(d("10")),
        Discount::Percentage(d("33")),
        Discount::Percentage(d("100")),
        Discount::Fixed(d("0")),
        Discount::Fixed(d("5.00")),
        Discount::Fixed(d("500")),
    ];

    for price in prices.map(d) {
        for discount in discounts {
            let displayed = discount.apply(price);
            assert!(displayed >= Decimal::ZERO, "{discount:?} on {price}");
            assert!(displayed <= price, "{discount:?} on {price}");
        }
    }
}

#[test]
fn test_displayed_price_has_at_most_two_decimals() {
    let discount = Discount::Percentage(d("12.5"));
    let displayed = discount.apply(d("9.99"));
    assert_eq!(displayed, displayed.round_dp(2));
}

#[test]
fn test_percentage_midpoint_rounds_away_from_zero() {
    // 4.69 at 50% is 2.345, which must display as 2.35
    let discount = Discount::Percentage(d("50"));
    assert_eq!(discount.apply(d("4.69")), d("2.35"));
}

#[test]
fn test_fixed_discount_is_plain_subtraction_until_zero() {
    let discount = Discount::Fixed(d("7.50"));
    assert_eq!(discount.apply(d("20.00")), d("12.50"));
    assert_eq!(discount.apply(d("7.50")), Decimal::ZERO);
    assert_eq!(discount.apply(d("3.00")), Decimal::ZERO);
}

#[test]
fn test_discount_labels_match_storefront_copy() {
    assert_eq!(
        Discount::Percentage(d("15")).label(CurrencyCode::USD),
        "15% off"
    );
    assert_eq!(
        Discount::Fixed(d("5")).label(CurrencyCode::GBP),
        "\u{a3}5.00 off"
    );
}

#[test]
fn test_discount_wire_format_roundtrip() {
    let discount = Discount::Fixed(d("5.00"));
    let json = serde_json::to_string(&discount).unwrap();
    assert_eq!(json, r#"{"kind":"fixed","value":"5.00"}"#);
    let parsed: Discount = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, discount);
}
