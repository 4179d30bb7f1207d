//! Money and discount types backed by decimal arithmetic.
//!
//! All authoritative amounts come from the Platform API; these types carry
//! them with full precision and provide the display-price rules for
//! discounted products.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Money {
    /// Create a new monetary amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The amount rounded to two decimal places for display.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        round2(self.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency.symbol(), self.rounded())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

/// A product discount, as reported by the Platform API.
///
/// The server computes authoritative totals; this type exists to render
/// the struck-through/final price pair on catalog and detail pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage off the list price (0-100).
    Percentage(Decimal),
    /// Fixed amount off the list price.
    Fixed(Decimal),
}

impl Discount {
    /// Displayed final price for a list price under this discount.
    ///
    /// - Percentage D: `P - P * D / 100`, rounded half-up to two decimals.
    /// - Fixed D: `max(0, P - D)`.
    ///
    /// The result never goes below zero.
    #[must_use]
    pub fn apply(&self, price: Decimal) -> Decimal {
        let discounted = match self {
            Self::Percentage(pct) => price - price * *pct / Decimal::ONE_HUNDRED,
            Self::Fixed(amount) => price - *amount,
        };
        round2(discounted.max(Decimal::ZERO))
    }

    /// Human-readable label, e.g. "15% off" or "$5.00 off".
    #[must_use]
    pub fn label(&self, currency: CurrencyCode) -> String {
        match self {
            Self::Percentage(pct) => format!("{pct}% off"),
            Self::Fixed(amount) => format!("{}{:.2} off", currency.symbol(), round2(*amount)),
        }
    }
}

/// Round to two decimal places, half-up.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_percentage_discount() {
        let discount = Discount::Percentage(d("15"));
        assert_eq!(discount.apply(d("20.00")), d("17.00"));
    }

    #[test]
    fn test_percentage_discount_rounds_half_up() {
        // 19.99 * 10% = 1.999 off -> 17.991 -> 17.99
        let discount = Discount::Percentage(d("10"));
        assert_eq!(discount.apply(d("19.99")), d("17.99"));

        // 9.99 * 12.5% off -> 8.74125 -> 8.74; half-up case: 2.345 -> 2.35
        let discount = Discount::Percentage(d("50"));
        assert_eq!(discount.apply(d("4.69")), d("2.35"));
    }

    #[test]
    fn test_fixed_discount() {
        let discount = Discount::Fixed(d("5.00"));
        assert_eq!(discount.apply(d("19.99")), d("14.99"));
    }

    #[test]
    fn test_fixed_discount_floors_at_zero() {
        let discount = Discount::Fixed(d("25.00"));
        assert_eq!(discount.apply(d("19.99")), Decimal::ZERO);
    }

    #[test]
    fn test_full_percentage_discount() {
        let discount = Discount::Percentage(d("100"));
        assert_eq!(discount.apply(d("12.34")), Decimal::ZERO);
    }

    #[test]
    fn test_money_display() {
        let price = Money::new(d("19.9"), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$19.90");
    }

    #[test]
    fn test_discount_label() {
        assert_eq!(
            Discount::Percentage(d("15")).label(CurrencyCode::USD),
            "15% off"
        );
        assert_eq!(
            Discount::Fixed(d("5")).label(CurrencyCode::USD),
            "$5.00 off"
        );
    }

    #[test]
    fn test_discount_serde() {
        let discount = Discount::Percentage(d("15"));
        let json = serde_json::to_string(&discount).unwrap();
        assert_eq!(json, r#"{"kind":"percentage","value":"15"}"#);

        let parsed: Discount = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, discount);
    }
}
