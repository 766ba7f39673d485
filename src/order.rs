//! Order derivation: shift parsing, delivery method and pricing.

use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::ActionConfig;

// ── Shift ───────────────────────────────────────────────────────────

/// A pickup/delivery time window, extracted from the shift description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub start: String,
    pub end: String,
}

impl Shift {
    /// Parse a shift description of the form `HH:MM - HH:MM`.
    ///
    /// Pattern match only — no range checking of hour or minute values.
    /// Returns `None` on mismatch; the caller decides whether that is
    /// an error.
    pub fn parse(raw: &str, pattern: &Regex) -> Option<Self> {
        match pattern.captures(raw) {
            Some(captures) => Some(Self {
                start: captures[1].to_string(),
                end: captures[2].to_string(),
            }),
            None => {
                warn!(shift = raw, "invalid shift");
                None
            }
        }
    }
}

// ── Delivery method ─────────────────────────────────────────────────

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMethod {
    /// Picked up at the fixed takeaway address.
    Takeaway,
    /// Delivered to the address on the form.
    HomeDelivery,
}

impl DeliveryMethod {
    /// Classify the raw delivery-method field.
    ///
    /// Only the exact configured literal counts as a takeaway; any other
    /// value (including case variants and typos) is home delivery.
    pub fn from_field(raw: &str, config: &ActionConfig) -> Self {
        if raw == config.takeaway_value {
            Self::Takeaway
        } else {
            Self::HomeDelivery
        }
    }

    pub fn is_takeaway(self) -> bool {
        matches!(self, Self::Takeaway)
    }
}

// ── Order ───────────────────────────────────────────────────────────

/// A validated breakfast order.
#[derive(Debug, Clone)]
pub struct Order {
    pub adult_count: u32,
    pub child_count: u32,
    pub method: DeliveryMethod,
}

impl Order {
    /// A registration with no breakfasts at all — not an error, but
    /// nothing to confirm either.
    pub fn is_empty(&self) -> bool {
        self.adult_count == 0 && self.child_count == 0
    }

    /// Compute the priced totals for this order.
    pub fn totals(&self, config: &ActionConfig) -> OrderTotals {
        let adult_amount = Decimal::from(self.adult_count) * config.adult_price;
        let child_amount = Decimal::from(self.child_count) * config.child_price;
        let discount = if self.method.is_takeaway() {
            Decimal::from(self.adult_count + self.child_count) * config.takeaway_discount
        } else {
            Decimal::ZERO
        };
        OrderTotals {
            adult_amount,
            child_amount,
            discount,
            total: adult_amount + child_amount - discount,
        }
    }
}

/// Priced totals of an order, in euro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTotals {
    pub adult_amount: Decimal,
    pub child_amount: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn config() -> ActionConfig {
        ActionConfig::default()
    }

    // ── Shift parsing ───────────────────────────────────────────────

    #[test]
    fn shift_parses_two_timestamps() {
        let shift = Shift::parse("09:00 - 10:00", &config().shift_pattern).unwrap();
        assert_eq!(shift.start, "09:00");
        assert_eq!(shift.end, "10:00");
    }

    #[test]
    fn shift_parses_with_surrounding_text() {
        let shift = Shift::parse("Shift 2 (10:00 - 11:00)", &config().shift_pattern).unwrap();
        assert_eq!(shift.start, "10:00");
        assert_eq!(shift.end, "11:00");
    }

    #[test]
    fn shift_rejects_missing_leading_zero() {
        assert!(Shift::parse("9:00-10:00", &config().shift_pattern).is_none());
    }

    #[test]
    fn shift_rejects_missing_spaces() {
        assert!(Shift::parse("09:00-10:00", &config().shift_pattern).is_none());
    }

    #[test]
    fn shift_rejects_single_timestamp() {
        assert!(Shift::parse("09:00", &config().shift_pattern).is_none());
    }

    #[test]
    fn shift_rejects_empty() {
        assert!(Shift::parse("", &config().shift_pattern).is_none());
    }

    // ── Delivery method ─────────────────────────────────────────────

    #[test]
    fn delivery_method_exact_literal_is_takeaway() {
        assert_eq!(
            DeliveryMethod::from_field("Afhalen", &config()),
            DeliveryMethod::Takeaway
        );
    }

    #[test]
    fn delivery_method_is_case_sensitive() {
        assert_eq!(
            DeliveryMethod::from_field("afhalen", &config()),
            DeliveryMethod::HomeDelivery
        );
        assert_eq!(
            DeliveryMethod::from_field("AFHALEN", &config()),
            DeliveryMethod::HomeDelivery
        );
    }

    #[test]
    fn delivery_method_other_values_are_home_delivery() {
        assert_eq!(
            DeliveryMethod::from_field("Leveren", &config()),
            DeliveryMethod::HomeDelivery
        );
        assert_eq!(
            DeliveryMethod::from_field("", &config()),
            DeliveryMethod::HomeDelivery
        );
    }

    // ── Pricing ─────────────────────────────────────────────────────

    #[test]
    fn totals_home_delivery_no_discount() {
        let order = Order {
            adult_count: 2,
            child_count: 1,
            method: DeliveryMethod::HomeDelivery,
        };
        let totals = order.totals(&config());
        assert_eq!(totals.adult_amount, dec!(28));
        assert_eq!(totals.child_amount, dec!(10));
        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.total, dec!(38));
    }

    #[test]
    fn totals_takeaway_discount_per_breakfast() {
        let order = Order {
            adult_count: 1,
            child_count: 0,
            method: DeliveryMethod::Takeaway,
        };
        let totals = order.totals(&config());
        assert_eq!(totals.discount, dec!(1));
        assert_eq!(totals.total, dec!(13));
    }

    #[test]
    fn totals_takeaway_discount_counts_children() {
        let order = Order {
            adult_count: 2,
            child_count: 3,
            method: DeliveryMethod::Takeaway,
        };
        let totals = order.totals(&config());
        assert_eq!(totals.discount, dec!(5));
        assert_eq!(totals.total, dec!(53));
    }

    #[test]
    fn empty_order_detected() {
        let order = Order {
            adult_count: 0,
            child_count: 0,
            method: DeliveryMethod::HomeDelivery,
        };
        assert!(order.is_empty());
    }

    #[test]
    fn order_with_only_children_not_empty() {
        let order = Order {
            adult_count: 0,
            child_count: 1,
            method: DeliveryMethod::HomeDelivery,
        };
        assert!(!order.is_empty());
    }
}
