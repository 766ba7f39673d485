//! Configuration types.
//!
//! All pricing and message constants live in [`ActionConfig`] — one
//! immutable structure built at process start and passed into the
//! processor, never referenced as ambient globals.

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Configuration for one breakfast action.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// Price per adult breakfast in euro.
    pub adult_price: Decimal,
    /// Price per child breakfast in euro.
    pub child_price: Decimal,
    /// Discount in euro per breakfast for takeaway orders.
    pub takeaway_discount: Decimal,
    /// Delivery-method value that denotes a takeaway (exact, case-sensitive).
    pub takeaway_value: String,
    /// Pickup address for takeaway orders.
    pub takeaway_address: String,
    /// Date of the action, as shown in the confirmation.
    pub action_date: String,
    /// Account number for payment.
    pub account_number: String,
    /// Subject of the confirmation mail.
    pub subject: String,
    /// Pattern a shift description must match: `HH:MM - HH:MM`.
    pub shift_pattern: Regex,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            adult_price: dec!(14),
            child_price: dec!(10),
            takeaway_discount: dec!(1),
            takeaway_value: "Afhalen".to_string(),
            takeaway_address: "Glazenleeuwstraat 94, 9120 Beveren (ingang langs de oprit)"
                .to_string(),
            action_date: "24 maart 2024".to_string(),
            account_number: "BE46 7350 4380 0336".to_string(),
            subject: "Bevestiging inschrijving ontbijtactie VZW Scouts Sint-Raphaël".to_string(),
            shift_pattern: Regex::new(r"(\d{2}:\d{2}) - (\d{2}:\d{2})").unwrap(),
        }
    }
}
