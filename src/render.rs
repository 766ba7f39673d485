//! Confirmation email rendering.
//!
//! Builds the HTML body of the confirmation mail. Bold tags instead of
//! CSS to please both GMail and Outlook. Name and address fields are
//! interpolated as-is (closed-group submitters, no HTML escaping).

use rust_decimal::Decimal;

use crate::config::ActionConfig;
use crate::order::{Order, OrderTotals, Shift};

/// Format a euro amount for display.
///
/// Whole amounts print without a fractional part; fractional amounts
/// are shown exactly, never truncated.
fn euro(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Render the HTML confirmation body for an order.
///
/// Line items with a zero count are omitted, as is the discount line
/// for non-takeaway orders.
pub fn confirmation_body(
    order: &Order,
    totals: &OrderTotals,
    shift: &Shift,
    name: &str,
    address: &str,
    config: &ActionConfig,
) -> String {
    let mut body = String::with_capacity(1024);

    body.push_str(&format!("<p>Beste {name},</p>"));
    body.push_str("<p/>");
    body.push_str("<p>Hartelijk dank voor uw bestelling!</p>");
    body.push_str("<p>Hieronder vindt u nog een overzicht van uw bestelling:</p>");

    body.push_str("<ul>");
    if order.adult_count != 0 {
        body.push_str(&format!(
            "<li>Ontbijt volwassenen: {} = {} euro</li>",
            order.adult_count,
            euro(totals.adult_amount)
        ));
    }
    if order.child_count != 0 {
        body.push_str(&format!(
            "<li>Ontbijt kinderen: {} = {} euro</li>",
            order.child_count,
            euro(totals.child_amount)
        ));
    }
    if order.method.is_takeaway() {
        body.push_str(&format!(
            "<li>Korting afhaling: {} euro</li>",
            euro(-totals.discount)
        ));
    }
    body.push_str("</ul>");

    body.push_str(&format!("<p>Totaalbedrag: {} euro</p>", euro(totals.total)));

    body.push_str(&format!(
        "<p><b>Gelieve het totaalbedrag van {} EURO over te schrijven naar rekeningnummer {} \
         met vermelding van uw volledige naam.</b></p>",
        euro(totals.total),
        config.account_number
    ));
    body.push_str(
        "<p><b>Uw reservatie is pas definitief als wij de betaling ontvangen hebben.</b></p>",
    );

    if order.method.is_takeaway() {
        body.push_str(&format!(
            "<p>U kan uw bestelling afhalen op {} tussen {} en {} uur op {}.</p>",
            config.action_date, shift.start, shift.end, config.takeaway_address
        ));
    } else {
        body.push_str(&format!(
            "<p>Uw bestelling zal worden geleverd op {} tussen {} en {} uur op {}.</p>",
            config.action_date, shift.start, shift.end, address
        ));
    }
    body.push_str("<p/>");
    body.push_str("<p>Bedankt voor uw steun en smakelijk!</p><p>VZW Scouts Sint Raphael</p>");

    body
}
