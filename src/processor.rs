//! Reservation processor — turns one form submission into one
//! confirmation email.
//!
//! Flow:
//! 1. Field extraction — positional row → named fields
//! 2. Validation — counts parse, zero-order guard, shift pattern
//! 3. Derivation — name, address, delivery method, totals
//! 4. Rendering & dispatch — HTML body → [`Mailer`]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{error, info};

use crate::config::ActionConfig;
use crate::error::{InvalidInputError, Result};
use crate::event::{FormEvent, ReservationFields};
use crate::mailer::{Mailer, OutgoingEmail};
use crate::order::{DeliveryMethod, Order, Shift};
use crate::render::confirmation_body;

// ── Outcome ─────────────────────────────────────────────────────────

/// Result of processing one reservation event.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Confirmation dispatched.
    Sent { to: String, total: Decimal },
    /// Registration with no actual orders — skipped, nothing sent.
    Empty,
}

/// A fully processed reservation.
#[derive(Debug, Clone)]
pub struct ProcessedReservation {
    pub outcome: Outcome,
    pub processed_at: DateTime<Utc>,
}

// ── Processor ───────────────────────────────────────────────────────

/// Processes form-submission events into confirmation emails.
///
/// One event in, one email dispatch out (or an early return on the
/// zero-order case). Validation failures propagate to the caller after
/// an error log entry containing the full raw row.
pub struct ReservationProcessor {
    config: ActionConfig,
    mailer: Arc<dyn Mailer>,
}

impl ReservationProcessor {
    pub fn new(config: ActionConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    /// Process a single form submission.
    pub fn process(&self, event: &FormEvent) -> Result<ProcessedReservation> {
        info!("processing reservation");

        let fields = ReservationFields::from_event(event);

        // Validation — counts first, then the zero-order guard, then the
        // shift. A zero order with a malformed shift is still a no-op.
        let adult_count = self.parse_count(&fields.adult_count, event, CountField::Adult)?;
        let child_count = self.parse_count(&fields.child_count, event, CountField::Child)?;

        if adult_count == 0 && child_count == 0 {
            info!(
                raw_input = %event.raw_json(),
                "registration detected with no actual orders"
            );
            return Ok(ProcessedReservation {
                outcome: Outcome::Empty,
                processed_at: Utc::now(),
            });
        }

        let shift = match Shift::parse(&fields.shift, &self.config.shift_pattern) {
            Some(shift) => shift,
            None => {
                error!(raw_input = %event.raw_json(), "invalid shift");
                return Err(InvalidInputError::Shift {
                    raw: fields.shift.clone(),
                }
                .into());
            }
        };

        // Derivation
        let order = Order {
            adult_count,
            child_count,
            method: DeliveryMethod::from_field(&fields.delivery_method, &self.config),
        };
        let totals = order.totals(&self.config);
        let name = fields.display_name();
        let address = fields.display_address();

        // Rendering & dispatch
        let body = confirmation_body(&order, &totals, &shift, &name, &address, &self.config);
        let email = OutgoingEmail {
            to: fields.email_address.clone(),
            subject: self.config.subject.clone(),
            html_body: body,
        };
        self.mailer.send(&email)?;

        info!(to = %email.to, total = %totals.total, "reservation confirmed");
        Ok(ProcessedReservation {
            outcome: Outcome::Sent {
                to: email.to,
                total: totals.total,
            },
            processed_at: Utc::now(),
        })
    }

    /// Parse a breakfast count field, logging the full raw row on failure.
    fn parse_count(
        &self,
        raw: &str,
        event: &FormEvent,
        field: CountField,
    ) -> Result<u32> {
        match raw.trim().parse::<u32>() {
            Ok(count) => Ok(count),
            Err(_) => {
                error!(raw_input = %event.raw_json(), "{}", field.message());
                Err(field.to_error(raw).into())
            }
        }
    }
}

/// Which breakfast-count field is being validated.
#[derive(Debug, Clone, Copy)]
enum CountField {
    Adult,
    Child,
}

impl CountField {
    fn message(self) -> &'static str {
        match self {
            Self::Adult => "invalid adult breakfast count",
            Self::Child => "invalid child breakfast count",
        }
    }

    fn to_error(self, raw: &str) -> InvalidInputError {
        match self {
            Self::Adult => InvalidInputError::AdultCount { raw: raw.into() },
            Self::Child => InvalidInputError::ChildCount { raw: raw.into() },
        }
    }
}
