//! Form submission events and positional field extraction.
//!
//! The form platform hands over a plain ordered row of string values.
//! [`Column`] is the single mapping table from source index to field name —
//! the one place that changes if the upstream form schema changes.

use serde::{Deserialize, Serialize};

// ── Form event ──────────────────────────────────────────────────────

/// A single form-submission event: one ordered row of string values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormEvent {
    /// Field values at the fixed positions listed in [`Column`].
    pub values: Vec<String>,
}

impl FormEvent {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Value at a column position, or `""` when the row is too short.
    pub fn value(&self, column: Column) -> &str {
        self.values
            .get(column as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The full raw row as JSON, for error log entries.
    pub fn raw_json(&self) -> String {
        serde_json::to_string(&self.values).unwrap_or_default()
    }
}

// ── Column mapping ──────────────────────────────────────────────────

/// Column positions in a form response row.
///
/// Index 0 holds the submission timestamp and index 4 an unused answer;
/// neither is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    EmailAddress = 1,
    LastName = 2,
    FirstName = 3,
    DeliveryMethod = 5,
    Community = 6,
    Street = 7,
    Number = 8,
    Shift = 9,
    AdultCount = 10,
    ChildCount = 11,
}

// ── Named fields ────────────────────────────────────────────────────

/// The reservation fields of a form row, relabeled by name.
///
/// Pure re-labeling — no parsing, no validation, no failure path.
/// Absent values come through as empty strings and are dealt with in
/// validation.
#[derive(Debug, Clone)]
pub struct ReservationFields {
    pub email_address: String,
    pub last_name: String,
    pub first_name: String,
    pub delivery_method: String,
    pub community: String,
    pub street: String,
    pub number: String,
    pub shift: String,
    pub adult_count: String,
    pub child_count: String,
}

impl ReservationFields {
    /// Extract the named fields from an event row.
    pub fn from_event(event: &FormEvent) -> Self {
        Self {
            email_address: event.value(Column::EmailAddress).to_string(),
            last_name: event.value(Column::LastName).to_string(),
            first_name: event.value(Column::FirstName).to_string(),
            delivery_method: event.value(Column::DeliveryMethod).to_string(),
            community: event.value(Column::Community).to_string(),
            street: event.value(Column::Street).to_string(),
            number: event.value(Column::Number).to_string(),
            shift: event.value(Column::Shift).to_string(),
            adult_count: event.value(Column::AdultCount).to_string(),
            child_count: event.value(Column::ChildCount).to_string(),
        }
    }

    /// Display name: first and last name joined by a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Display address: street, number and community joined by spaces.
    pub fn display_address(&self) -> String {
        format!("{} {} {}", self.street, self.number, self.community)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> FormEvent {
        FormEvent::new(
            [
                "3/20/2024 18:12:33",
                "jan@example.com",
                "Peeters",
                "Jan",
                "(unused)",
                "Afhalen",
                "Beveren",
                "Kerkstraat",
                "12",
                "09:00 - 10:00",
                "2",
                "1",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }

    #[test]
    fn value_reads_fixed_positions() {
        let event = full_row();
        assert_eq!(event.value(Column::EmailAddress), "jan@example.com");
        assert_eq!(event.value(Column::LastName), "Peeters");
        assert_eq!(event.value(Column::FirstName), "Jan");
        assert_eq!(event.value(Column::DeliveryMethod), "Afhalen");
        assert_eq!(event.value(Column::Shift), "09:00 - 10:00");
        assert_eq!(event.value(Column::AdultCount), "2");
        assert_eq!(event.value(Column::ChildCount), "1");
    }

    #[test]
    fn value_missing_becomes_empty() {
        let event = FormEvent::new(vec!["ts".into(), "a@b.c".into()]);
        assert_eq!(event.value(Column::EmailAddress), "a@b.c");
        assert_eq!(event.value(Column::ChildCount), "");
    }

    #[test]
    fn fields_relabel_without_transformation() {
        let fields = ReservationFields::from_event(&full_row());
        assert_eq!(fields.email_address, "jan@example.com");
        assert_eq!(fields.community, "Beveren");
        assert_eq!(fields.street, "Kerkstraat");
        assert_eq!(fields.number, "12");
        assert_eq!(fields.adult_count, "2");
        assert_eq!(fields.child_count, "1");
    }

    #[test]
    fn display_name_space_joined() {
        let fields = ReservationFields::from_event(&full_row());
        assert_eq!(fields.display_name(), "Jan Peeters");
    }

    #[test]
    fn display_address_street_number_community() {
        let fields = ReservationFields::from_event(&full_row());
        assert_eq!(fields.display_address(), "Kerkstraat 12 Beveren");
    }

    #[test]
    fn display_name_no_trimming() {
        let mut fields = ReservationFields::from_event(&full_row());
        fields.first_name = " Jan ".into();
        assert_eq!(fields.display_name(), " Jan  Peeters");
    }

    #[test]
    fn raw_json_serializes_full_row() {
        let event = FormEvent::new(vec!["ts".into(), "a@b.c".into()]);
        assert_eq!(event.raw_json(), r#"["ts","a@b.c"]"#);
    }

    #[test]
    fn event_deserializes_from_trigger_payload() {
        let event: FormEvent =
            serde_json::from_str(r#"{"values": ["ts", "a@b.c", "Peeters"]}"#).unwrap();
        assert_eq!(event.value(Column::LastName), "Peeters");
    }
}
