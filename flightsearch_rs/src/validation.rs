//! Declarative validation schema for the search form.
//!
//! A [`Schema`] is an ordered list of rules. Each field reports only its
//! first failing rule, so "required" always wins over format checks. The
//! return-date rules exist only in the schema built for return trips.
//!
//! ```rust
//! use flightsearch::form::FormValues;
//! use flightsearch::types::TripType;
//! use flightsearch::validation::{Field, Schema};
//!
//! let errors = Schema::for_trip(TripType::Return).validate(&FormValues::default());
//! assert_eq!(errors.get(Field::ReturnDate), Some("Return Date is required"));
//!
//! let errors = Schema::for_trip(TripType::OneWay).validate(&FormValues::default());
//! assert_eq!(errors.get(Field::ReturnDate), None);
//! ```

use crate::form::FormValues;
use crate::types::{PassengerType, TripType};
use chrono::NaiveDate;
use std::collections::BTreeMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Origin,
    Destination,
    DepartureDate,
    ReturnDate,
    Passengers,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Field; 5] = [
        Field::Origin,
        Field::Destination,
        Field::DepartureDate,
        Field::ReturnDate,
        Field::Passengers,
    ];

    /// Human label used in messages and the ticket card.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Origin => "Origin",
            Field::Destination => "Destination",
            Field::DepartureDate => "Departure Date",
            Field::ReturnDate => "Return Date",
            Field::Passengers => "Passengers",
        }
    }

    /// Form control name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Origin => "origin",
            Field::Destination => "destination",
            Field::DepartureDate => "departureDate",
            Field::ReturnDate => "returnDate",
            Field::Passengers => "passengers",
        }
    }
}

/// What a rule checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    /// Non-empty after trimming
    Required,
    /// Parses as a `YYYY-MM-DD` calendar date
    IsoDate,
    /// One of the passenger labels
    PassengerType,
}

impl Check {
    fn passes(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Check::Required => !value.is_empty(),
            Check::IsoDate => NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok(),
            Check::PassengerType => value.parse::<PassengerType>().is_ok(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub field: Field,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    const fn new(field: Field, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// Ordered rule set for one trip type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    rules: Vec<Rule>,
}

impl Schema {
    pub fn for_trip(trip_type: TripType) -> Self {
        let mut rules = vec![
            Rule::new(Field::Origin, Check::Required, "Origin is required"),
            Rule::new(
                Field::Destination,
                Check::Required,
                "Destination is required",
            ),
            Rule::new(
                Field::DepartureDate,
                Check::Required,
                "Departure Date is required",
            ),
            Rule::new(
                Field::DepartureDate,
                Check::IsoDate,
                "Departure Date must be a valid date",
            ),
        ];
        if trip_type.requires_return_date() {
            rules.push(Rule::new(
                Field::ReturnDate,
                Check::Required,
                "Return Date is required",
            ));
            rules.push(Rule::new(
                Field::ReturnDate,
                Check::IsoDate,
                "Return Date must be a valid date",
            ));
        }
        rules.push(Rule::new(
            Field::Passengers,
            Check::Required,
            "Passengers is required",
        ));
        rules.push(Rule::new(
            Field::Passengers,
            Check::PassengerType,
            "Passengers must be Adult, Child or Infant",
        ));
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule against `values` and collect the first failure per field.
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for rule in &self.rules {
            if errors.contains(rule.field) {
                continue;
            }
            if !rule.check.passes(values.get(rule.field)) {
                errors.insert(rule.field, rule.message);
            }
        }
        errors
    }
}

/// Failing fields and their messages, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> FormValues {
        FormValues {
            origin: "NYC".into(),
            destination: "LON".into(),
            departure_date: "2024-01-01".into(),
            return_date: String::new(),
            passengers: "Adult".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = Schema::for_trip(TripType::OneWay).validate(&FormValues::default());
        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![
                (Field::Origin, "Origin is required"),
                (Field::Destination, "Destination is required"),
                (Field::DepartureDate, "Departure Date is required"),
                (Field::Passengers, "Passengers is required"),
            ]
        );
    }

    #[test]
    fn filled_one_way_form_is_valid() {
        let errors = Schema::for_trip(TripType::OneWay).validate(&filled());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn return_trip_requires_return_date() {
        let errors = Schema::for_trip(TripType::Return).validate(&filled());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::ReturnDate), Some("Return Date is required"));

        let mut values = filled();
        values.return_date = "2024-01-08".into();
        assert!(Schema::for_trip(TripType::Return).validate(&values).is_empty());
    }

    #[test]
    fn whitespace_only_is_empty() {
        let mut values = filled();
        values.origin = "   ".into();
        let errors = Schema::for_trip(TripType::OneWay).validate(&values);
        assert_eq!(errors.get(Field::Origin), Some("Origin is required"));
    }

    #[test]
    fn required_wins_over_format() {
        let mut values = filled();
        values.departure_date = String::new();
        let errors = Schema::for_trip(TripType::OneWay).validate(&values);
        assert_eq!(
            errors.get(Field::DepartureDate),
            Some("Departure Date is required")
        );
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let mut values = filled();
        values.departure_date = "2024-13-01".into();
        values.return_date = "next week".into();
        let errors = Schema::for_trip(TripType::Return).validate(&values);
        assert_eq!(
            errors.get(Field::DepartureDate),
            Some("Departure Date must be a valid date")
        );
        assert_eq!(
            errors.get(Field::ReturnDate),
            Some("Return Date must be a valid date")
        );
    }

    #[test]
    fn one_way_ignores_stale_return_date() {
        let mut values = filled();
        values.return_date = "garbage".into();
        assert!(Schema::for_trip(TripType::OneWay).validate(&values).is_empty());
    }

    #[test]
    fn unknown_passenger_type_rejected() {
        let mut values = filled();
        values.passengers = "Pilot".into();
        let errors = Schema::for_trip(TripType::OneWay).validate(&values);
        assert_eq!(
            errors.get(Field::Passengers),
            Some("Passengers must be Adult, Child or Infant")
        );
    }

    #[test]
    fn schema_rule_counts() {
        assert_eq!(Schema::for_trip(TripType::OneWay).rules().len(), 6);
        assert_eq!(Schema::for_trip(TripType::Return).rules().len(), 8);
    }

    #[test]
    fn field_names_match_form_controls() {
        let names: Vec<_> = Field::ALL.iter().map(Field::name).collect();
        assert_eq!(
            names,
            vec!["origin", "destination", "departureDate", "returnDate", "passengers"]
        );
    }
}
