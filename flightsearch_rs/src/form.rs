//! Form state for the search form.
//!
//! [`SearchForm`] owns the raw field values, tracks which fields the user has
//! left (touched), and validates eagerly against the schema for the active
//! trip type. The UI only ever shows an error for a touched field, but the
//! submit action is gated on the full error set, so an untouched empty form
//! can never be submitted.

use crate::config::SearchConfig;
use crate::types::{PassengerType, PriceRange, SearchCriteria, TripType};
use crate::validation::{Field, FieldErrors, Schema};
use std::collections::BTreeSet;

/// Raw values as typed or selected by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub trip_type: TripType,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub passengers: String,
    pub price_range: PriceRange,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Origin => &self.origin,
            Field::Destination => &self.destination,
            Field::DepartureDate => &self.departure_date,
            Field::ReturnDate => &self.return_date,
            Field::Passengers => &self.passengers,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Origin => &mut self.origin,
            Field::Destination => &mut self.destination,
            Field::DepartureDate => &mut self.departure_date,
            Field::ReturnDate => &mut self.return_date,
            Field::Passengers => &mut self.passengers,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchForm {
    values: FormValues,
    touched: BTreeSet<Field>,
    config: SearchConfig,
}

impl SearchForm {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            values: FormValues {
                price_range: config.default_price_range(),
                ..Default::default()
            },
            touched: BTreeSet::new(),
            config: config.clone(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn trip_type(&self) -> TripType {
        self.values.trip_type
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.values.slot(field) = value.into();
    }

    /// Mark a field as blurred so its inline error becomes visible.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Switch tabs. Values are kept; only the schema changes.
    pub fn select_trip(&mut self, trip_type: TripType) {
        self.values.trip_type = trip_type;
    }

    pub fn set_price_range(&mut self, a: u32, b: u32) {
        self.values.price_range = self.config.price_range(a, b);
    }

    pub fn schema(&self) -> Schema {
        Schema::for_trip(self.values.trip_type)
    }

    pub fn errors(&self) -> FieldErrors {
        self.schema().validate(&self.values)
    }

    /// Submit is enabled only when every rule of the active schema passes.
    pub fn can_submit(&self) -> bool {
        self.errors().is_empty()
    }

    /// Inline helper text: the field's error, but only once it was touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) {
            self.errors().get(field)
        } else {
            None
        }
    }

    /// Touch every field, then either hand back the criteria or the errors.
    pub fn submit(&mut self) -> Result<SearchCriteria, FieldErrors> {
        self.touched.extend(Field::ALL);
        let errors = self.errors();
        if !errors.is_empty() {
            tracing::debug!("Submit blocked by {} invalid field(s)", errors.len());
            return Err(errors);
        }
        let passenger_type = match self.values.passengers.parse::<PassengerType>() {
            Ok(passenger_type) => passenger_type,
            Err(_) => return Err(errors),
        };

        let values = &self.values;
        let return_date = values
            .trip_type
            .requires_return_date()
            .then(|| values.return_date.trim().to_string());

        Ok(SearchCriteria {
            trip_type: values.trip_type,
            origin: values.origin.trim().to_string(),
            destination: values.destination.trim().to_string(),
            departure_date: values.departure_date.trim().to_string(),
            return_date,
            passenger_type,
            price_range: values.price_range,
        })
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill_one_way(form: &mut SearchForm) {
        form.set(Field::Origin, "NYC");
        form.set(Field::Destination, "LON");
        form.set(Field::DepartureDate, "2024-01-01");
        form.set(Field::Passengers, "Adult");
    }

    #[test]
    fn new_form_starts_empty_and_disabled() {
        let form = SearchForm::default();
        assert_eq!(form.values().origin, "");
        assert_eq!(form.trip_type(), TripType::OneWay);
        assert_eq!(form.values().price_range, PriceRange::new(0, 1000));
        assert!(!form.can_submit());
    }

    #[test]
    fn any_empty_required_field_disables_submit() {
        for missing in [
            Field::Origin,
            Field::Destination,
            Field::DepartureDate,
            Field::Passengers,
        ] {
            let mut form = SearchForm::default();
            fill_one_way(&mut form);
            form.set(missing, "");
            assert!(!form.can_submit(), "{missing:?} empty but submit enabled");
        }
    }

    #[test]
    fn return_tab_needs_return_date() {
        let mut form = SearchForm::default();
        fill_one_way(&mut form);
        assert!(form.can_submit());

        form.select_trip(TripType::Return);
        assert!(!form.can_submit());

        form.set(Field::ReturnDate, "2024-01-08");
        assert!(form.can_submit());

        form.select_trip(TripType::OneWay);
        assert!(form.can_submit());
    }

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = SearchForm::default();
        assert_eq!(form.visible_error(Field::Origin), None);

        form.touch(Field::Origin);
        assert_eq!(form.visible_error(Field::Origin), Some("Origin is required"));
        assert_eq!(form.visible_error(Field::Destination), None);
    }

    #[test]
    fn failed_submit_touches_everything() {
        let mut form = SearchForm::default();
        let errors = form.submit().expect_err("empty form");
        assert_eq!(errors.len(), 4);
        for field in Field::ALL {
            assert!(form.is_touched(field));
        }
        assert_eq!(
            form.visible_error(Field::Passengers),
            Some("Passengers is required")
        );
    }

    #[test]
    fn one_way_submit_drops_return_date() {
        let mut form = SearchForm::default();
        fill_one_way(&mut form);
        form.set(Field::ReturnDate, "2024-01-08");
        form.set(Field::Origin, "  nyc ");

        let criteria = form.submit().expect("valid form");
        assert_eq!(
            criteria,
            SearchCriteria {
                trip_type: TripType::OneWay,
                origin: "nyc".into(),
                destination: "LON".into(),
                departure_date: "2024-01-01".into(),
                return_date: None,
                passenger_type: PassengerType::Adult,
                price_range: PriceRange::new(0, 1000),
            }
        );
    }

    #[test]
    fn return_submit_keeps_return_date() {
        let mut form = SearchForm::default();
        fill_one_way(&mut form);
        form.select_trip(TripType::Return);
        form.set(Field::ReturnDate, "2024-01-08");

        let criteria = form.submit().expect("valid form");
        assert_eq!(criteria.trip_type, TripType::Return);
        assert_eq!(criteria.return_date.as_deref(), Some("2024-01-08"));
    }

    #[test]
    fn price_range_respects_config_bounds() {
        let config = SearchConfig {
            price_floor: 100,
            price_ceiling: 800,
            ..Default::default()
        };
        let mut form = SearchForm::new(&config);
        assert_eq!(form.values().price_range, PriceRange::new(100, 800));

        form.set_price_range(900, 0);
        assert_eq!(form.values().price_range, PriceRange::new(100, 800));

        form.set_price_range(450, 300);
        assert_eq!(form.values().price_range, PriceRange::new(300, 450));
    }
}
