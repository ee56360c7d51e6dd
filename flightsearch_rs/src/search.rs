//! Filtering the bundled dataset against submitted criteria.
//!
//! Matching is plain case-insensitive equality on origin, destination and
//! departure date. The return date takes part only for return trips. Dataset
//! order is preserved.

use crate::catalog::{Catalog, same_text};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{FlightRecord, SearchCriteria};
use serde::Serialize;

/// Result of one submit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<FlightRecord>,
    /// Lowest fare among `results`; the earliest record wins a tie
    pub cheapest: Option<FlightRecord>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

pub fn matches(record: &FlightRecord, criteria: &SearchCriteria) -> bool {
    if !same_text(&record.origin, criteria.origin.trim())
        || !same_text(&record.destination, criteria.destination.trim())
        || !same_text(&record.departure_date, criteria.departure_date.trim())
    {
        return false;
    }
    if !criteria.trip_type.requires_return_date() {
        return true;
    }
    let wanted = criteria.return_date.as_deref().unwrap_or_default();
    same_text(&record.return_date, wanted.trim())
}

/// Every record matching `criteria`, in dataset order.
pub fn filter(records: &[FlightRecord], criteria: &SearchCriteria) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

pub fn cheapest(records: &[FlightRecord]) -> Option<&FlightRecord> {
    records.iter().reduce(|best, current| {
        if current.price < best.price {
            current
        } else {
            best
        }
    })
}

/// Reject criteria naming an origin or destination the dataset never serves.
pub fn ensure_known_locations(
    catalog: &Catalog,
    criteria: &SearchCriteria,
) -> Result<(), SearchError> {
    if catalog.has_origin(&criteria.origin) && catalog.has_destination(&criteria.destination) {
        return Ok(());
    }
    tracing::warn!(
        "Unknown location: origin={:?} destination={:?}",
        criteria.origin,
        criteria.destination
    );
    Err(SearchError::UnknownLocation {
        origin: criteria.origin.clone(),
        destination: criteria.destination.clone(),
    })
}

/// Run one search: location check, equality filter, optional price window.
pub fn search(
    catalog: &Catalog,
    criteria: &SearchCriteria,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    if config.reject_unknown_locations {
        ensure_known_locations(catalog, criteria)?;
    }

    let mut results = filter(catalog.flights(), criteria);
    if config.apply_price_range {
        results.retain(|record| criteria.price_range.contains(record.price));
    }

    if results.is_empty() {
        tracing::info!("No matching flights found.");
    } else {
        tracing::info!("Flight search results: {} match(es)", results.len());
    }

    let cheapest = cheapest(&results).cloned();
    if let Some(pick) = &cheapest {
        tracing::debug!("Cheapest: {} at ${}", pick.airline, pick.price);
    }

    Ok(SearchOutcome { results, cheapest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PassengerType, PriceRange, TripType};
    use pretty_assertions::assert_eq;

    fn record(origin: &str, destination: &str, dep: &str, ret: &str, price: u32) -> FlightRecord {
        FlightRecord {
            airline: "Test Air".into(),
            origin: origin.into(),
            destination: destination.into(),
            departure_date: dep.into(),
            return_date: ret.into(),
            price,
        }
    }

    fn criteria(trip_type: TripType, ret: Option<&str>) -> SearchCriteria {
        SearchCriteria {
            trip_type,
            origin: "nyc".into(),
            destination: "lon".into(),
            departure_date: "2024-01-01".into(),
            return_date: ret.map(str::to_string),
            passenger_type: PassengerType::Adult,
            price_range: PriceRange::default(),
        }
    }

    #[test]
    fn one_way_lookup_is_case_insensitive() {
        let records = vec![record("NYC", "LON", "2024-01-01", "", 400)];
        let found = filter(&records, &criteria(TripType::OneWay, None));
        assert_eq!(found, records);
    }

    #[test]
    fn one_way_ignores_return_leg() {
        let records = vec![
            record("NYC", "LON", "2024-01-01", "", 400),
            record("NYC", "LON", "2024-01-01", "2024-01-08", 700),
            record("NYC", "PAR", "2024-01-01", "", 300),
            record("NYC", "LON", "2024-01-02", "", 350),
        ];
        let found = filter(&records, &criteria(TripType::OneWay, None));
        assert_eq!(found, records[..2].to_vec());
    }

    #[test]
    fn return_trip_matches_return_date() {
        let records = vec![
            record("NYC", "LON", "2024-01-01", "", 400),
            record("NYC", "LON", "2024-01-01", "2024-01-08", 700),
            record("NYC", "LON", "2024-01-01", "2024-01-09", 650),
        ];
        let found = filter(&records, &criteria(TripType::Return, Some("2024-01-08")));
        assert_eq!(found, vec![records[1].clone()]);
    }

    #[test]
    fn cheapest_prefers_first_on_tie() {
        let records = vec![
            record("A", "B", "2024-01-01", "", 300),
            record("A", "B", "2024-01-01", "", 200),
            record("A", "B", "2024-01-01", "", 200),
        ];
        let pick = cheapest(&records).expect("non-empty");
        assert!(std::ptr::eq(pick, &records[1]));
        assert!(cheapest(&[]).is_none());
    }

    #[test]
    fn unknown_location_rejected_when_enabled() {
        let catalog = Catalog::from_flights(vec![record("NYC", "LON", "2024-01-01", "", 400)]);
        let mut wanted = criteria(TripType::OneWay, None);
        wanted.destination = "Mars".into();

        let err = search(&catalog, &wanted, &SearchConfig::default()).expect_err("unknown");
        assert_eq!(err.to_string(), "Please enter valid origin and destination.");

        let lenient = SearchConfig {
            reject_unknown_locations: false,
            ..Default::default()
        };
        let outcome = search(&catalog, &wanted, &lenient).expect("lenient search");
        assert!(outcome.is_empty());
        assert_eq!(outcome.cheapest, None);
    }

    #[test]
    fn price_window_applies_only_when_enabled() {
        let catalog = Catalog::from_flights(vec![
            record("NYC", "LON", "2024-01-01", "", 400),
            record("NYC", "LON", "2024-01-01", "", 900),
        ]);
        let mut wanted = criteria(TripType::OneWay, None);
        wanted.price_range = PriceRange::new(0, 500);

        let plain = search(&catalog, &wanted, &SearchConfig::default()).expect("search");
        assert_eq!(plain.results.len(), 2);

        let windowed = SearchConfig {
            apply_price_range: true,
            ..Default::default()
        };
        let narrowed = search(&catalog, &wanted, &windowed).expect("search");
        assert_eq!(narrowed.results.len(), 1);
        assert_eq!(narrowed.cheapest.map(|r| r.price), Some(400));
    }
}
