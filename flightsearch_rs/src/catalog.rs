//! Bundled flight dataset and date option lists.
//!
//! All three files are embedded at compile time; nothing is fetched at
//! runtime.

use crate::error::CatalogError;
use crate::types::FlightRecord;
use serde::de::DeserializeOwned;

const FLIGHTS_JSON: &str = include_str!("../data/flights.json");
const DEPARTURE_DATES_JSON: &str = include_str!("../data/departure_dates.json");
const RETURN_DATES_JSON: &str = include_str!("../data/return_dates.json");

/// Read-only flight records plus the dates offered by the date selects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    flights: Vec<FlightRecord>,
    departure_dates: Vec<String>,
    return_dates: Vec<String>,
}

impl Catalog {
    /// Parse the dataset shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(FLIGHTS_JSON, DEPARTURE_DATES_JSON, RETURN_DATES_JSON)
    }

    pub fn from_json(
        flights: &str,
        departure_dates: &str,
        return_dates: &str,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            flights: parse("flights.json", flights)?,
            departure_dates: parse("departure_dates.json", departure_dates)?,
            return_dates: parse("return_dates.json", return_dates)?,
        };
        tracing::debug!(
            "Catalog loaded: {} flights, {} departure dates, {} return dates",
            catalog.flights.len(),
            catalog.departure_dates.len(),
            catalog.return_dates.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from records already in memory. Date options are left empty.
    pub fn from_flights(flights: Vec<FlightRecord>) -> Self {
        Self {
            flights,
            ..Default::default()
        }
    }

    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn departure_dates(&self) -> &[String] {
        &self.departure_dates
    }

    pub fn return_dates(&self) -> &[String] {
        &self.return_dates
    }

    /// Does any record depart from `origin`? Case-insensitive.
    pub fn has_origin(&self, origin: &str) -> bool {
        let origin = origin.trim();
        self.flights.iter().any(|f| same_text(&f.origin, origin))
    }

    /// Does any record arrive at `destination`? Case-insensitive.
    pub fn has_destination(&self, destination: &str) -> bool {
        let destination = destination.trim();
        self.flights
            .iter()
            .any(|f| same_text(&f.destination, destination))
    }
}

fn parse<T: DeserializeOwned>(file: &'static str, content: &str) -> Result<T, CatalogError> {
    serde_json::from_str(content).map_err(|source| CatalogError::Parse { file, source })
}

/// Case-insensitive comparison used for every text match in the crate.
pub(crate) fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
