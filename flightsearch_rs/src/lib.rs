//! # flightsearch
//!
//! Model behind the flight search form: a bundled flight catalog, a
//! declarative validation schema, form state with touched tracking, and
//! case-insensitive filtering.
//!
//! The crate has no DOM dependency. The Leptos app in `web/` keeps a
//! [`form::SearchForm`] in a signal and calls [`search::search`] on submit.
//!
//! ## Quick Start
//!
//! ```rust
//! use flightsearch::{Catalog, SearchConfig, SearchForm};
//! use flightsearch::validation::Field;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let config = SearchConfig::default();
//!
//! let mut form = SearchForm::new(&config);
//! assert!(!form.can_submit());
//!
//! form.set(Field::Origin, "nyc");
//! form.set(Field::Destination, "lon");
//! form.set(Field::DepartureDate, "2024-01-01");
//! form.set(Field::Passengers, "Adult");
//! assert!(form.can_submit());
//!
//! let criteria = form.submit().unwrap();
//! let outcome = flightsearch::search(&catalog, &criteria, &config).unwrap();
//! assert!(!outcome.results.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Flight records, trip and passenger types, price ranges
//! - [`catalog`] - Bundled JSON dataset and date options
//! - [`validation`] - Per-trip-type schema and field errors
//! - [`form`] - Form values, touched state, submit
//! - [`search`] - Filtering and cheapest pick
//! - [`config`] - TOML configuration
//! - [`error`] - Error enums

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod search;
pub mod types;
pub mod validation;

pub use catalog::Catalog;
pub use config::SearchConfig;
pub use error::{CatalogError, ConfigError, SearchError};
pub use form::{FormValues, SearchForm};
pub use search::{SearchOutcome, search};
pub use types::{FlightRecord, PassengerType, PriceRange, SearchCriteria, TripType};
pub use validation::{Field, FieldErrors, Schema};
