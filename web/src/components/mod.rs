//! Leptos components for the flight search page.
//!
//! - [`FlightSearch`] - Root component, owns all signals
//! - [`TripTabs`] - One Way / Return switch
//! - [`TextField`], [`SelectField`] - Inputs with inline helper text
//! - [`PriceRangeField`] - Two-thumb price slider
//! - [`TicketCard`] - Summary of the submitted values
//! - [`ResultsList`] - Matching flights

mod fields;
mod price_range;
mod results;
mod search_form;
mod tabs;
mod ticket;

pub use fields::{SelectField, TextField};
pub use price_range::PriceRangeField;
pub use results::ResultsList;
pub use search_form::FlightSearch;
pub use tabs::TripTabs;
pub use ticket::TicketCard;
