//! Data model for flight records and search criteria.
//!
//! These types are shared between the library and the browser app:
//!
//! - **Serializable** - Flight records load straight from the bundled JSON
//! - **Clone-friendly** - Components hold copies in signals without borrowing
//! - **Default-able** - Criteria and ranges start from sane empty values
//!
//! # Example
//!
//! ```rust
//! use flightsearch::types::{FlightRecord, PassengerType, PriceRange, SearchCriteria, TripType};
//!
//! let record: FlightRecord = serde_json::from_str(
//!     r#"{"airline":"Atlantic Air","origin":"NYC","destination":"LON",
//!         "departureDate":"2024-01-01","returnDate":"","price":400}"#,
//! ).unwrap();
//! assert!(record.is_one_way());
//!
//! let criteria = SearchCriteria {
//!     trip_type: TripType::OneWay,
//!     origin: "nyc".into(),
//!     destination: "lon".into(),
//!     departure_date: "2024-01-01".into(),
//!     return_date: None,
//!     passenger_type: PassengerType::Adult,
//!     price_range: PriceRange::default(),
//! };
//! assert_eq!(criteria.trip_type.label(), "One Way");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound of the price slider unless configured otherwise.
pub const DEFAULT_PRICE_FLOOR: u32 = 0;
/// Upper bound of the price slider unless configured otherwise.
pub const DEFAULT_PRICE_CEILING: u32 = 1000;

/// A fixed entry in the bundled dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// Operating airline name
    pub airline: String,
    /// Origin city code, e.g. "NYC"
    pub origin: String,
    /// Destination city code, e.g. "LON"
    pub destination: String,
    /// ISO date of the outbound leg
    pub departure_date: String,
    /// ISO date of the inbound leg, empty for one-way records
    #[serde(default)]
    pub return_date: String,
    /// Whole-dollar fare
    pub price: u32,
}

impl FlightRecord {
    /// True when the record has no return leg.
    pub fn is_one_way(&self) -> bool {
        self.return_date.trim().is_empty()
    }
}

/// Trip selection driven by the form tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripType {
    /// Outbound leg only
    #[default]
    OneWay,
    /// Outbound and return legs
    Return,
}

impl TripType {
    /// Both trip types in tab order.
    pub const ALL: [TripType; 2] = [TripType::OneWay, TripType::Return];

    /// Tab label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            TripType::OneWay => "One Way",
            TripType::Return => "Return",
        }
    }

    /// Zero-based tab index.
    pub fn tab_index(&self) -> usize {
        match self {
            TripType::OneWay => 0,
            TripType::Return => 1,
        }
    }

    /// Trip type for a tab index; anything past the first tab is a return trip.
    pub fn from_tab_index(index: usize) -> Self {
        if index == 0 {
            TripType::OneWay
        } else {
            TripType::Return
        }
    }

    pub fn requires_return_date(&self) -> bool {
        matches!(self, TripType::Return)
    }
}

/// Passenger category offered by the passengers select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassengerType {
    Adult,
    Child,
    Infant,
}

impl PassengerType {
    /// Options in display order.
    pub const ALL: [PassengerType; 3] = [
        PassengerType::Adult,
        PassengerType::Child,
        PassengerType::Infant,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PassengerType::Adult => "Adult",
            PassengerType::Child => "Child",
            PassengerType::Infant => "Infant",
        }
    }
}

impl fmt::Display for PassengerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PassengerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PassengerType::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown passenger type: {trimmed}"))
    }
}

/// Inclusive price window selected on the slider.
///
/// Always ordered: `min() <= max()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Build a range, swapping the ends when given out of order.
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Build a range and clamp both ends into `floor..=ceiling`.
    pub fn clamped(a: u32, b: u32, floor: u32, ceiling: u32) -> Self {
        let (lo, hi) = if floor <= ceiling {
            (floor, ceiling)
        } else {
            (ceiling, floor)
        };
        Self::new(a.clamp(lo, hi), b.clamp(lo, hi))
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_FLOOR, DEFAULT_PRICE_CEILING)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", self.min, self.max)
    }
}

/// Validated search parameters produced by a successful submit.
///
/// Transient: built from form state on submit and dropped after the
/// results are displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub trip_type: TripType,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    /// Present only for return trips
    pub return_date: Option<String>,
    pub passenger_type: PassengerType,
    pub price_range: PriceRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_record_reads_camel_case_json() {
        let json = r#"{
            "airline": "Lumiere",
            "origin": "PAR",
            "destination": "ROM",
            "departureDate": "2024-01-02",
            "returnDate": "2024-01-09",
            "price": 210
        }"#;
        let record: FlightRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.departure_date, "2024-01-02");
        assert_eq!(record.return_date, "2024-01-09");
        assert_eq!(record.price, 210);
        assert!(!record.is_one_way());
    }

    #[test]
    fn missing_return_date_means_one_way() {
        let json = r#"{"airline":"X","origin":"A","destination":"B","departureDate":"2024-01-01","price":1}"#;
        let record: FlightRecord = serde_json::from_str(json).expect("valid record");
        assert!(record.is_one_way());
    }

    #[test]
    fn trip_type_tabs() {
        assert_eq!(TripType::default(), TripType::OneWay);
        assert_eq!(TripType::from_tab_index(0), TripType::OneWay);
        assert_eq!(TripType::from_tab_index(1), TripType::Return);
        assert_eq!(TripType::Return.tab_index(), 1);
        assert_eq!(TripType::Return.label(), "Return");
        assert!(TripType::Return.requires_return_date());
        assert!(!TripType::OneWay.requires_return_date());
    }

    #[test]
    fn passenger_type_parses_labels() {
        assert_eq!("Adult".parse::<PassengerType>(), Ok(PassengerType::Adult));
        assert_eq!(" infant ".parse::<PassengerType>(), Ok(PassengerType::Infant));
        assert!("Pet".parse::<PassengerType>().is_err());
        assert!("".parse::<PassengerType>().is_err());
        assert_eq!(PassengerType::Child.to_string(), "Child");
    }

    #[test]
    fn price_range_orders_and_clamps() {
        let range = PriceRange::new(800, 200);
        assert_eq!((range.min(), range.max()), (200, 800));

        let clamped = PriceRange::clamped(0, 5000, 50, 1000);
        assert_eq!((clamped.min(), clamped.max()), (50, 1000));

        assert!(clamped.contains(50));
        assert!(clamped.contains(1000));
        assert!(!clamped.contains(49));
    }

    #[test]
    fn price_range_display_matches_label() {
        assert_eq!(PriceRange::default().to_string(), "$0 - $1000");
    }
}
