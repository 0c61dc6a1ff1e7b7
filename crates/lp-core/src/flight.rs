//! Flight and airport data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::FlightId;

/// Airport details for a layover city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Airport {
    /// IATA code, e.g. "CDG".
    pub code: String,

    /// Airport name.
    #[serde(default)]
    pub name: String,

    /// City the airport serves.
    #[serde(default)]
    pub city: String,

    /// Country.
    #[serde(default)]
    pub country: String,

    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: f64,

    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: f64,

    /// Timezone offset string, `±HH:MM`.
    #[serde(default)]
    pub timezone: String,
}

/// A flight with its layover timing details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    /// Unique identifier.
    pub id: FlightId,

    /// Flight number, e.g. "AF123".
    pub flight_number: String,

    /// Airline name.
    #[serde(default)]
    pub airline: String,

    /// Airport of the layover city.
    pub layover_airport: Airport,

    /// Arrival time at the layover city.
    pub arrival_time: DateTime<Utc>,

    /// Departure time from the layover city.
    pub departure_time: DateTime<Utc>,

    /// Layover duration in minutes, derived from the timestamps.
    pub layover_duration: f64,

    /// Whether the connection is international.
    pub is_international: bool,
}

/// User-entered flight details, as collected by the input boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightInput {
    /// Flight number.
    pub flight_number: String,

    /// IATA code of the layover city.
    pub layover_city: String,

    /// Arrival time at the layover city.
    pub arrival_time: DateTime<Utc>,

    /// Departure time from the layover city.
    pub departure_time: DateTime<Utc>,

    /// Whether the connection is international.
    pub is_international: bool,

    /// Timezone offset string of the layover city, `±HH:MM`.
    #[serde(default)]
    pub timezone: String,
}
