//! Geometry and transportation estimates.
//!
//! Great-circle distances between coordinates plus fixed-table travel-time
//! and fare estimates per transport mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Transport mode for travel-time estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Driving,
    Transit,
    Bicycling,
}

impl TravelMode {
    /// Assumed city-average speed in km/h.
    #[must_use]
    pub const fn speed_kmh(&self) -> f64 {
        match self {
            Self::Walking => 5.0,
            Self::Driving => 30.0,
            Self::Transit => 25.0,
            Self::Bicycling => 15.0,
        }
    }

    /// String representation matching the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Driving => "driving",
            Self::Transit => "transit",
            Self::Bicycling => "bicycling",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walking" => Ok(Self::Walking),
            "driving" => Ok(Self::Driving),
            "transit" => Ok(Self::Transit),
            "bicycling" => Ok(Self::Bicycling),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Fare-bearing transport mode for cost estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    Taxi,
    Rideshare,
    PublicTransit,
    Walking,
}

impl CostMode {
    /// Estimated fare per kilometer.
    #[must_use]
    pub const fn rate_per_km(&self) -> f64 {
        match self {
            Self::Taxi => 2.5,
            Self::Rideshare => 2.0,
            Self::PublicTransit => 0.3,
            Self::Walking => 0.0,
        }
    }

    /// String representation matching the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Taxi => "taxi",
            Self::Rideshare => "rideshare",
            Self::PublicTransit => "public_transit",
            Self::Walking => "walking",
        }
    }
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CostMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "taxi" => Ok(Self::Taxi),
            "rideshare" => Ok(Self::Rideshare),
            "public_transit" => Ok(Self::PublicTransit),
            "walking" => Ok(Self::Walking),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Error type for unknown transport mode strings.
#[derive(Debug, Clone)]
pub struct UnknownMode(String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transport mode: {}", self.0)
    }
}

impl std::error::Error for UnknownMode {}

/// Great-circle distance between two coordinates in kilometers.
///
/// Haversine formula; symmetric, zero for identical points.
#[must_use]
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Estimated travel time in whole minutes for a distance and mode.
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded minute counts fit i64 for any terrestrial distance"
)]
#[must_use]
pub fn calculate_travel_time(distance_km: f64, mode: TravelMode) -> i64 {
    (distance_km / mode.speed_kmh() * 60.0).round() as i64
}

/// Estimated fare, rounded to whole currency units, for a distance and mode.
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded fares fit i64 for any terrestrial distance"
)]
#[must_use]
pub fn calculate_transportation_cost(distance_km: f64, mode: CostMode) -> i64 {
    (distance_km * mode.rate_per_km()).round() as i64
}
