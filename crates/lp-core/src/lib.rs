//! Core domain logic for the layover planner.
//!
//! This crate contains the fundamental types and logic for:
//! - Time budgeting: deriving usable exploration time from flight timestamps
//! - Itinerary accumulation: totals and pairwise timing feasibility
//! - Geometry and formatting helpers for distances, fares, and durations
//!
//! Everything here is a synchronous value-to-value transformation with no
//! I/O and no ambient state; session state lives in the explicit containers
//! of [`state`].

pub mod budget;
pub mod category;
pub mod flight;
pub mod format;
pub mod geo;
pub mod itinerary;
pub mod poi;
pub mod state;
pub mod tz;
pub mod types;

pub use budget::{FeasibilityWarning, TimeCalculation, calculate_usable_time};
pub use category::PoiCategory;
pub use flight::{Airport, Flight, FlightInput};
pub use format::{format_distance, format_duration};
pub use geo::{
    CostMode, TravelMode, calculate_distance, calculate_transportation_cost, calculate_travel_time,
};
pub use itinerary::{
    DEFAULT_ACTIVITY_BUFFER, Itinerary, ItineraryItem, ItineraryValidation, TimedActivity,
    Transportation, calculate_itinerary_cost, calculate_itinerary_duration,
    calculate_optimal_departure_time, has_enough_time_between_activities, validate_itinerary,
};
pub use poi::Poi;
pub use state::{FlightState, ItineraryState, StateError};
pub use tz::{adjust_time_for_timezone, offset_to_hours};
pub use types::{FlightId, ItemId, ItineraryId, PoiId, ValidationError};
