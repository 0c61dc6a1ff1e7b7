//! Explicit in-memory state containers.
//!
//! The calculators are pure; everything session-shaped lives here and is
//! passed by reference into callers. Containers recompute derived values on
//! every mutation rather than caching across changes.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::budget::{TimeCalculation, calculate_usable_time};
use crate::flight::{Airport, Flight, FlightInput};
use crate::itinerary::{
    Itinerary, ItineraryItem, ItineraryStatus, calculate_itinerary_cost,
    calculate_itinerary_duration,
};
use crate::poi::Poi;
use crate::types::{FlightId, ItemId, ItineraryId, PoiId};

/// Errors from state-container mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A mutation needs an active itinerary and none exists.
    #[error("no active itinerary")]
    NoActiveItinerary,

    /// The referenced item is not part of the itinerary.
    #[error("unknown itinerary item: {0}")]
    UnknownItem(ItemId),

    /// A reorder did not name every item exactly once.
    #[error("reorder must include each of the {expected} items exactly once, got {got}")]
    IncompleteReorder { expected: usize, got: usize },
}

/// Session state for the current flight and its derived time budget.
///
/// The [`TimeCalculation`] is recomputed from scratch on every input change.
#[derive(Debug, Clone, Default)]
pub struct FlightState {
    current_flight: Option<Flight>,
    time_calculation: Option<TimeCalculation>,
}

impl FlightState {
    /// Creates an empty flight state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current flight, if one is set.
    #[must_use]
    pub const fn flight(&self) -> Option<&Flight> {
        self.current_flight.as_ref()
    }

    /// The derived time budget, if a flight is set.
    #[must_use]
    pub const fn time_calculation(&self) -> Option<&TimeCalculation> {
        self.time_calculation.as_ref()
    }

    /// Sets the current flight and recomputes the time budget.
    pub fn set_flight(&mut self, flight: Flight) {
        self.time_calculation = Some(calculate_usable_time(
            flight.arrival_time,
            flight.departure_time,
            flight.is_international,
        ));
        self.current_flight = Some(flight);
    }

    /// Builds a flight from user input and recomputes the time budget.
    ///
    /// The input boundary is where ordering problems surface: reversed
    /// timestamps are logged here, while the calculation itself stays
    /// permissive.
    #[expect(
        clippy::cast_precision_loss,
        reason = "second spans far below the f64 mantissa limit"
    )]
    pub fn set_flight_input(&mut self, input: FlightInput) {
        if input.departure_time < input.arrival_time {
            tracing::warn!(
                arrival = %input.arrival_time,
                departure = %input.departure_time,
                "departure precedes arrival; time budget will be negative"
            );
        }

        let layover_duration =
            (input.departure_time - input.arrival_time).num_seconds() as f64 / 60.0;

        let flight = Flight {
            id: FlightId::new(Uuid::new_v4().to_string()).expect("UUID strings are non-empty"),
            flight_number: input.flight_number,
            airline: String::new(),
            layover_airport: Airport {
                code: input.layover_city,
                name: String::new(),
                city: String::new(),
                country: String::new(),
                latitude: 0.0,
                longitude: 0.0,
                timezone: input.timezone,
            },
            arrival_time: input.arrival_time,
            departure_time: input.departure_time,
            layover_duration,
            is_international: input.is_international,
        };

        self.set_flight(flight);
    }

    /// Clears the flight and its derived budget.
    pub fn clear(&mut self) {
        self.current_flight = None;
        self.time_calculation = None;
    }
}

/// Session state for the itinerary being built.
///
/// Owns the ordered item list exclusively and keeps the `order` field of
/// every item dense and equal to its list position after each mutation.
#[derive(Debug, Clone, Default)]
pub struct ItineraryState {
    current: Option<Itinerary>,
    selected_pois: Vec<Arc<Poi>>,
}

impl ItineraryState {
    /// Creates an empty itinerary state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The itinerary being built, if any.
    #[must_use]
    pub const fn itinerary(&self) -> Option<&Itinerary> {
        self.current.as_ref()
    }

    /// POIs the user has selected, in selection order.
    #[must_use]
    pub fn selected_pois(&self) -> &[Arc<Poi>] {
        &self.selected_pois
    }

    /// Starts a fresh draft itinerary for a flight.
    pub fn create_itinerary(&mut self, flight_id: FlightId, title: impl Into<String>) {
        let now = Utc::now();
        self.current = Some(Itinerary {
            id: ItineraryId::new(Uuid::new_v4().to_string()).expect("UUID strings are non-empty"),
            flight_id,
            title: title.into(),
            items: Vec::new(),
            status: ItineraryStatus::Draft,
            created_at: now,
            updated_at: now,
        });
    }

    /// Appends a POI to the itinerary with its category-default duration.
    pub fn add_poi(&mut self, poi: Arc<Poi>) -> Result<(), StateError> {
        let itinerary = self.current.as_mut().ok_or(StateError::NoActiveItinerary)?;

        let item = ItineraryItem {
            id: ItemId::new(Uuid::new_v4().to_string()).expect("UUID strings are non-empty"),
            poi: Arc::clone(&poi),
            order: itinerary.items.len(),
            duration: poi.visit_minutes(),
            start_time: None,
            end_time: None,
            transportation_to: None,
            transportation_from: None,
            notes: None,
        };
        itinerary.items.push(item);
        itinerary.updated_at = Utc::now();

        self.selected_pois.push(poi);
        Ok(())
    }

    /// Removes every item referencing a POI, keeping item order dense.
    pub fn remove_poi(&mut self, poi_id: &PoiId) -> Result<(), StateError> {
        let itinerary = self.current.as_mut().ok_or(StateError::NoActiveItinerary)?;

        itinerary.items.retain(|item| item.poi.id != *poi_id);
        reindex(itinerary);

        self.selected_pois.retain(|poi| poi.id != *poi_id);
        Ok(())
    }

    /// Reorders items to match the given ID sequence.
    ///
    /// Every current item must appear exactly once; `order` fields are
    /// rewritten to the new positions.
    pub fn reorder_items(&mut self, new_order: &[ItemId]) -> Result<(), StateError> {
        let itinerary = self.current.as_mut().ok_or(StateError::NoActiveItinerary)?;

        if new_order.len() != itinerary.items.len() {
            return Err(StateError::IncompleteReorder {
                expected: itinerary.items.len(),
                got: new_order.len(),
            });
        }

        let mut reordered = Vec::with_capacity(itinerary.items.len());
        for id in new_order {
            let position = itinerary
                .items
                .iter()
                .position(|item| item.id == *id)
                .ok_or_else(|| StateError::UnknownItem(id.clone()))?;
            reordered.push(itinerary.items.remove(position));
        }
        itinerary.items = reordered;
        reindex(itinerary);
        Ok(())
    }

    /// Applies an in-place update to one item.
    pub fn update_item<F>(&mut self, id: &ItemId, update: F) -> Result<(), StateError>
    where
        F: FnOnce(&mut ItineraryItem),
    {
        let itinerary = self.current.as_mut().ok_or(StateError::NoActiveItinerary)?;

        let item = itinerary
            .items
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or_else(|| StateError::UnknownItem(id.clone()))?;
        update(item);
        // order stays list-derived even if the update touched it
        reindex(itinerary);
        Ok(())
    }

    /// Total itinerary duration in minutes; zero without an itinerary.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.current
            .as_ref()
            .map_or(0.0, |itinerary| calculate_itinerary_duration(&itinerary.items))
    }

    /// Total estimated transportation cost; zero without an itinerary.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.current
            .as_ref()
            .map_or(0.0, |itinerary| calculate_itinerary_cost(&itinerary.items))
    }

    /// Drops the itinerary and the POI selection.
    pub fn clear(&mut self) {
        self.current = None;
        self.selected_pois.clear();
    }
}

/// Rewrite `order` fields to match list positions and touch `updated_at`.
fn reindex(itinerary: &mut Itinerary) {
    for (index, item) in itinerary.items.iter_mut().enumerate() {
        item.order = index;
    }
    itinerary.updated_at = Utc::now();
}
