//! Itinerary data model and time accumulation.
//!
//! Sums planned activity durations, checks the slack between consecutive
//! activities, and derives when to leave the city for the return flight.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::format::format_duration;
use crate::geo::CostMode;
use crate::poi::Poi;
use crate::types::{FlightId, ItemId, ItineraryId};

/// Default slack between consecutive activities, in minutes.
pub const DEFAULT_ACTIVITY_BUFFER: f64 = 15.0;

/// Score deduction per tight transfer when validating an itinerary.
const TIGHT_TRANSFER_PENALTY: u8 = 15;

/// Lifecycle state of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItineraryStatus {
    #[default]
    Draft,
    Planned,
    Active,
    Completed,
    Cancelled,
}

/// A transportation leg attached to an itinerary item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transportation {
    /// Fare-bearing transport mode.
    pub mode: CostMode,

    /// Travel duration in minutes.
    pub duration: f64,

    /// Distance in kilometers.
    #[serde(default)]
    pub distance: f64,

    /// Estimated cost.
    #[serde(default)]
    pub cost: f64,
}

/// One planned activity in an itinerary.
///
/// References its POI by identity; the POI is shared read-only and never
/// owned by the item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryItem {
    /// Unique identifier.
    pub id: ItemId,

    /// The place being visited.
    pub poi: Arc<Poi>,

    /// Position in the itinerary. Kept dense and equal to the list index by
    /// the state container; the accumulator itself iterates in list order.
    pub order: usize,

    /// Planned visit duration in minutes.
    pub duration: f64,

    /// Planned start time, when scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// Planned end time, when scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Leg from the previous location to this POI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation_to: Option<Transportation>,

    /// Leg from this POI onward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation_from: Option<Transportation>,

    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An ordered plan of activities for one layover.
///
/// Exclusively owns its item list; items are reordered and re-indexed only
/// through the state container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Unique identifier.
    pub id: ItineraryId,

    /// The flight whose layover this itinerary fills.
    pub flight_id: FlightId,

    /// Display title.
    pub title: String,

    /// Ordered activity list.
    pub items: Vec<ItineraryItem>,

    /// Lifecycle state.
    #[serde(default)]
    pub status: ItineraryStatus,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Anything with a duration and an optional inbound travel time.
///
/// The accumulator is generic over this seam so it works on itinerary items
/// and on bare records alike.
pub trait TimedActivity {
    /// Activity duration in minutes.
    fn duration_min(&self) -> f64;

    /// Travel time into the activity in minutes, if any.
    fn travel_time_min(&self) -> Option<f64>;
}

impl TimedActivity for ItineraryItem {
    fn duration_min(&self) -> f64 {
        self.duration
    }

    fn travel_time_min(&self) -> Option<f64> {
        self.transportation_to.as_ref().map(|t| t.duration)
    }
}

/// Total itinerary duration in minutes: sum of each activity's duration plus
/// its travel time. Empty input sums to zero.
#[must_use]
pub fn calculate_itinerary_duration<A: TimedActivity>(activities: &[A]) -> f64 {
    activities
        .iter()
        .map(|a| a.duration_min() + a.travel_time_min().unwrap_or(0.0))
        .sum()
}

/// Total estimated transportation cost over all items.
#[must_use]
pub fn calculate_itinerary_cost(items: &[ItineraryItem]) -> f64 {
    items
        .iter()
        .map(|item| {
            item.transportation_to.as_ref().map_or(0.0, |t| t.cost)
                + item.transportation_from.as_ref().map_or(0.0, |t| t.cost)
        })
        .sum()
}

/// Absolute difference between two timestamps in minutes.
#[expect(
    clippy::cast_precision_loss,
    reason = "millisecond spans far below the f64 mantissa limit"
)]
#[must_use]
pub fn time_difference(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    ((a - b).num_milliseconds() as f64 / 60_000.0).abs()
}

/// Whether a timestamp falls within a range, bounds inclusive.
#[must_use]
pub fn is_time_in_range(time: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    time >= start && time <= end
}

/// Whether the gap between two activities leaves room for the transfer.
///
/// True iff the absolute gap is at least `travel_time` plus the buffer
/// (default [`DEFAULT_ACTIVITY_BUFFER`]). Call per adjacent pair; the
/// accumulator does not invoke this itself.
#[must_use]
pub fn has_enough_time_between_activities(
    first_end: DateTime<Utc>,
    second_start: DateTime<Utc>,
    travel_time_min: f64,
    buffer_min: Option<f64>,
) -> bool {
    let buffer = buffer_min.unwrap_or(DEFAULT_ACTIVITY_BUFFER);
    time_difference(first_end, second_start) >= travel_time_min + buffer
}

/// When to leave the city to make the return flight.
///
/// Pure subtraction of the airport transfer and security buffer from the
/// flight departure; no clamping. A result before the last activity's end
/// time means the plan does not fit, which the caller must check itself.
#[expect(
    clippy::cast_possible_truncation,
    reason = "minute buffers are bounded well within i64 seconds"
)]
#[must_use]
pub fn calculate_optimal_departure_time(
    flight_departure: DateTime<Utc>,
    travel_to_airport_min: f64,
    security_buffer_min: f64,
) -> DateTime<Utc> {
    let total_buffer = travel_to_airport_min + security_buffer_min;
    flight_departure - Duration::seconds((total_buffer * 60.0).round() as i64)
}

/// Outcome of validating an itinerary against a layover's time budget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItineraryValidation {
    /// Whether the plan fits the usable time with no errors.
    pub is_valid: bool,

    /// Non-fatal issues, e.g. tight transfers.
    pub warnings: Vec<String>,

    /// Fatal issues, e.g. total duration over budget.
    pub errors: Vec<String>,

    /// Total planned minutes including travel.
    pub total_time: f64,

    /// Slack against the usable budget in minutes; negative when over.
    pub buffer_time: f64,

    /// 0-100 feasibility score.
    pub feasibility_score: u8,
}

/// Validate an ordered item list against a usable-time budget.
///
/// Checks the total against the budget and, for each adjacent pair with
/// scheduled times, the transfer slack via
/// [`has_enough_time_between_activities`]. Items without scheduled times are
/// skipped by the pairwise check.
#[must_use]
pub fn validate_itinerary(
    items: &[ItineraryItem],
    usable_minutes: f64,
    gap_buffer_min: Option<f64>,
) -> ItineraryValidation {
    let total_time = calculate_itinerary_duration(items);
    let buffer_time = usable_minutes - total_time;

    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if total_time > usable_minutes {
        errors.push(format!(
            "Planned activities ({}) exceed the usable layover time ({})",
            format_minutes(total_time),
            format_minutes(usable_minutes),
        ));
    }

    for pair in items.windows(2) {
        let (Some(first_end), Some(second_start)) = (pair[0].end_time, pair[1].start_time) else {
            continue;
        };
        let travel = pair[1].travel_time_min().unwrap_or(0.0);
        if !has_enough_time_between_activities(first_end, second_start, travel, gap_buffer_min) {
            warnings.push(format!(
                "Tight transfer from {} to {}: {} gap for {} of travel",
                pair[0].poi.name,
                pair[1].poi.name,
                format_minutes(time_difference(first_end, second_start)),
                format_minutes(travel),
            ));
        }
    }

    let feasibility_score = if errors.is_empty() {
        let penalty = u8::try_from(warnings.len())
            .unwrap_or(u8::MAX)
            .saturating_mul(TIGHT_TRANSFER_PENALTY)
            .min(100);
        100 - penalty
    } else {
        0
    };

    ItineraryValidation {
        is_valid: errors.is_empty(),
        warnings,
        errors,
        total_time,
        buffer_time,
        feasibility_score,
    }
}

/// Round to whole minutes for messages.
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded minute counts fit i64"
)]
fn format_minutes(minutes: f64) -> String {
    format_duration(minutes.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::category::PoiCategory;
    use crate::types::PoiId;

    /// Bare activity record for the accumulator.
    struct TestActivity {
        duration: f64,
        travel_time: Option<f64>,
    }

    impl TimedActivity for TestActivity {
        fn duration_min(&self) -> f64 {
            self.duration
        }

        fn travel_time_min(&self) -> Option<f64> {
            self.travel_time
        }
    }

    fn ts(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0)
            .single()
            .expect("valid test timestamp")
            + Duration::minutes(minutes)
    }

    fn poi(name: &str) -> Arc<Poi> {
        Arc::new(Poi {
            id: PoiId::new(format!("poi-{name}")).unwrap(),
            name: name.to_string(),
            address: None,
            latitude: 48.86,
            longitude: 2.35,
            category: PoiCategory::Museum,
            rating: None,
            user_ratings_total: None,
            price_level: None,
            estimated_visit_minutes: None,
        })
    }

    fn item(name: &str, order: usize, duration: f64) -> ItineraryItem {
        ItineraryItem {
            id: ItemId::new(format!("item-{order}")).unwrap(),
            poi: poi(name),
            order,
            duration,
            start_time: None,
            end_time: None,
            transportation_to: None,
            transportation_from: None,
            notes: None,
        }
    }

    fn leg(mode: CostMode, duration: f64, cost: f64) -> Transportation {
        Transportation {
            mode,
            duration,
            distance: 0.0,
            cost,
        }
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "integral minute values are exact")]
    fn empty_itinerary_sums_to_zero() {
        let activities: Vec<TestActivity> = Vec::new();
        assert_eq!(calculate_itinerary_duration(&activities), 0.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "integral minute values are exact")]
    fn duration_sums_activities_and_travel() {
        let activities = vec![
            TestActivity {
                duration: 60.0,
                travel_time: None,
            },
            TestActivity {
                duration: 30.0,
                travel_time: Some(15.0),
            },
        ];
        assert_eq!(calculate_itinerary_duration(&activities), 105.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "integral minute values are exact")]
    fn items_contribute_inbound_travel_time() {
        let mut second = item("Louvre", 1, 30.0);
        second.transportation_to = Some(leg(CostMode::Taxi, 15.0, 12.0));
        let items = vec![item("Orsay", 0, 60.0), second];

        assert_eq!(calculate_itinerary_duration(&items), 105.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "integral minute values are exact")]
    fn cost_sums_both_legs() {
        let mut a = item("Orsay", 0, 60.0);
        a.transportation_to = Some(leg(CostMode::Taxi, 20.0, 18.0));
        a.transportation_from = Some(leg(CostMode::PublicTransit, 25.0, 2.0));
        let b = item("Louvre", 1, 30.0);

        assert_eq!(calculate_itinerary_cost(&[a, b]), 20.0);
    }

    #[test]
    fn gap_check_against_travel_plus_buffer() {
        // 50-minute gap, 30 minutes of travel, default 15 buffer: 50 >= 45.
        assert!(has_enough_time_between_activities(
            ts(0),
            ts(50),
            30.0,
            None
        ));
        // 40-minute gap fails: 40 < 45.
        assert!(!has_enough_time_between_activities(
            ts(0),
            ts(40),
            30.0,
            None
        ));
        // Explicit buffer overrides the default.
        assert!(has_enough_time_between_activities(
            ts(0),
            ts(40),
            30.0,
            Some(5.0)
        ));
    }

    #[test]
    fn gap_check_uses_absolute_difference() {
        assert!(has_enough_time_between_activities(
            ts(50),
            ts(0),
            30.0,
            None
        ));
    }

    #[test]
    fn optimal_departure_subtracts_buffers() {
        let departure = ts(300);
        let optimal = calculate_optimal_departure_time(departure, 30.0, 120.0);
        assert_eq!(optimal, ts(150));
    }

    #[test]
    fn optimal_departure_does_not_clamp() {
        // A result before "now" is legal; the caller compares it against the
        // last activity's end time.
        let optimal = calculate_optimal_departure_time(ts(60), 45.0, 60.0);
        assert_eq!(optimal, ts(-45));
    }

    #[test]
    fn time_helpers() {
        assert!((time_difference(ts(0), ts(90)) - 90.0).abs() < f64::EPSILON);
        assert!((time_difference(ts(90), ts(0)) - 90.0).abs() < f64::EPSILON);

        assert!(is_time_in_range(ts(30), ts(0), ts(60)));
        assert!(is_time_in_range(ts(0), ts(0), ts(60)));
        assert!(is_time_in_range(ts(60), ts(0), ts(60)));
        assert!(!is_time_in_range(ts(61), ts(0), ts(60)));
    }

    #[test]
    fn validation_passes_when_everything_fits() {
        let mut a = item("Orsay", 0, 60.0);
        a.start_time = Some(ts(0));
        a.end_time = Some(ts(60));
        let mut b = item("Louvre", 1, 45.0);
        b.start_time = Some(ts(90));
        b.end_time = Some(ts(135));
        b.transportation_to = Some(leg(CostMode::Walking, 10.0, 0.0));

        let validation = validate_itinerary(&[a, b], 180.0, None);
        assert!(validation.is_valid);
        assert!(validation.warnings.is_empty());
        assert_eq!(validation.feasibility_score, 100);
        assert!((validation.total_time - 115.0).abs() < f64::EPSILON);
        assert!((validation.buffer_time - 65.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validation_errors_when_over_budget() {
        let items = vec![item("Orsay", 0, 120.0), item("Louvre", 1, 120.0)];

        let validation = validate_itinerary(&items, 180.0, None);
        assert!(!validation.is_valid);
        assert_eq!(validation.feasibility_score, 0);
        assert_eq!(validation.errors.len(), 1);
        assert!(validation.errors[0].contains("4h"), "{:?}", validation.errors);
        assert!(validation.buffer_time < 0.0);
    }

    #[test]
    fn validation_warns_on_tight_transfers() {
        let mut a = item("Orsay", 0, 60.0);
        a.start_time = Some(ts(0));
        a.end_time = Some(ts(60));
        let mut b = item("Louvre", 1, 30.0);
        b.start_time = Some(ts(70));
        b.end_time = Some(ts(100));
        b.transportation_to = Some(leg(CostMode::Taxi, 20.0, 15.0));

        // 10-minute gap for 20 minutes of travel plus buffer.
        let validation = validate_itinerary(&[a, b], 300.0, None);
        assert!(validation.is_valid);
        assert_eq!(validation.warnings.len(), 1);
        assert!(validation.warnings[0].contains("Orsay"));
        assert!(validation.warnings[0].contains("Louvre"));
        assert_eq!(validation.feasibility_score, 85);
    }

    #[test]
    fn validation_skips_unscheduled_pairs() {
        let items = vec![item("Orsay", 0, 30.0), item("Louvre", 1, 30.0)];

        let validation = validate_itinerary(&items, 120.0, None);
        assert!(validation.is_valid);
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn item_serde_roundtrip() {
        let mut a = item("Orsay", 0, 60.0);
        a.transportation_to = Some(leg(CostMode::Rideshare, 12.0, 9.0));

        let json = serde_json::to_string(&a).unwrap();
        let parsed: ItineraryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, a);
    }
}
