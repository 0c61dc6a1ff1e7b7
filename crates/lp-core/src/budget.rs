//! Layover time-budget calculation.
//!
//! Derives the exploration time left in a layover after subtracting the
//! security buffer and the fixed airport-to-city travel legs, along with
//! feasibility warnings for display.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Security buffer for international connections, in minutes.
pub const SECURITY_BUFFER_INTERNATIONAL: f64 = 120.0;

/// Security buffer for domestic connections, in minutes.
pub const SECURITY_BUFFER_DOMESTIC: f64 = 60.0;

/// Fixed estimate for the airport-to-city leg, in minutes.
pub const TRAVEL_TIME_TO_CITY: f64 = 30.0;

/// Fixed estimate for the city-to-airport leg, in minutes.
pub const TRAVEL_TIME_FROM_CITY: f64 = 30.0;

/// Minimum usable minutes for a layover to count as feasible.
pub const FEASIBILITY_THRESHOLD: f64 = 60.0;

/// Below this many usable minutes, only quick visits are advisable.
pub const LIMITED_TIME_THRESHOLD: f64 = 120.0;

/// Feasibility warnings attached to a [`TimeCalculation`].
///
/// A closed set so callers can match on the condition; `Display` renders the
/// user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeasibilityWarning {
    /// Usable time is below the feasibility threshold.
    TooShort,
    /// Usable time allows only short visits.
    LimitedTime,
    /// International connections need extra security slack.
    InternationalSecurity,
}

impl FeasibilityWarning {
    /// The user-facing warning message.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TooShort => "Layover time is too short for city exploration",
            Self::LimitedTime => "Limited time available - consider quick visits only",
            Self::InternationalSecurity => "International flight - allow extra time for security",
        }
    }
}

impl fmt::Display for FeasibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FeasibilityWarning {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Derived time budget for a layover.
///
/// All durations are real-valued minutes. Recomputed from scratch on every
/// input change; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeCalculation {
    /// Minutes between arrival and departure. Negative if the inputs are
    /// reversed; this function does not validate ordering.
    pub total_layover: f64,

    /// Security buffer applied, in minutes.
    pub security_buffer: f64,

    /// Airport-to-city travel estimate, in minutes.
    pub travel_to_city: f64,

    /// City-to-airport travel estimate, in minutes.
    pub travel_from_city: f64,

    /// Exploration minutes left, clamped to zero for display.
    pub usable_time: f64,

    /// Whether the layover leaves at least [`FEASIBILITY_THRESHOLD`] usable
    /// minutes. Judged on the unclamped value.
    pub is_feasible: bool,

    /// Warnings in display order.
    pub warnings: Vec<FeasibilityWarning>,
}

/// Calculate the usable exploration time for a layover.
///
/// Total over its domain: reversed timestamps produce a negative
/// `total_layover` and the "too short" warning rather than an error.
/// Ordering validation, where wanted, belongs to the input boundary.
///
/// The clamp on `usable_time` is display-only; `is_feasible` and the
/// warnings are driven by the unclamped value.
#[must_use]
pub fn calculate_usable_time(
    arrival: DateTime<Utc>,
    departure: DateTime<Utc>,
    is_international: bool,
) -> TimeCalculation {
    let total_layover = minutes_between(arrival, departure);

    let security_buffer = if is_international {
        SECURITY_BUFFER_INTERNATIONAL
    } else {
        SECURITY_BUFFER_DOMESTIC
    };

    let usable_raw = total_layover - security_buffer - TRAVEL_TIME_TO_CITY - TRAVEL_TIME_FROM_CITY;
    let is_feasible = usable_raw >= FEASIBILITY_THRESHOLD;

    let mut warnings = Vec::new();
    if usable_raw < FEASIBILITY_THRESHOLD {
        warnings.push(FeasibilityWarning::TooShort);
    } else if usable_raw < LIMITED_TIME_THRESHOLD {
        warnings.push(FeasibilityWarning::LimitedTime);
    }
    if is_international {
        warnings.push(FeasibilityWarning::InternationalSecurity);
    }

    tracing::debug!(
        total_layover,
        security_buffer,
        usable_raw,
        is_feasible,
        "computed layover time budget"
    );

    TimeCalculation {
        total_layover,
        security_buffer,
        travel_to_city: TRAVEL_TIME_TO_CITY,
        travel_from_city: TRAVEL_TIME_FROM_CITY,
        usable_time: usable_raw.max(0.0),
        is_feasible,
        warnings,
    }
}

/// Signed minutes from `start` to `end`, fractional below one minute.
#[expect(
    clippy::cast_precision_loss,
    reason = "millisecond spans far below the f64 mantissa limit"
)]
fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ts(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0)
            .single()
            .expect("valid test timestamp")
            + Duration::minutes(minutes)
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "integral minute values are exact")]
    fn domestic_three_hours_is_exactly_feasible() {
        let calc = calculate_usable_time(ts(0), ts(180), false);

        assert_eq!(calc.total_layover, 180.0);
        assert_eq!(calc.security_buffer, SECURITY_BUFFER_DOMESTIC);
        assert_eq!(calc.usable_time, 60.0);
        assert!(calc.is_feasible);
        assert!(calc.warnings.is_empty());
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "integral minute values are exact")]
    fn domestic_ninety_minutes_is_too_short() {
        let calc = calculate_usable_time(ts(0), ts(90), false);

        // Raw usable time is -30; displayed value clamps to zero.
        assert_eq!(calc.usable_time, 0.0);
        assert!(!calc.is_feasible);
        assert_eq!(calc.warnings, vec![FeasibilityWarning::TooShort]);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "integral minute values are exact")]
    fn international_buffer_and_warning_order() {
        let calc = calculate_usable_time(ts(0), ts(200), true);

        assert_eq!(calc.security_buffer, SECURITY_BUFFER_INTERNATIONAL);
        assert_eq!(calc.usable_time, 20.0);
        assert!(!calc.is_feasible);
        assert_eq!(
            calc.warnings,
            vec![
                FeasibilityWarning::TooShort,
                FeasibilityWarning::InternationalSecurity,
            ]
        );
    }

    #[test]
    fn limited_time_warning_between_thresholds() {
        let calc = calculate_usable_time(ts(0), ts(210), false);

        // 210 - 60 - 60 = 90 usable: feasible but tight.
        assert!(calc.is_feasible);
        assert_eq!(calc.warnings, vec![FeasibilityWarning::LimitedTime]);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "integral minute values are exact")]
    fn reversed_timestamps_clamp_display_but_not_feasibility() {
        // Regression: the clamp is display-only. Reversed inputs must keep
        // the negative total and the "too short" warning.
        let calc = calculate_usable_time(ts(60), ts(0), false);

        assert_eq!(calc.total_layover, -60.0);
        assert_eq!(calc.usable_time, 0.0);
        assert!(!calc.is_feasible);
        assert_eq!(calc.warnings, vec![FeasibilityWarning::TooShort]);
    }

    #[test]
    fn fractional_minutes_flow_through() {
        let calc = calculate_usable_time(ts(0), ts(180) + Duration::seconds(30), false);

        assert!((calc.total_layover - 180.5).abs() < 1e-9);
        assert!((calc.usable_time - 60.5).abs() < 1e-9);
        assert!(calc.is_feasible);
    }

    #[test]
    fn warning_messages_are_stable() {
        assert_eq!(
            FeasibilityWarning::TooShort.to_string(),
            "Layover time is too short for city exploration"
        );
        assert_eq!(
            FeasibilityWarning::LimitedTime.to_string(),
            "Limited time available - consider quick visits only"
        );
        assert_eq!(
            FeasibilityWarning::InternationalSecurity.to_string(),
            "International flight - allow extra time for security"
        );
    }

    #[test]
    fn warnings_serialize_as_messages() {
        let json = serde_json::to_string(&FeasibilityWarning::TooShort).unwrap();
        assert_eq!(json, "\"Layover time is too short for city exploration\"");
    }
}
