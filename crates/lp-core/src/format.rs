//! Human-readable duration and distance formatting.
//!
//! Deterministic and locale-independent; presentation components render the
//! output verbatim.

/// Format whole minutes as "45 min", "2h", or "1h 30m".
#[must_use]
pub fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;

    if remaining == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remaining}m")
    }
}

/// Format kilometers as "500m" below one kilometer, otherwise "1.2km".
#[expect(
    clippy::cast_possible_truncation,
    reason = "sub-kilometer distances round to small meter counts"
)]
#[must_use]
pub fn format_distance(kilometers: f64) -> String {
    if kilometers < 1.0 {
        return format!("{}m", (kilometers * 1000.0).round() as i64);
    }

    format!("{kilometers:.1}km")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn duration_below_an_hour() {
        assert_snapshot!(format_duration(45), @"45 min");
        assert_snapshot!(format_duration(0), @"0 min");
    }

    #[test]
    fn duration_with_whole_hours() {
        assert_snapshot!(format_duration(120), @"2h");
        assert_snapshot!(format_duration(60), @"1h");
    }

    #[test]
    fn duration_with_hours_and_minutes() {
        assert_snapshot!(format_duration(90), @"1h 30m");
        assert_snapshot!(format_duration(485), @"8h 5m");
    }

    #[test]
    fn distance_below_a_kilometer_in_meters() {
        assert_snapshot!(format_distance(0.5), @"500m");
        assert_snapshot!(format_distance(0.025), @"25m");
    }

    #[test]
    fn distance_in_kilometers_with_one_decimal() {
        assert_snapshot!(format_distance(1.0), @"1.0km");
        assert_snapshot!(format_distance(12.345), @"12.3km");
    }
}
