//! Fixed-offset timezone adjustment.
//!
//! Works on `±HH:MM` offset strings as supplied by the flight data. Parsing
//! is fail-soft: a malformed offset counts as UTC rather than an error.

use chrono::{DateTime, Duration, Utc};

/// Parse a `±HH:MM` offset string into signed hours.
///
/// `"+05:30"` → 5.5, `"-08:00"` → -8.0. Any other shape yields 0.0.
#[must_use]
pub fn offset_to_hours(offset: &str) -> f64 {
    let Some(parsed) = parse_offset(offset) else {
        tracing::debug!(offset, "malformed timezone offset, treating as UTC");
        return 0.0;
    };
    parsed
}

fn parse_offset(offset: &str) -> Option<f64> {
    let bytes = offset.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }

    let sign = match bytes[0] {
        b'+' => 1.0,
        b'-' => -1.0,
        _ => return None,
    };

    let hours: f64 = offset.get(1..3)?.parse().ok()?;
    let minutes: f64 = offset.get(4..6)?.parse().ok()?;

    Some(sign * (hours + minutes / 60.0))
}

/// Shift a timestamp by the difference between two `±HH:MM` offsets.
///
/// Malformed offsets on either side parse as zero, so the shift degrades to
/// the other side's offset (or no shift at all) rather than failing.
#[expect(
    clippy::cast_possible_truncation,
    reason = "offset differences are bounded well within i64 seconds"
)]
#[must_use]
pub fn adjust_time_for_timezone(time: DateTime<Utc>, from: &str, to: &str) -> DateTime<Utc> {
    let difference_hours = offset_to_hours(to) - offset_to_hours(from);
    time + Duration::seconds((difference_hours * 3600.0).round() as i64)
}
