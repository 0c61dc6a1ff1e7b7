//! Plan command: derive the usable time budget for a layover.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};

use lp_core::{adjust_time_for_timezone, calculate_usable_time, format_duration};

/// Compute and print the layover time budget.
///
/// When both offsets are given, the arrival and departure are also echoed as
/// wall-clock times converted from the offset they were entered in to the
/// layover city's offset. The budget itself depends only on the span between
/// the two instants.
pub fn run<W: Write>(
    writer: &mut W,
    arrival: DateTime<Utc>,
    departure: DateTime<Utc>,
    international: bool,
    from_tz: Option<&str>,
    to_tz: Option<&str>,
) -> Result<()> {
    if departure < arrival {
        tracing::warn!(%arrival, %departure, "departure precedes arrival");
    }

    let calc = calculate_usable_time(arrival, departure, international);

    if let (Some(from), Some(to)) = (from_tz, to_tz) {
        let local_arrival = adjust_time_for_timezone(arrival, from, to);
        let local_departure = adjust_time_for_timezone(departure, from, to);
        writeln!(
            writer,
            "Arrival ({to} local):   {}",
            local_arrival.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(
            writer,
            "Departure ({to} local): {}",
            local_departure.format("%Y-%m-%d %H:%M")
        )?;
    }

    writeln!(writer, "Total layover:   {}", minutes(calc.total_layover))?;
    writeln!(writer, "Security buffer: {}", minutes(calc.security_buffer))?;
    writeln!(
        writer,
        "City transfer:   {} out, {} back",
        minutes(calc.travel_to_city),
        minutes(calc.travel_from_city)
    )?;
    writeln!(writer, "Usable time:     {}", minutes(calc.usable_time))?;
    writeln!(
        writer,
        "Feasible:        {}",
        if calc.is_feasible { "yes" } else { "no" }
    )?;

    if !calc.warnings.is_empty() {
        writeln!(writer, "Warnings:")?;
        for warning in &calc.warnings {
            writeln!(writer, "- {warning}")?;
        }
    }

    Ok(())
}

/// Round real-valued minutes for display.
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded minute counts fit i64"
)]
fn minutes(value: f64) -> String {
    format_duration(value.round() as i64)
}
