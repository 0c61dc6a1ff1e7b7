//! Estimate command: distance, travel time, and fares between two points.

use std::io::Write;

use anyhow::Result;

use lp_core::{
    CostMode, TravelMode, calculate_distance, calculate_transportation_cost,
    calculate_travel_time, format_distance, format_duration,
};

const FARE_MODES: [CostMode; 4] = [
    CostMode::Taxi,
    CostMode::Rideshare,
    CostMode::PublicTransit,
    CostMode::Walking,
];

pub fn run<W: Write>(
    writer: &mut W,
    from: (f64, f64),
    to: (f64, f64),
    mode: TravelMode,
) -> Result<()> {
    let distance = calculate_distance(from.0, from.1, to.0, to.1);
    let travel_time = calculate_travel_time(distance, mode);

    writeln!(writer, "Distance: {}", format_distance(distance))?;
    writeln!(
        writer,
        "Travel time ({mode}): {}",
        format_duration(travel_time)
    )?;
    writeln!(writer, "Estimated fares:")?;
    for fare_mode in FARE_MODES {
        writeln!(
            writer,
            "- {fare_mode}: {}",
            calculate_transportation_cost(distance, fare_mode)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_distance_time_and_fares() {
        let mut output = Vec::new();
        // CDG airport to central Paris.
        run(
            &mut output,
            (49.0097, 2.5479),
            (48.8566, 2.3522),
            TravelMode::Transit,
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Distance: 22."), "{output}");
        assert!(output.contains("Travel time (transit):"));
        assert!(output.contains("- taxi: "));
        assert!(output.contains("- walking: 0"));
    }

    #[test]
    fn identical_points_cost_nothing() {
        let mut output = Vec::new();
        run(
            &mut output,
            (48.8566, 2.3522),
            (48.8566, 2.3522),
            TravelMode::Walking,
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Distance: 0m"));
        assert!(output.contains("Travel time (walking): 0 min"));
        assert!(output.contains("- taxi: 0"));
    }
}
