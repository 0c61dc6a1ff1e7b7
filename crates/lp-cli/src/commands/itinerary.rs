//! Itinerary command: load a plan from JSON and validate its time budget.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use lp_core::budget::{SECURITY_BUFFER_DOMESTIC, SECURITY_BUFFER_INTERNATIONAL, TRAVEL_TIME_FROM_CITY};
use lp_core::{
    CostMode, FlightId, ItineraryState, Poi, PoiCategory, PoiId, Transportation,
    calculate_optimal_departure_time, format_duration, validate_itinerary,
};

/// On-disk itinerary shape.
///
/// Looser than the domain model: categories default, durations
/// fall back to the category table, and transportation legs are optional.
#[derive(Debug, Deserialize)]
pub struct ItineraryFile {
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,

    /// Ordered activity list.
    pub items: Vec<FileItem>,
}

/// One activity in an itinerary file.
#[derive(Debug, Deserialize)]
pub struct FileItem {
    /// POI name.
    pub name: String,

    /// POI category; unknown strings fall back to the generic category.
    #[serde(default)]
    pub category: Option<PoiCategory>,

    /// Visit duration in minutes; defaults to the category table.
    #[serde(default)]
    pub duration: Option<f64>,

    /// Scheduled start, when planned down to the clock.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// Scheduled end, when planned down to the clock.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,

    /// Leg from the previous location to this POI.
    #[serde(default)]
    pub travel_to: Option<FileLeg>,
}

/// A transportation leg in an itinerary file.
#[derive(Debug, Deserialize)]
pub struct FileLeg {
    pub mode: CostMode,
    pub duration: f64,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub cost: f64,
}

pub fn run<W: Write>(
    writer: &mut W,
    file: &Path,
    usable_minutes: Option<f64>,
    flight_departure: Option<DateTime<Utc>>,
    international: bool,
    gap_buffer_min: f64,
) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let parsed: ItineraryFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let title = parsed.title.unwrap_or_else(|| "Layover plan".to_string());
    let state = build_state(&title, parsed.items)?;
    let itinerary = state
        .itinerary()
        .context("itinerary was not created")?;

    writeln!(
        writer,
        "Itinerary: {} ({} stops)",
        itinerary.title,
        itinerary.items.len()
    )?;
    writeln!(
        writer,
        "Total duration: {}",
        minutes(state.total_duration())
    )?;
    writeln!(writer, "Transportation cost: {}", state.total_cost())?;

    let validation = validate_itinerary(
        &itinerary.items,
        usable_minutes.unwrap_or(f64::INFINITY),
        Some(gap_buffer_min),
    );

    for error in &validation.errors {
        writeln!(writer, "Error: {error}")?;
    }
    for warning in &validation.warnings {
        writeln!(writer, "Warning: {warning}")?;
    }

    if usable_minutes.is_some() {
        writeln!(
            writer,
            "Feasibility score: {}/100 (slack {})",
            validation.feasibility_score,
            minutes(validation.buffer_time.max(0.0))
        )?;
    }

    if let Some(departure) = flight_departure {
        let security_buffer = if international {
            SECURITY_BUFFER_INTERNATIONAL
        } else {
            SECURITY_BUFFER_DOMESTIC
        };
        let leave_by =
            calculate_optimal_departure_time(departure, TRAVEL_TIME_FROM_CITY, security_buffer);
        writeln!(writer, "Leave the city by: {}", leave_by.to_rfc3339())?;

        let last_end = itinerary.items.iter().rev().find_map(|i| i.end_time);
        if let Some(last_end) = last_end {
            if last_end > leave_by {
                writeln!(
                    writer,
                    "Warning: last activity ends {} after the latest city departure",
                    minutes(lp_core::itinerary::time_difference(last_end, leave_by))
                )?;
            }
        }
    }

    Ok(())
}

/// Build the itinerary through the state container so item ordering and
/// durations follow the same rules as interactive planning.
fn build_state(title: &str, items: Vec<FileItem>) -> Result<ItineraryState> {
    let mut state = ItineraryState::new();
    state.create_itinerary(FlightId::new("file-import")?, title);

    for (index, entry) in items.into_iter().enumerate() {
        let category = entry.category.unwrap_or(PoiCategory::FALLBACK);
        let poi = Arc::new(Poi {
            id: PoiId::new(format!("file-poi-{index}"))?,
            name: entry.name,
            address: None,
            latitude: 0.0,
            longitude: 0.0,
            category,
            rating: None,
            user_ratings_total: None,
            price_level: None,
            estimated_visit_minutes: entry.duration,
        });
        state.add_poi(Arc::clone(&poi))?;

        let item_id = state
            .itinerary()
            .and_then(|it| it.items.last())
            .map(|item| item.id.clone())
            .context("item was not appended")?;
        state.update_item(&item_id, |item| {
            item.start_time = entry.start_time;
            item.end_time = entry.end_time;
            item.transportation_to = entry.travel_to.map(|leg| Transportation {
                mode: leg.mode,
                duration: leg.duration,
                distance: leg.distance,
                cost: leg.cost,
            });
        })?;
    }

    Ok(state)
}

/// Round real-valued minutes for display.
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded minute counts fit i64"
)]
fn minutes(value: f64) -> String {
    format_duration(value.round() as i64)
}
