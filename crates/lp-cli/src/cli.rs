//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use lp_core::TravelMode;

/// Layover exploration planner.
///
/// Turns flight timestamps into an exploration time budget and validates
/// planned itineraries against it.
#[derive(Debug, Parser)]
#[command(name = "lp", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the usable exploration time for a layover.
    Plan {
        /// Arrival time at the layover city (RFC 3339).
        #[arg(long)]
        arrival: DateTime<Utc>,

        /// Departure time from the layover city (RFC 3339).
        #[arg(long)]
        departure: DateTime<Utc>,

        /// Treat the connection as international.
        #[arg(long)]
        international: bool,

        /// Offset the times are quoted in, `±HH:MM`.
        #[arg(long, requires = "to_tz")]
        from_tz: Option<String>,

        /// Layover city offset used to echo the times as local clock, `±HH:MM`.
        #[arg(long, requires = "from_tz")]
        to_tz: Option<String>,
    },

    /// Estimate distance, travel time, and fares between two points.
    Estimate {
        /// Origin latitude in degrees.
        #[arg(long)]
        from_lat: f64,

        /// Origin longitude in degrees.
        #[arg(long)]
        from_lon: f64,

        /// Destination latitude in degrees.
        #[arg(long)]
        to_lat: f64,

        /// Destination longitude in degrees.
        #[arg(long)]
        to_lon: f64,

        /// Transport mode for the travel-time estimate.
        #[arg(long)]
        mode: Option<TravelMode>,
    },

    /// Load an itinerary file and validate its time budget.
    Itinerary {
        /// Path to the itinerary JSON file.
        file: PathBuf,

        /// Usable layover minutes to validate against.
        #[arg(long)]
        usable: Option<f64>,

        /// Flight departure time for the leave-the-city estimate (RFC 3339).
        #[arg(long)]
        departure: Option<DateTime<Utc>>,

        /// Use the international security buffer for the estimate.
        #[arg(long)]
        international: bool,
    },
}
