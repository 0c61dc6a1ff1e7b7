//! CLI subcommand implementations.

pub mod estimate;
pub mod itinerary;
pub mod plan;
