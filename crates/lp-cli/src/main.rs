use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lp_cli::commands::{estimate, itinerary, plan};
use lp_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Plan {
            arrival,
            departure,
            international,
            from_tz,
            to_tz,
        }) => {
            plan::run(
                &mut stdout,
                *arrival,
                *departure,
                *international,
                from_tz.as_deref(),
                to_tz.as_deref(),
            )?;
        }
        Some(Commands::Estimate {
            from_lat,
            from_lon,
            to_lat,
            to_lon,
            mode,
        }) => {
            let mode = (*mode).unwrap_or(config.default_mode);
            estimate::run(
                &mut stdout,
                (*from_lat, *from_lon),
                (*to_lat, *to_lon),
                mode,
            )?;
        }
        Some(Commands::Itinerary {
            file,
            usable,
            departure,
            international,
        }) => {
            itinerary::run(
                &mut stdout,
                file,
                *usable,
                *departure,
                *international,
                config.gap_buffer_min,
            )?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
