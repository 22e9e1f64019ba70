//! Truck loading plan CLI

mod request;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use request::{PlanRequest, PlanResponse, ValidateResponse};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use truck_loader::{validate, GreedyPlanner, Planner};

#[derive(Parser)]
#[command(name = "truck-loader")]
#[command(about = "Computes loading plans for crates in a cargo truck")]
#[command(version)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a loading plan from a JSON request
    Plan {
        /// Path to the JSON request file
        request: PathBuf,

        /// Output file for the plan (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Load every crate in its original orientation
        #[arg(long)]
        fixed_orientation: bool,

        /// Include full placements with the length-axis coordinate
        #[arg(long)]
        with_placements: bool,

        /// Fail if any crate could not be loaded
        #[arg(long)]
        require_all: bool,
    },

    /// Run the capacity checks only
    Validate {
        /// Path to the JSON request file
        request: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan {
            request,
            output,
            pretty,
            fixed_orientation,
            with_placements,
            require_all,
        } => {
            let request = PlanRequest::from_file(&request)?;
            let mut config = request.config;
            if fixed_orientation {
                config = config.with_fixed_orientation();
            }

            let plan = GreedyPlanner::new(config)
                .plan(&request.truck, &request.crates)
                .context("Planning failed")?;

            let unplaced = plan.unplaced();
            if !unplaced.is_empty() {
                log::warn!("{} crates could not be loaded: {:?}", unplaced.len(), unplaced);
            }

            write_json(&PlanResponse::new(&plan, with_placements), output, pretty)?;

            if require_all && !unplaced.is_empty() {
                bail!("{} of {} crates were not loaded", unplaced.len(), request.crates.len());
            }
        }

        Commands::Validate { request } => {
            let request = PlanRequest::from_file(&request)?;
            let report = validate(&request.truck, &request.crates).context("Validation failed")?;
            log::info!("Request passes capacity checks");
            write_json(&ValidateResponse::from(report), None, true)?;
        }
    }

    Ok(())
}

fn write_json<T: Serialize>(value: &T, output: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Plan written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
