//! CLI entry point for the `flightplan` command-line tool.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use flight_plan::cli::commands;
use flight_plan::{sample, FlightError, FlightPlan, FlightResult, RouteFile};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "flightplan",
    about = "Traverse and price routes in a weighted airport graph"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// JSON route file to load instead of the built-in sample network
    #[arg(long, global = true)]
    routes: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every airport's outgoing routes
    Info,
    /// Cost of the direct route between two airports
    Cost {
        /// Departure airport
        from: String,
        /// Arrival airport
        to: String,
    },
    /// Depth-first traversal order from an airport
    Dfs {
        /// Starting airport
        start: String,
    },
    /// Breadth-first traversal order from an airport
    Bfs {
        /// Starting airport
        start: String,
    },
    /// Cheapest cost from an airport to one or all reachable airports
    Cheapest {
        /// Departure airport
        from: String,
        /// Arrival airport; omit to list every reachable airport
        to: Option<String>,
    },
}

fn load(routes: Option<&PathBuf>) -> FlightResult<FlightPlan> {
    match routes {
        Some(path) => RouteFile::read_from_file(path),
        None => Ok(sample::flight_plan()),
    }
}

fn run(cli: Cli) -> FlightResult<()> {
    let json = cli.format == OutputFormat::Json;
    let plan = load(cli.routes.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Info => commands::cmd_info(&plan, json, &mut out)?,
        Commands::Cost { from, to } => commands::cmd_cost(&plan, &from, &to, json, &mut out)?,
        Commands::Dfs { start } => commands::cmd_dfs(&plan, &start, json, &mut out)?,
        Commands::Bfs { start } => commands::cmd_bfs(&plan, &start, json, &mut out)?,
        Commands::Cheapest { from, to } => {
            commands::cmd_cheapest(&plan, &from, to.as_deref(), json, &mut out)?
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            FlightError::Io(_) => 1,
            FlightError::Json(_)
            | FlightError::NegativeCost { .. }
            | FlightError::NonFiniteCost { .. }
            | FlightError::EmptyAirportName => 2,
            FlightError::UnknownAirport(_) => 4,
        };
        process::exit(code);
    }
}
