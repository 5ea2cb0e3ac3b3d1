//! great-circle — interactive great-circle distance and bearing calculator.
//!
//! Prompts for an origin and destination in decimal degrees and prints the
//! great-circle distance in kilometres, statute miles and nautical miles,
//! plus the initial and final bearings.  Intended for manual cross-checks of
//! flight or passage plans.
//!
//! `--origin` and `--destination` skip the prompts for a single calculation.
//! Logs go to stderr; set `RUST_LOG` or pass `-v` to see them.

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gc_core::Coordinate;
use gc_session::{Report, Session, SessionConfig, parse_coordinate};

#[derive(Parser, Debug)]
#[command(name = "great-circle", about = "Great-circle distance and bearing calculator")]
struct Cli {
    /// Attempts allowed per latitude/longitude prompt before giving up.
    #[arg(long, default_value_t = SessionConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Exit after one calculation instead of offering another.
    #[arg(long)]
    once: bool,

    /// Origin as LAT,LON (e.g. "51.5074,-0.1278"); requires --destination.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    origin: Option<Coordinate>,

    /// Destination as LAT,LON; requires --origin.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    destination: Option<Coordinate>,

    /// Raise the default log level (-v = info, -vv = debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    match (cli.origin, cli.destination) {
        (Some(origin), Some(destination)) => {
            let report = Report::compute(origin, destination);
            let mut out = io::stdout().lock();
            report.render(&mut out)?;
            out.flush()?;
            return Ok(());
        }
        (None, None) => {}
        _ => bail!("--origin and --destination must be given together"),
    }

    let config = SessionConfig {
        max_attempts: cli.max_attempts,
        repeat:       !cli.once,
    };

    println!("Great Circle Distance Calculator");
    println!("{}", "=".repeat(32));
    println!("Enter the latitude and longitude of your origin and destination in");
    println!("decimal degrees (north and east positive). Distances are reported in");
    println!("kilometres, statute miles and nautical miles.");
    println!();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock(), config)?;
    let completed = session.run()?;
    info!(completed, "exiting");

    Ok(())
}
