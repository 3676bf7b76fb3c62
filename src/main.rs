//! toy-robot - run a command script against a robot on a table top.
//!
//! Reads commands from a file, or stdin when no file (or `-`) is given, and
//! prints each `REPORT` to stdout. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use toy_robot::{ErrorStrategy, Grid, Simulator};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// toy-robot - drive a robot around a bounded grid
#[derive(Parser, Debug)]
#[command(name = "toy-robot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Command file to run (stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Grid width
    #[arg(long, env = "TOY_ROBOT_WIDTH", default_value_t = 5)]
    width: u32,

    /// Grid height
    #[arg(long, env = "TOY_ROBOT_HEIGHT", default_value_t = 5)]
    height: u32,

    /// What to do when a command is rejected
    #[arg(long, env = "TOY_ROBOT_ON_ERROR", value_enum, default_value_t = OnError::Ignore)]
    on_error: OnError,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OnError {
    /// Stop at the first rejected command
    Abort,
    /// Log it and carry on
    Ignore,
}

impl From<OnError> for ErrorStrategy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => ErrorStrategy::Abort,
            OnError::Ignore => ErrorStrategy::IgnoreAndLog,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let grid = Grid::new(cli.width, cli.height).context("invalid grid dimensions")?;
    let mut simulator = Simulator::new(&grid).with_strategy(cli.on_error.into());
    let stdout = io::stdout().lock();

    let summary = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            simulator.run(BufReader::new(file), stdout)
        }
        _ => simulator.run(io::stdin().lock(), stdout),
    }
    .context("simulation failed")?;

    tracing::info!(
        lines = summary.lines,
        reports = summary.reports,
        errors = summary.errors,
        "finished"
    );
    Ok(())
}
