//! rollsim CLI - Monte Carlo dice-roll outcome distributions.

use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rollsim::{DicePool, Mode, Pmf, Report, Request, Sampler};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "rollsim")]
#[command(version)]
#[command(about = "Simulate dice-roll outcome distributions")]
struct Cli {
    /// Number of sides per die
    #[arg(short = 'd', long, default_value_t = 6)]
    sides: u32,

    /// Number of dice summed per trial
    #[arg(short = 'n', long, default_value_t = 1)]
    dice: u32,

    /// Number of trials to simulate
    #[arg(short, long, default_value_t = rollsim::DEFAULT_TRIALS)]
    trials: u64,

    /// Resolution rule applied to each trial
    #[arg(short, long, value_enum, default_value = "normal")]
    mode: ModeArg,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,

    /// Annotate outcomes with exact probabilities
    #[arg(long)]
    exact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Disadvantage,
    Normal,
    Advantage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Disadvantage => Mode::Disadvantage,
            ModeArg::Normal => Mode::Normal,
            ModeArg::Advantage => Mode::Advantage,
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let pool = DicePool::new(cli.sides, cli.dice)?;
    let request = Request::builder()
        .pool(pool)
        .mode(cli.mode.into())
        .trials(cli.trials)
        .build()?;

    let started = Instant::now();
    let dist = match cli.seed {
        Some(seed) => Sampler::seeded(seed).simulate(&request),
        None => Sampler::default().simulate(&request),
    };
    info!(
        "simulated {}d{} {} x{} in {:.1?}",
        cli.dice,
        cli.sides,
        request.mode(),
        request.trials(),
        started.elapsed()
    );

    let report = if cli.exact {
        match Pmf::of(pool, request.mode()) {
            Ok(pmf) => Report::with_exact(&request, &dist, &pmf)?,
            Err(error) => {
                warn!("{error}, reporting empirical shares only");
                Report::new(&request, &dist)
            }
        }
    } else {
        Report::new(&request, &dist)
    };

    match cli.format {
        Format::Table => print!("{}", report.table()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
