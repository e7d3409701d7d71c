//! Deck of cards simulation CLI.
//!
//! Shuffles a fresh deck, draws a hand, and prints it in draw order and in
//! color, suit, and rank order.

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use deckofcards::{DEFAULT_DRAW_COUNT, Simulation, SimulationOptions};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for the shuffle, random if not given.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of cards to draw.
    #[clap(long, short, default_value_t = DEFAULT_DRAW_COUNT)]
    draws: usize,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("using seed {seed}");

    let options = SimulationOptions::default().with_draw_count(cli.draws);
    let mut simulation = Simulation::new(options, seed);

    let report = simulation.run().inspect_err(|e| error!("{e}"))?;
    print!("{report}");

    Ok(())
}
