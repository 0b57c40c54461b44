//! Self-play driver - plays random legal moves until the game ends.
//!
//! Useful for exercising the rules engine over many positions and
//! eyeballing the per-move log.

mod config;
mod playout;

use anyhow::Context;
use chess_engine::Game;
use clap::Parser;
use config::SelfPlayConfig;
use playout::{play_random, Outcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Plays a game of random legal moves against itself.
#[derive(Parser)]
#[command(name = "selfplay")]
#[command(about = "Plays random legal moves until checkmate, stalemate, or the ply cap")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the move picker
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of plies to play
    #[arg(long)]
    max_plies: Option<u32>,

    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// Allow castling
    #[arg(long)]
    castling: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(SelfPlayConfig::config_path);
    let mut config = SelfPlayConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }
    if args.fen.is_some() {
        config.start_fen = args.fen;
    }
    if args.castling {
        config.rules.castling = true;
    }

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!("Seed: {}", seed);
    tracing::info!("Castling: {}", config.rules.castling);

    let mut game = match &config.start_fen {
        Some(fen) => Game::from_fen_with_config(fen, config.rules)
            .with_context(|| format!("invalid start position {:?}", fen))?,
        None => Game::with_config(config.rules),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let playout = play_random(&mut game, config.max_plies, &mut rng);

    match playout.outcome {
        Outcome::Finished(status) => {
            tracing::info!("Game over after {} plies: {}", playout.plies, status)
        }
        Outcome::PlyLimit => tracing::info!("Stopped at the {} ply limit", playout.plies),
        Outcome::Aborted(status) => {
            tracing::warn!("Aborted after {} plies: {}", playout.plies, status)
        }
    }
    tracing::info!("Final position: {}", game.to_fen());
    println!("{}", game.position());

    Ok(())
}
