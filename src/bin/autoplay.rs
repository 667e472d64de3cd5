//! Autoplay Binary
//!
//! Plays many games of Set against a simulated player and logs statistics.
//!
//! Options: --games, --skill, --seed, --max-rounds

use clap::Parser;
use set_engine::sim::{AutoplayConfig, AutoplayRunner};

#[derive(Parser, Debug)]
#[command(name = "set-autoplay", about = "Simulate games of Set")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 100)]
    games: usize,

    /// Probability that the simulated player finds a set before the timeout
    #[arg(short, long, default_value_t = 0.5)]
    skill: f64,

    /// Seed of the first game; later games use consecutive seeds
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Round limit per game
    #[arg(long, default_value_t = 100)]
    max_rounds: u32,
}

fn main() -> set_engine::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = AutoplayConfig::new()
        .with_games(args.games)
        .with_skill(args.skill)
        .with_max_rounds(args.max_rounds)
        .with_seed_offset(args.seed);

    log::info!(
        "{:<24}{} games, skill {:.2}, seed {}",
        "starting autoplay",
        config.games,
        config.skill,
        config.seed_offset
    );

    let (records, stats) = AutoplayRunner::new(config).run()?;
    let unfinished = records.iter().filter(|r| !r.finished).count();
    if unfinished > 0 {
        log::warn!("{} games hit the round limit", unfinished);
    }
    println!("{}", stats);
    Ok(())
}
