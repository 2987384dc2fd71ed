//! Timing harness.
//!
//! Plays batches of matches for several player counts under every
//! combination of narration and logging, then prints the mean wall time per
//! match. Narrated matches print their rounds, so redirect stdout when
//! running the full grid.
//!
//! Usage: `cargo run --release --example timing -- [games per cell]`

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;
use warrs::{MatchError, War, WarOptions};

const PLAYER_COUNTS: [usize; 4] = [2, 3, 4, 5];
const MODES: [(&str, bool, bool); 4] = [
    ("neither", false, false),
    ("verbose", true, false),
    ("logging", false, true),
    ("both", true, true),
];

fn timed_match(options: WarOptions, seed: u64) -> Result<Duration, MatchError> {
    let start = Instant::now();
    let mut war = War::new(options, seed)?;
    war.run()?;
    Ok(start.elapsed())
}

fn main() -> Result<(), MatchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let games: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100);
    let log_dir = std::env::temp_dir().join("warrs-timing-logs");
    let mut seeds = ChaCha8Rng::seed_from_u64(1337);

    let mut results = Vec::new();
    for players in PLAYER_COUNTS {
        for (label, verbose, logging) in MODES {
            let mut total = Duration::ZERO;
            for _ in 0..games {
                let options = WarOptions::default()
                    .with_player_count(players)
                    .with_verbose(verbose)
                    .with_logging(logging)
                    .with_log_dir(&log_dir);
                total += timed_match(options, seeds.random())?;
            }
            results.push((players, label, total / games.max(1)));
        }
    }

    println!("\n+++++++++++++++++++++++++++");
    println!("++++++++++RESULTS++++++++++");
    println!("+++++++++++++++++++++++++++\n");
    for (players, label, mean) in results {
        println!(
            "Players: {players}\t\tParameters: {label:<8}\t{:.5}",
            mean.as_secs_f64()
        );
    }
    Ok(())
}
