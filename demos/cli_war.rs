//! CLI War example.
//!
//! Usage: `cargo run --example cli_war -- [--players N] [--seed S] [--verbose] [--log DIR]`
//!
//! Without `--players` the player count is asked for interactively. Set
//! `RUST_LOG=warrs=debug` to trace rounds.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use warrs::{War, WarOptions};

struct Args {
    players: Option<usize>,
    seed: Option<u64>,
    verbose: bool,
    log_dir: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        players: None,
        seed: None,
        verbose: false,
        log_dir: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-p" | "--players" => {
                let value = iter.next().ok_or("--players needs a value")?;
                let players = value
                    .parse()
                    .map_err(|_| format!("bad player count: {value}"))?;
                args.players = Some(players);
            }
            "-s" | "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = Some(value.parse().map_err(|_| format!("bad seed: {value}"))?);
            }
            "-v" | "--verbose" => args.verbose = true,
            "-l" | "--log" => {
                args.log_dir = Some(iter.next().ok_or("--log needs a directory")?);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let Some(players) = args.players.or_else(|| prompt_usize("Number of players (2+, q to quit): "))
    else {
        return;
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut options = WarOptions::default()
        .with_player_count(players)
        .with_verbose(args.verbose);
    if let Some(dir) = args.log_dir {
        options = options.with_logging(true).with_log_dir(dir);
    }

    let mut war = match War::new(options, seed) {
        Ok(war) => war,
        Err(err) => {
            eprintln!("Setup error: {err}");
            std::process::exit(1);
        }
    };

    println!("War with {players} players (seed {seed}, match {})", war.match_id());

    match war.run() {
        Ok(result) => {
            println!(
                "{}",
                colorize(
                    &format!("Player {} wins after {} rounds", result.winner + 1, result.rounds),
                    "32"
                )
            );
            for (index, round) in result.eliminations.iter().enumerate() {
                if let Some(round) = round {
                    println!(" Player {} out in round {round}", index + 1);
                }
            }
            if let Some(path) = result.log_path {
                println!("Log written to {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("{}", colorize(&format!("Match error: {err}"), "31"));
            std::process::exit(1);
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" || input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
