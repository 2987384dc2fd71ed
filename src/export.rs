//! Flattening match logs into CSV tables.
//!
//! Each log becomes one row in `games.csv`, one row per round and player in
//! `rounds.csv`, and one row in `eliminations.csv`. Rows are appended, so a
//! directory of logs can be exported into the same tables over time.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ExportError;
use crate::log::MatchLog;

/// File name of the match summary table.
pub const GAMES_TABLE: &str = "games.csv";
/// File name of the per-round deck snapshot table.
pub const ROUNDS_TABLE: &str = "rounds.csv";
/// File name of the elimination table.
pub const ELIMINATIONS_TABLE: &str = "eliminations.csv";

/// One match summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    /// Match id.
    pub match_id: Uuid,
    /// Number of players.
    pub player_count: usize,
    /// Number of rounds played.
    pub round_count: usize,
}

/// One player's deck at the start of one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRow {
    /// Match id.
    pub match_id: Uuid,
    /// Round number, starting at 1.
    pub round: u32,
    /// Player number, starting at 1.
    pub player: usize,
    /// Total cards held.
    pub deck_size: usize,
    /// Average rank, `None` for an empty deck.
    pub power: Option<f64>,
}

/// Elimination rounds of every player in a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationRow {
    /// Match id.
    pub match_id: Uuid,
    /// Per-player elimination round, `None` for the winner.
    pub rounds: Vec<Option<u32>>,
}

/// The three tables produced from one log.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    /// Match summary.
    pub game: GameRow,
    /// Deck snapshots, round by round.
    pub rounds: Vec<RoundRow>,
    /// Elimination rounds.
    pub eliminations: EliminationRow,
}

/// Flattens a match log into tables.
///
/// Elimination rounds come from the log's final record. Logs saved before
/// the match finished fall back to the snapshots: a player first seen empty
/// at the start of round `r` lost their last card in round `r - 1`, or was
/// dealt nothing if `r` is the first round. A player who went out in the
/// last recorded round has no later snapshot, so stays `None`.
///
/// # Errors
///
/// Returns [`ExportError::EmptyLog`] if the log holds no rounds, or
/// [`ExportError::Malformed`] if a round or the elimination record does not
/// hold one entry per player.
pub fn tables_from_log(log: &MatchLog) -> Result<Tables, ExportError> {
    if log.rounds.is_empty() {
        return Err(ExportError::EmptyLog(log.match_id));
    }
    let consistent = log
        .rounds
        .values()
        .all(|entry| entry.decks.len() == log.player_count)
        && (log.eliminations.is_empty() || log.eliminations.len() == log.player_count);
    if !consistent {
        return Err(ExportError::Malformed(log.match_id));
    }

    let mut rounds = Vec::with_capacity(log.rounds.len() * log.player_count);
    let mut first_empty = alloc::vec![None; log.player_count];

    for (&round, entry) in &log.rounds {
        for (index, snapshot) in entry.decks.iter().enumerate() {
            rounds.push(RoundRow {
                match_id: log.match_id,
                round,
                player: index + 1,
                deck_size: snapshot.size,
                power: snapshot.power,
            });
            if let Some(slot) = first_empty.get_mut(index) {
                if snapshot.size == 0 && slot.is_none() {
                    *slot = Some(if round > 1 { round - 1 } else { round });
                }
            }
        }
    }

    let eliminations = if log.eliminations.is_empty() {
        first_empty
    } else {
        log.eliminations.clone()
    };

    Ok(Tables {
        game: GameRow {
            match_id: log.match_id,
            player_count: log.player_count,
            round_count: log.round_count(),
        },
        rounds,
        eliminations: EliminationRow {
            match_id: log.match_id,
            rounds: eliminations,
        },
    })
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(String::new, |value| value.to_string())
}

impl GameRow {
    fn to_csv(&self) -> String {
        [
            self.match_id.to_string(),
            self.player_count.to_string(),
            self.round_count.to_string(),
        ]
        .join(",")
    }
}

impl RoundRow {
    fn to_csv(&self) -> String {
        [
            self.match_id.to_string(),
            self.round.to_string(),
            self.player.to_string(),
            self.deck_size.to_string(),
            optional(self.power),
        ]
        .join(",")
    }
}

impl EliminationRow {
    fn to_csv(&self) -> String {
        core::iter::once(self.match_id.to_string())
            .chain(self.rounds.iter().map(|round| optional(*round)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Appends tables to CSV files in a directory.
#[derive(Debug, Clone)]
pub struct TableWriter {
    dir: PathBuf,
}

impl TableWriter {
    /// Creates a writer for the table files in `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory the tables live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Appends one log's tables, creating the directory and files if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a table file cannot be opened or written.
    pub fn append(&self, tables: &Tables) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        self.append_lines(GAMES_TABLE, [tables.game.to_csv()])?;
        self.append_lines(ROUNDS_TABLE, tables.rounds.iter().map(RoundRow::to_csv))?;
        self.append_lines(ELIMINATIONS_TABLE, [tables.eliminations.to_csv()])?;
        Ok(())
    }

    fn append_lines<I>(&self, table: &str, lines: I) -> Result<(), ExportError>
    where
        I: IntoIterator<Item = String>,
    {
        let path = self.dir.join(table);
        let io_err = |source: std::io::Error| ExportError::Io {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;
        let mut buf = String::new();
        for line in lines {
            buf.push_str(&line);
            buf.push('\n');
        }
        file.write_all(buf.as_bytes()).map_err(io_err)
    }
}

/// Exports every `.json` log under `log_dir` into the tables in `table_dir`.
///
/// Logs are visited in path order. Returns the number of logs exported.
///
/// # Errors
///
/// Returns an error if a directory cannot be read, a log cannot be parsed,
/// or a table cannot be written.
pub fn export_logs(log_dir: &Path, table_dir: &Path) -> Result<usize, ExportError> {
    let mut paths = Vec::new();
    collect_logs(log_dir, &mut paths)?;
    paths.sort();

    let writer = TableWriter::new(table_dir);
    for path in &paths {
        let log = MatchLog::load(path)?;
        let tables = tables_from_log(&log)?;
        writer.append(&tables)?;
        debug!(path = %path.display(), rounds = tables.game.round_count, "log exported");
    }

    info!(logs = paths.len(), tables = %table_dir.display(), "export finished");
    Ok(paths.len())
}

fn collect_logs(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<(), ExportError> {
    let io_err = |source: std::io::Error| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            collect_logs(&path, paths)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    Ok(())
}
