//! Structured per-match logs.
//!
//! A [`MatchLog`] records every player's deck at the start of each round and
//! every card that went into that round's pot. Logs are written as JSON,
//! one file per match named after the match id, and are the input of the
//! [`export`](crate::export) tables.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::vec::Vec;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LogError;
use crate::game::Pot;
use crate::player::Player;

/// A player's deck at the start of a round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    /// Total cards held.
    pub size: usize,
    /// Average rank, `None` for an empty deck.
    pub power: Option<f64>,
}

impl DeckSnapshot {
    /// Captures a player's current deck.
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            size: player.deck_size(),
            power: player.deck_power(),
        }
    }
}

/// Everything recorded for one round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundLog {
    /// Per-player decks before the round was played.
    pub decks: Vec<DeckSnapshot>,
    /// Per-player ranks of every draw in the pot, `None` for empty draws.
    pub battle: Vec<Vec<Option<u8>>>,
}

/// Log of a full match, keyed by round number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchLog {
    /// Unique match id.
    pub match_id: Uuid,
    /// Number of players in the match.
    pub player_count: usize,
    /// Rounds keyed by round number, starting at 1.
    pub rounds: BTreeMap<u32, RoundLog>,
    /// Per-player elimination round, filled in when the match finishes.
    #[serde(default)]
    pub eliminations: Vec<Option<u32>>,
    /// Index of the winning player, filled in when the match finishes.
    #[serde(default)]
    pub winner: Option<usize>,
}

impl MatchLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new(match_id: Uuid, player_count: usize) -> Self {
        Self {
            match_id,
            player_count,
            rounds: BTreeMap::new(),
            eliminations: Vec::new(),
            winner: None,
        }
    }

    /// Records every player's deck at the start of `round`.
    pub fn record_decks(&mut self, round: u32, players: &[Player]) {
        self.rounds.entry(round).or_default().decks =
            players.iter().map(DeckSnapshot::of).collect();
    }

    /// Records the ranks of every draw in the resolved pot of `round`.
    pub fn record_battle(&mut self, round: u32, pot: &Pot) {
        self.rounds.entry(round).or_default().battle = pot
            .columns()
            .iter()
            .map(|column| column.iter().map(|draw| draw.map(|card| card.rank)).collect())
            .collect();
    }

    /// Records the final elimination rounds and the winner.
    pub fn finish(&mut self, players: &[Player], winner: usize) {
        self.eliminations = players.iter().map(Player::eliminated_round).collect();
        self.winner = Some(winner);
    }

    /// Returns the number of rounds recorded.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Returns the file name the log is saved under.
    #[must_use]
    pub fn file_name(&self) -> alloc::string::String {
        format!("{}.json", self.match_id)
    }

    /// Serializes the log to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<alloc::string::String, LogError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a log from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a valid match log.
    pub fn from_json(json: &str) -> Result<Self, LogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the log into `dir`, creating the directory if needed.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, LogError> {
        fs::create_dir_all(dir).map_err(|source| LogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(self.file_name());
        let json = self.to_json()?;
        fs::write(&path, json).map_err(|source| LogError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Reads a log from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, LogError> {
        let json = fs::read_to_string(path).map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
