//! Error types for match operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building or drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Draw count is zero.
    #[error("draw count must be at least one")]
    InvalidDrawCount,
    /// Not enough cards in the deck.
    #[error("cannot draw {requested} cards from a deck of {available}")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },
    /// Deck already holds cards.
    #[error("deck must be empty to build")]
    NotEmpty,
}

/// Errors that can occur while setting up or running a match.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Fewer than two players requested.
    #[error("a match needs at least 2 players, got {0}")]
    TooFewPlayers(usize),
    /// Cards were already dealt.
    #[error("cards have already been dealt")]
    AlreadyDealt,
    /// Cards have not been dealt yet.
    #[error("cards have not been dealt")]
    NotDealt,
    /// No player finished without an elimination round.
    #[error("no player finished the match")]
    NoWinner,
    /// More than one player finished without an elimination round.
    #[error("{0} players finished the match without being eliminated")]
    MultipleWinners(usize),
    /// The match log could not be written.
    #[error(transparent)]
    Log(#[from] LogError),
}

/// Errors that can occur when reading or writing a match log.
#[derive(Debug, Error)]
pub enum LogError {
    /// Filesystem failure.
    #[error("log i/o failed for {path}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// Malformed or unserializable log.
    #[error("log json is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when exporting logs to tables.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A log could not be loaded.
    #[error(transparent)]
    Log(#[from] LogError),
    /// A table file could not be written.
    #[error("table i/o failed for {path}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A log holds no rounds to export.
    #[error("log {0} holds no rounds")]
    EmptyLog(uuid::Uuid),
    /// A log's player count disagrees with its rounds or eliminations.
    #[error("log {0} does not match its player count")]
    Malformed(uuid::Uuid),
}
