//! Round and match result types.

use alloc::vec::Vec;
use std::path::PathBuf;

use uuid::Uuid;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// The round number, starting at 1.
    pub round: u32,
    /// Index of the player who took the pot.
    pub winner: usize,
    /// Number of wars fought before the pot was decided.
    pub wars: u32,
    /// Number of cards the winner took.
    pub cards_won: usize,
    /// Whether the pot was decided by lot because nobody could draw.
    pub stalemate: bool,
}

/// A player's position between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// Player index.
    pub player: usize,
    /// Total cards held.
    pub cards: usize,
    /// Cards in the draw pile.
    pub draw_pile: usize,
    /// Whether the player is still in the match.
    pub active: bool,
}

/// Result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The match id.
    pub match_id: Uuid,
    /// Number of rounds played.
    pub rounds: u32,
    /// Index of the winning player.
    pub winner: usize,
    /// Per-player elimination round (`None` for the winner).
    pub eliminations: Vec<Option<u32>>,
    /// Where the match log was written, if logging was enabled.
    pub log_path: Option<PathBuf>,
}
