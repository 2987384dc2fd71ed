//! A seedable simulation engine for the card game War.
//!
//! The crate provides a [`War`] type that deals a standard deck among any
//! number of players and plays rounds, including wars over tied cards,
//! until a single player holds every card in play. Matches can narrate
//! themselves to the console and record a [`MatchLog`] that the
//! [`export`] module flattens into CSV tables.
//!
//! # Example
//!
//! ```no_run
//! use warrs::{War, WarOptions};
//!
//! let options = WarOptions::default().with_player_count(4);
//! let mut war = War::new(options, 42).unwrap();
//! let result = war.run().unwrap();
//! println!("player {} won after {} rounds", result.winner + 1, result.rounds);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod export;
pub mod game;
pub mod log;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
pub use deck::Deck;
pub use error::{DeckError, ExportError, LogError, MatchError};
pub use game::{Pot, War};
pub use log::{DeckSnapshot, MatchLog, RoundLog};
pub use options::WarOptions;
pub use player::Player;
pub use result::{MatchResult, RoundSummary, Standing};
