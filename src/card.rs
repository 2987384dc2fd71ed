//! Card types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in build order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the suit's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        }
    }
}

/// Lowest rank in a standard deck.
pub const MIN_RANK: u8 = 2;

/// Highest rank in a standard deck (Ace, which is high in War).
pub const MAX_RANK: u8 = 14;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. A standard deck only
    /// holds ranks in `MIN_RANK..=MAX_RANK`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the face name for court cards and aces, if any.
    #[must_use]
    pub const fn face(&self) -> Option<&'static str> {
        match self.rank {
            11 => Some("Jack"),
            12 => Some("Queen"),
            13 => Some("King"),
            14 => Some("Ace"),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face() {
            Some(face) => write!(f, "{face} of {}", self.suit.name()),
            None => write!(f, "{} of {}", self.rank, self.suit.name()),
        }
    }
}
