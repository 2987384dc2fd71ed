//! Player piles and elimination state.

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;

/// A player's piles and status.
///
/// A player draws from the draw pile and collects won cards on the discard
/// pile. Once the draw pile runs dry, the discard pile is shuffled and takes
/// its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Pile the player draws from.
    pub draw_pile: Deck,
    /// Pile the player's winnings are collected on.
    pub discard_pile: Deck,
    is_active: bool,
    eliminated_round: Option<u32>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Creates an active player with empty piles.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draw_pile: Deck::new(),
            discard_pile: Deck::new(),
            is_active: true,
            eliminated_round: None,
        }
    }

    /// Returns the total number of cards across both piles.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Returns the average rank across both piles.
    ///
    /// Returns `None` if the player holds no cards.
    #[must_use]
    pub fn deck_power(&self) -> Option<f64> {
        let size = self.deck_size();
        if size == 0 {
            return None;
        }
        let total = self.draw_pile.rank_total() + self.discard_pile.rank_total();
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let size = size as f64;
        Some(f64::from(total) / size)
    }

    /// Replaces an empty draw pile with the shuffled discard pile.
    ///
    /// A player with no cards left in either pile is marked inactive.
    pub fn refresh_if_empty<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.deck_size() == 0 {
            self.is_active = false;
        } else if self.draw_pile.is_empty() {
            self.draw_pile = self.discard_pile.take_all();
            self.draw_pile.shuffle(rng);
        }
    }

    /// Marks the player out if they hold no cards.
    ///
    /// The elimination round is only recorded the first time.
    pub fn mark_out_if_empty(&mut self, round: u32) {
        if self.deck_size() == 0 {
            self.is_active = false;
            if self.eliminated_round.is_none() {
                self.eliminated_round = Some(round);
            }
        }
    }

    /// Draws the top card of the draw pile.
    ///
    /// Returns `None` if the draw pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.draw_pile.draw()
    }

    /// Adds won cards to the discard pile.
    ///
    /// A player benched for running dry mid-round is active again once
    /// they hold cards, unless an elimination round was already recorded.
    pub fn collect<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discard_pile.extend(cards);
        if self.eliminated_round.is_none() && self.deck_size() > 0 {
            self.is_active = true;
        }
    }

    /// Returns whether the player is still in the match.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the round the player was eliminated in, if any.
    #[must_use]
    pub const fn eliminated_round(&self) -> Option<u32> {
        self.eliminated_round
    }
}
