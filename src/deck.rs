//! Ordered card piles.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::DeckError;

/// An ordered pile of cards.
///
/// Cards are pushed onto and drawn from the same end, so the order left by
/// [`Deck::shuffle`] fully determines the draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding all 52 standard cards, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from cards listed bottom to top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Populates the deck with all 52 standard cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEmpty`] if the deck already holds cards.
    pub fn build(&mut self) -> Result<(), DeckError> {
        if !self.cards.is_empty() {
            return Err(DeckError::NotEmpty);
        }
        *self = Self::standard();
        Ok(())
    }

    /// Shuffles the deck with the given random number generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    ///
    /// Returns `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws `n` cards from the top, top card first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidDrawCount`] if `n` is zero, or
    /// [`DeckError::NotEnoughCards`] if the deck holds fewer than `n` cards.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n == 0 {
            return Err(DeckError::InvalidDrawCount);
        }
        let available = self.cards.len();
        if n > available {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                available,
            });
        }

        let mut drawn = self.cards.split_off(available - n);
        drawn.reverse();
        Ok(drawn)
    }

    /// Places a card on top of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Places cards on top of the deck in iteration order.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Moves every card out, leaving this deck empty.
    pub fn take_all(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Returns the cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the sum of all card ranks.
    #[must_use]
    pub fn rank_total(&self) -> u32 {
        self.cards.iter().map(|card| u32::from(card.rank)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_many_takes_from_top() {
        let mut deck = Deck::from_cards(alloc::vec![
            Card::new(Suit::Hearts, 2),
            Card::new(Suit::Hearts, 3),
            Card::new(Suit::Hearts, 4),
        ]);

        let drawn = deck.draw_many(2).unwrap();
        assert_eq!(
            drawn,
            alloc::vec![Card::new(Suit::Hearts, 4), Card::new(Suit::Hearts, 3)]
        );
        assert_eq!(deck.cards(), &[Card::new(Suit::Hearts, 2)]);
    }
}
