//! The shared pot of a round.

use alloc::vec::Vec;

use crate::card::Card;

/// Every draw made during a round, one column per player.
///
/// Each draw phase appends one entry to every column, so escalations during
/// a war stack on top of the round's opening draw. Empty draws are kept as
/// `None` so columns stay aligned, but never count as cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    columns: Vec<Vec<Option<Card>>>,
}

impl Pot {
    /// Creates an empty pot for `players` players.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            columns: alloc::vec![Vec::new(); players],
        }
    }

    /// Appends one draw per player.
    pub fn push_draws(&mut self, draws: Vec<Option<Card>>) {
        debug_assert_eq!(draws.len(), self.columns.len());
        for (column, draw) in self.columns.iter_mut().zip(draws) {
            column.push(draw);
        }
    }

    /// Returns each player's most recent draw.
    #[must_use]
    pub fn latest(&self) -> Vec<Option<Card>> {
        self.columns
            .iter()
            .map(|column| column.last().copied().flatten())
            .collect()
    }

    /// Returns the draws of every player.
    #[must_use]
    pub fn columns(&self) -> &[Vec<Option<Card>>] {
        &self.columns
    }

    /// Returns the number of draw phases played into the pot.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Returns the number of real cards in the pot.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().flatten().flatten().count()
    }

    /// Consumes the pot, returning its real cards player by player.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.columns.into_iter().flatten().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn empty_draws_are_not_cards() {
        let mut pot = Pot::new(2);
        pot.push_draws(alloc::vec![Some(Card::new(Suit::Hearts, 9)), None]);
        pot.push_draws(alloc::vec![None, Some(Card::new(Suit::Clubs, 4))]);

        assert_eq!(pot.depth(), 2);
        assert_eq!(pot.card_count(), 2);
        assert_eq!(pot.latest(), alloc::vec![None, Some(Card::new(Suit::Clubs, 4))]);
        assert_eq!(
            pot.into_cards(),
            alloc::vec![Card::new(Suit::Hearts, 9), Card::new(Suit::Clubs, 4)]
        );
    }
}
