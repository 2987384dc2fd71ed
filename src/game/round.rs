use alloc::vec::Vec;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::MatchError;
use crate::player::Player;
use crate::result::RoundSummary;

use super::narration;
use super::{Pot, War};

/// How a pot was decided.
struct Resolution {
    winner: usize,
    wars: u32,
    stalemate: bool,
}

impl War {
    /// Plays one round and awards the pot.
    ///
    /// Every player draws one card; the single highest card takes every card
    /// in the pot. A tie for the highest card starts a war: every player
    /// draws twice more (one card face down, one face up) and the new
    /// face-up cards are compared, repeating until the tie breaks. Players
    /// who run out of cards keep taking part with empty draws, which lose
    /// every comparison. If nobody can draw during a war, the pot goes to
    /// one of the players tied in the last comparison, chosen at random.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not been dealt.
    pub fn play_round(&mut self) -> Result<RoundSummary, MatchError> {
        if !self.dealt {
            return Err(MatchError::NotDealt);
        }

        self.round += 1;
        let round = self.round;

        if let Some(log) = &mut self.log {
            log.record_decks(round, &self.players);
        }

        if self.options.verbose {
            let active: Vec<usize> = (0..self.players.len())
                .filter(|&i| self.players[i].is_active())
                .collect();
            self.narrate(&narration::round_started(round, &active));
        }

        for player in &mut self.players {
            player.mark_out_if_empty(round);
        }

        let mut pot = Pot::new(self.players.len());
        self.draw_phase(&mut pot);
        let resolution = self.resolve(&mut pot);

        if let Some(log) = &mut self.log {
            log.record_battle(round, &pot);
        }

        let cards_won = pot.card_count();
        self.players[resolution.winner].collect(pot.into_cards());

        // Players who lost their last card during a war go out this round.
        for player in &mut self.players {
            player.mark_out_if_empty(round);
        }

        if self.options.verbose {
            self.narrate(&narration::standings(&self.standings()));
        }

        debug!(
            round,
            winner = resolution.winner,
            wars = resolution.wars,
            cards_won,
            stalemate = resolution.stalemate,
            active = self.active_count(),
            "round played"
        );

        Ok(RoundSummary {
            round,
            winner: resolution.winner,
            wars: resolution.wars,
            cards_won,
            stalemate: resolution.stalemate,
        })
    }

    /// Refreshes empty draw piles, then draws one card per player.
    fn draw_phase(&mut self, pot: &mut Pot) {
        for player in &mut self.players {
            player.refresh_if_empty(&mut self.rng);
        }

        let draws = self.players.iter_mut().map(Player::draw).collect();
        pot.push_draws(draws);

        trace!(round = self.round, depth = pot.depth(), cards = pot.card_count(), "draw phase");
        if self.options.verbose {
            self.narrate(&narration::draws(pot));
        }
    }

    /// Compares the latest draws, escalating into wars until one player
    /// holds the single highest card.
    fn resolve(&mut self, pot: &mut Pot) -> Resolution {
        let mut contenders: Vec<usize> = (0..self.players.len()).collect();
        let mut wars = 0;

        loop {
            let ranks: Vec<Option<u8>> = pot
                .latest()
                .iter()
                .map(|draw| draw.map(|card| card.rank))
                .collect();

            let Some(best) = ranks.iter().copied().max().flatten() else {
                let winner = contenders[self.rng.random_range(0..contenders.len())];
                debug!(round = self.round, winner, wars, "stalemate decided by lot");
                self.narrate(&narration::stalemate(winner));
                return Resolution {
                    winner,
                    wars,
                    stalemate: true,
                };
            };

            let tied: Vec<usize> = ranks
                .iter()
                .enumerate()
                .filter(|(_, rank)| **rank == Some(best))
                .map(|(index, _)| index)
                .collect();

            if let [winner] = tied.as_slice() {
                return Resolution {
                    winner: *winner,
                    wars,
                    stalemate: false,
                };
            }

            wars += 1;
            debug!(round = self.round, rank = best, tied = ?tied, "war");
            self.narrate(narration::war_declared());

            contenders = tied;
            // Face-down cards, then the face-up cards that settle the war.
            self.draw_phase(pot);
            self.draw_phase(pot);
        }
    }
}
