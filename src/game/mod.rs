//! Match engine and state management.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use uuid::{Builder, Uuid};

use crate::deck::Deck;
use crate::error::MatchError;
use crate::log::MatchLog;
use crate::options::WarOptions;
use crate::player::Player;
use crate::result::{MatchResult, Standing};

mod narration;
mod pot;
mod round;

pub use pot::Pot;

/// A match of War between two or more players.
///
/// The match owns every player, its random number generator and, when
/// logging is enabled, the match log. Use [`WarOptions`] to configure the
/// player count, narration and logging.
///
/// # Example
///
/// ```
/// use warrs::{War, WarOptions};
///
/// let mut war = War::new(WarOptions::default().with_player_count(3), 7).unwrap();
/// let result = war.run().unwrap();
/// assert!(result.winner < 3);
/// ```
#[derive(Debug)]
pub struct War {
    /// Match options.
    options: WarOptions,
    /// Players in seat order.
    players: Vec<Player>,
    /// Number of rounds started so far.
    round: u32,
    /// Unique match id.
    match_id: Uuid,
    /// Whether the deck has been dealt.
    dealt: bool,
    /// Match log, present when logging is enabled.
    log: Option<MatchLog>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl War {
    /// Creates a new match with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are requested.
    pub fn new(options: WarOptions, seed: u64) -> Result<Self, MatchError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new match drawing all randomness from `rng`.
    ///
    /// The match id is drawn from `rng` too, so a seeded generator replays
    /// the same match under the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are requested.
    pub fn with_rng(options: WarOptions, mut rng: ChaCha8Rng) -> Result<Self, MatchError> {
        if options.player_count < 2 {
            return Err(MatchError::TooFewPlayers(options.player_count));
        }

        let match_id = Builder::from_random_bytes(rng.random()).into_uuid();
        let log = options
            .logging
            .then(|| MatchLog::new(match_id, options.player_count));

        Ok(Self {
            players: (0..options.player_count).map(|_| Player::new()).collect(),
            options,
            round: 0,
            match_id,
            dealt: false,
            log,
            rng,
        })
    }

    /// Shuffles a standard deck and deals it round-robin.
    ///
    /// Cards left over when the deck does not split evenly are not dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards were already dealt.
    pub fn deal(&mut self) -> Result<(), MatchError> {
        if self.dealt {
            return Err(MatchError::AlreadyDealt);
        }

        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);

        let per_player = deck.len() / self.players.len();
        for _ in 0..per_player {
            for player in &mut self.players {
                if let Some(card) = deck.draw() {
                    player.draw_pile.push(card);
                }
            }
        }

        self.dealt = true;
        info!(
            match_id = %self.match_id,
            players = self.players.len(),
            per_player,
            undealt = deck.len(),
            "cards dealt"
        );
        Ok(())
    }

    /// Deals if needed, then plays rounds until one player remains.
    ///
    /// When logging is enabled the log is written to the configured
    /// directory once the winner is known.
    ///
    /// # Errors
    ///
    /// Returns an error if the winner cannot be determined or the log cannot
    /// be written.
    pub fn run(&mut self) -> Result<MatchResult, MatchError> {
        if !self.dealt {
            self.deal()?;
        }

        while self.active_count() > 1 {
            self.play_round()?;
        }

        let winner = self.winner()?;
        self.narrate(&narration::finished(self.round, winner));
        info!(match_id = %self.match_id, rounds = self.round, winner, "match finished");

        let log_path = match &mut self.log {
            Some(log) => {
                log.finish(&self.players, winner);
                Some(log.save(&self.options.log_dir)?)
            }
            None => None,
        };

        Ok(MatchResult {
            match_id: self.match_id,
            rounds: self.round,
            winner,
            eliminations: self.players.iter().map(Player::eliminated_round).collect(),
            log_path,
        })
    }

    /// Returns the index of the only player never eliminated.
    ///
    /// # Errors
    ///
    /// Returns an error if no player, or more than one player, is without an
    /// elimination round.
    pub fn winner(&self) -> Result<usize, MatchError> {
        let survivors: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.eliminated_round().is_none())
            .map(|(index, _)| index)
            .collect();

        match survivors.as_slice() {
            [winner] => Ok(*winner),
            [] => Err(MatchError::NoWinner),
            many => Err(MatchError::MultipleWinners(many.len())),
        }
    }

    /// Returns the match options.
    #[must_use]
    pub const fn options(&self) -> &WarOptions {
        &self.options
    }

    /// Returns the match id.
    #[must_use]
    pub const fn match_id(&self) -> Uuid {
        self.match_id
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns whether the cards have been dealt.
    #[must_use]
    pub const fn is_dealt(&self) -> bool {
        self.dealt
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the players for direct pile manipulation.
    ///
    /// The player count is fixed for the match, so only a slice is exposed.
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Returns the match log, if logging is enabled.
    #[must_use]
    pub const fn log(&self) -> Option<&MatchLog> {
        self.log.as_ref()
    }

    /// Returns the number of players still in the match.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|player| player.is_active()).count()
    }

    /// Returns the number of cards held by all players together.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(Player::deck_size).sum()
    }

    /// Returns every player's card counts.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .enumerate()
            .map(|(player, p)| Standing {
                player,
                cards: p.deck_size(),
                draw_pile: p.draw_pile.len(),
                active: p.is_active(),
            })
            .collect()
    }

    fn narrate(&self, text: &str) {
        if self.options.verbose {
            println!("{text}");
        }
    }
}
