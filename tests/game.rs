//! Match integration tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warrs::export::{ROUNDS_TABLE, TableWriter, export_logs, tables_from_log};
use warrs::{
    Card, DECK_SIZE, Deck, DeckError, MatchError, MatchLog, Player, Suit, War, WarOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a draw pile that yields `draws` in order.
fn pile_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

fn set_piles(war: &mut War, piles: &[&[Card]]) {
    for (player, draws) in war.players_mut().iter_mut().zip(piles) {
        player.draw_pile = pile_from_draws(draws);
        player.discard_pile = Deck::new();
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("warrs-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn standard_deck_has_every_card_once() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(|c| (2..=14).contains(&c.rank)));

    let mut built = Deck::new();
    built.build().unwrap();
    assert_eq!(built, deck);
    assert_eq!(built.build().unwrap_err(), DeckError::NotEmpty);
}

#[test]
fn deck_draw_rules() {
    let mut deck = pile_from_draws(&[card(Suit::Hearts, 9), card(Suit::Clubs, 4)]);

    assert_eq!(deck.draw_many(0).unwrap_err(), DeckError::InvalidDrawCount);
    assert_eq!(
        deck.draw_many(3).unwrap_err(),
        DeckError::NotEnoughCards {
            requested: 3,
            available: 2
        }
    );

    assert_eq!(deck.draw(), Some(card(Suit::Hearts, 9)));
    assert_eq!(deck.draw(), Some(card(Suit::Clubs, 4)));
    assert_eq!(deck.draw(), None);
}

#[test]
fn shuffle_is_reproducible_under_a_seed() {
    let mut first = Deck::standard();
    let mut second = Deck::standard();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(first, second);
    assert_ne!(first, Deck::standard());
}

#[test]
fn deck_power_of_empty_player_is_none() {
    let mut player = Player::new();
    assert_eq!(player.deck_size(), 0);
    assert_eq!(player.deck_power(), None);

    player.draw_pile = pile_from_draws(&[card(Suit::Hearts, 14), card(Suit::Clubs, 2)]);
    player.discard_pile = pile_from_draws(&[card(Suit::Spades, 5)]);
    assert_eq!(player.deck_size(), 3);
    assert_eq!(player.deck_power(), Some(7.0));
}

#[test]
fn refresh_moves_discard_pile_into_draw_pile() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut player = Player::new();
    player.discard_pile = pile_from_draws(&[card(Suit::Hearts, 3), card(Suit::Spades, 8)]);

    player.refresh_if_empty(&mut rng);
    assert_eq!(player.draw_pile.len(), 2);
    assert!(player.discard_pile.is_empty());
    assert!(player.is_active());

    player.draw_pile = Deck::new();
    player.refresh_if_empty(&mut rng);
    assert!(!player.is_active());
    assert_eq!(player.eliminated_round(), None);
}

#[test]
fn elimination_round_is_recorded_once() {
    let mut player = Player::new();
    player.draw_pile = pile_from_draws(&[card(Suit::Hearts, 3)]);

    player.mark_out_if_empty(1);
    assert!(player.is_active());
    assert_eq!(player.eliminated_round(), None);

    player.draw();
    player.mark_out_if_empty(4);
    player.mark_out_if_empty(5);
    assert!(!player.is_active());
    assert_eq!(player.eliminated_round(), Some(4));
}

#[test]
fn too_few_players_is_rejected() {
    let err = War::new(WarOptions::default().with_player_count(1), 1).unwrap_err();
    assert!(matches!(err, MatchError::TooFewPlayers(1)));
}

#[test]
fn rounds_need_a_deal() {
    let mut war = War::new(WarOptions::default(), 1).unwrap();
    assert!(matches!(war.play_round(), Err(MatchError::NotDealt)));

    war.deal().unwrap();
    assert!(matches!(war.deal(), Err(MatchError::AlreadyDealt)));
}

#[test]
fn deal_is_round_robin_and_leaves_remainder_undealt() {
    let mut war = War::new(WarOptions::default().with_player_count(3), 5).unwrap();
    war.deal().unwrap();

    assert!(war.players().iter().all(|p| p.draw_pile.len() == 17));
    assert_eq!(war.total_cards(), 51);

    let unique: HashSet<Card> = war
        .players()
        .iter()
        .flat_map(|p| p.draw_pile.cards().iter().copied())
        .collect();
    assert_eq!(unique.len(), 51);
}

#[test]
fn two_player_match_runs_to_completion() {
    let mut war = War::new(WarOptions::default(), 2024).unwrap();
    let result = war.run().unwrap();

    assert_eq!(war.active_count(), 1);
    assert!(result.rounds >= 26);
    assert_eq!(war.total_cards(), DECK_SIZE);
    assert_eq!(war.players()[result.winner].deck_size(), DECK_SIZE);
    assert_eq!(result.eliminations[result.winner], None);
    assert_eq!(result.eliminations.iter().filter(|e| e.is_none()).count(), 1);
    assert_eq!(war.winner().unwrap(), result.winner);
    assert!(result.log_path.is_none());
}

#[test]
fn same_seed_replays_the_same_match() {
    let play = |seed| {
        let mut war = War::new(WarOptions::default().with_player_count(4), seed).unwrap();
        war.deal().unwrap();
        let mut rounds = Vec::new();
        while war.active_count() > 1 {
            rounds.push(war.play_round().unwrap());
        }
        (war.match_id(), rounds, war.winner().unwrap())
    };

    let first = play(77);
    assert_eq!(first, play(77));
    assert_ne!(first.0, play(78).0);
}

#[test]
fn three_way_tie_goes_to_war_once() {
    let mut war = War::new(WarOptions::default().with_player_count(3), 3).unwrap();
    war.deal().unwrap();
    set_piles(
        &mut war,
        &[
            &[
                card(Suit::Hearts, 14),
                card(Suit::Hearts, 6),
                card(Suit::Hearts, 12),
                card(Suit::Hearts, 2),
            ],
            &[
                card(Suit::Diamonds, 14),
                card(Suit::Diamonds, 7),
                card(Suit::Diamonds, 9),
                card(Suit::Diamonds, 3),
            ],
            &[
                card(Suit::Spades, 14),
                card(Suit::Spades, 8),
                card(Suit::Spades, 10),
                card(Suit::Spades, 4),
            ],
        ],
    );

    let summary = war.play_round().unwrap();
    assert_eq!(summary.winner, 0);
    assert_eq!(summary.wars, 1);
    assert_eq!(summary.cards_won, 9);
    assert!(!summary.stalemate);

    let winner = &war.players()[0];
    assert_eq!(winner.discard_pile.len(), 9);
    let won: HashSet<Card> = winner.discard_pile.cards().iter().copied().collect();
    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Spades] {
        assert!(won.contains(&card(suit, 14)));
    }
    assert_eq!(war.total_cards(), 12);
    assert!(war.players().iter().all(Player::is_active));
}

#[test]
fn player_exhausted_mid_war_loses_and_goes_out() {
    let mut war = War::new(WarOptions::default(), 11).unwrap();
    war.deal().unwrap();
    set_piles(
        &mut war,
        &[
            &[card(Suit::Hearts, 14), card(Suit::Hearts, 2), card(Suit::Hearts, 11)],
            &[card(Suit::Clubs, 14)],
        ],
    );

    let summary = war.play_round().unwrap();
    assert_eq!(summary.winner, 0);
    assert_eq!(summary.wars, 1);
    assert_eq!(summary.cards_won, 4);

    let loser = &war.players()[1];
    assert!(!loser.is_active());
    assert_eq!(loser.eliminated_round(), Some(1));
    assert_eq!(war.total_cards(), 4);
    assert_eq!(war.winner().unwrap(), 0);
}

#[test]
fn stalemate_awards_pot_to_a_tied_player() {
    let mut war = War::new(WarOptions::default(), 8).unwrap();
    war.deal().unwrap();
    set_piles(&mut war, &[&[card(Suit::Hearts, 9)], &[card(Suit::Clubs, 9)]]);

    let summary = war.play_round().unwrap();
    assert!(summary.stalemate);
    assert_eq!(summary.wars, 1);
    assert_eq!(summary.cards_won, 2);

    let winner = &war.players()[summary.winner];
    assert!(winner.is_active());
    assert_eq!(winner.deck_size(), 2);
    assert_eq!(winner.eliminated_round(), None);

    let loser = &war.players()[1 - summary.winner];
    assert_eq!(loser.eliminated_round(), Some(1));
    assert_eq!(war.active_count(), 1);
    assert_eq!(war.winner().unwrap(), summary.winner);
}

#[test]
fn winner_check_surfaces_inconsistent_state() {
    let war = War::new(WarOptions::default().with_player_count(3), 2).unwrap();
    assert!(matches!(war.winner(), Err(MatchError::MultipleWinners(3))));
}

#[test]
fn verbose_match_still_finishes() {
    let mut war = War::new(WarOptions::default().with_verbose(true), 6).unwrap();
    let result = war.run().unwrap();
    assert_eq!(war.players()[result.winner].deck_size(), DECK_SIZE);
}

#[test]
fn logged_match_round_trips_through_export() {
    let dir = scratch_dir("export");
    let log_dir = dir.join("logs");
    let table_dir = dir.join("database");

    let options = WarOptions::default()
        .with_player_count(3)
        .with_logging(true)
        .with_log_dir(&log_dir);
    let mut war = War::new(options, 314).unwrap();
    let result = war.run().unwrap();

    let path = result.log_path.clone().unwrap();
    assert_eq!(path, log_dir.join(format!("{}.json", result.match_id)));

    let log = MatchLog::load(&path).unwrap();
    let recorded = war.log().unwrap();
    assert_eq!(log.match_id, recorded.match_id);
    for (round, entry) in &log.rounds {
        let in_memory = &recorded.rounds[round];
        assert_eq!(entry.battle, in_memory.battle);
        for (loaded, kept) in entry.decks.iter().zip(&in_memory.decks) {
            assert_eq!(loaded.size, kept.size);
            assert!((loaded.power.unwrap_or(0.0) - kept.power.unwrap_or(0.0)).abs() < 1e-9);
        }
    }
    assert_eq!(log.round_count(), result.rounds as usize);
    assert_eq!(log.eliminations, result.eliminations);
    assert_eq!(log.winner, Some(result.winner));

    let first = &log.rounds[&1];
    assert!(first.decks.iter().all(|d| d.size == 17));
    assert_eq!(first.battle.len(), 3);

    let tables = tables_from_log(&log).unwrap();
    assert_eq!(tables.game.round_count, result.rounds as usize);
    assert_eq!(tables.game.player_count, 3);
    assert_eq!(tables.rounds.len(), result.rounds as usize * 3);
    for row in &tables.rounds {
        let snapshot = log.rounds[&row.round].decks[row.player - 1];
        assert_eq!(row.deck_size, snapshot.size);
        assert_eq!(row.power, snapshot.power);
    }
    assert_eq!(tables.eliminations.rounds, result.eliminations);

    assert_eq!(export_logs(&log_dir, &table_dir).unwrap(), 1);
    TableWriter::new(&table_dir).append(&tables).unwrap();
    let rounds_csv = std::fs::read_to_string(table_dir.join(ROUNDS_TABLE)).unwrap();
    assert_eq!(rounds_csv.lines().count(), 2 * result.rounds as usize * 3);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unfinished_log_derives_eliminations_from_snapshots() {
    let mut war = War::new(WarOptions::default().with_logging(true), 21).unwrap();
    war.deal().unwrap();
    while war.active_count() > 1 {
        war.play_round().unwrap();
    }
    let winner = war.winner().unwrap();
    let loser = 1 - winner;
    let out_round = war.players()[loser].eliminated_round();
    assert_eq!(out_round, Some(war.round()));

    // Without a later snapshot the last loser cannot be told apart.
    let log = war.log().unwrap().clone();
    assert!(log.eliminations.is_empty());
    let tables = tables_from_log(&log).unwrap();
    assert_eq!(tables.eliminations.rounds, vec![None, None]);

    // A later snapshot shows the loser empty and recovers the same round.
    war.play_round().unwrap();
    let log = war.log().unwrap().clone();
    let tables = tables_from_log(&log).unwrap();
    assert_eq!(tables.eliminations.rounds[winner], None);
    assert_eq!(tables.eliminations.rounds[loser], out_round);
}
