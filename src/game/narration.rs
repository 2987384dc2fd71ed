//! Console narration text for verbose matches.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::result::Standing;

use super::Pot;

pub fn round_started(round: u32, active: &[usize]) -> String {
    let active: Vec<String> = active.iter().map(|i| (i + 1).to_string()).collect();
    format!("\nRound {round} started\nPlayers {} active", active.join(", "))
}

pub fn draws(pot: &Pot) -> String {
    let names: Vec<String> = pot
        .latest()
        .iter()
        .map(|draw| draw.map_or_else(|| "(no card)".to_string(), |card| card.to_string()))
        .collect();
    format!(
        "Players draw: {}\nSize of pot: {}",
        names.join(", "),
        pot.card_count()
    )
}

pub const fn war_declared() -> &'static str {
    "Draw, additional cards drawn"
}

pub fn stalemate(winner: usize) -> String {
    format!("Nobody can draw, player {} takes the pot by lot", winner + 1)
}

pub fn standings(standings: &[Standing]) -> String {
    standings
        .iter()
        .map(|s| {
            format!(
                " Player {}: {} cards ({} in draw pile)",
                s.player + 1,
                s.cards,
                s.draw_pile
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn finished(rounds: u32, winner: usize) -> String {
    format!("Game finished in {rounds} rounds\nPlayer {} wins!", winner + 1)
}
