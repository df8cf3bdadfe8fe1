//! Test-only game fixtures for domain unit tests.
//!
//! Cards not placed in a hand or the deck go to the discard pile so every
//! fixture accounts for all 36 cards.

use std::collections::BTreeSet;

use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::cards_parsing::parse_cards;
use crate::domain::cards_types::{full_deck, Suit};
use crate::domain::state::{Game, GameSettings, Player};
use crate::domain::timers::Timer;

pub const T0: OffsetDateTime = datetime!(2024-05-01 12:00 UTC);

/// Build a game from explicit hands (seat order) and deck (top is last).
/// The first player attacks and the second defends.
pub fn game_with(hands: &[(&str, &[&str])], deck: &[&str], trump: Suit) -> Game {
    let players: Vec<Player> = hands
        .iter()
        .enumerate()
        .map(|(seat, (id, cards))| Player {
            id: (*id).to_string(),
            name: String::new(),
            seat_place: seat as u8,
            hand: parse_cards(cards),
            last_drawn: Vec::new(),
        })
        .collect();
    let deck = parse_cards(deck);
    let discard = full_deck()
        .into_iter()
        .filter(|c| !deck.contains(c) && !players.iter().any(|p| p.hand.contains(c)))
        .collect();

    Game {
        id: "g-test".to_string(),
        settings: GameSettings::default(),
        attacker_id: players[0].id.clone(),
        defender_id: players[1].id.clone(),
        players,
        deck,
        trump_suit: trump,
        table: Vec::new(),
        discard,
        pending_end_attack_voters: BTreeSet::new(),
        ready_voters: BTreeSet::new(),
        started: false,
        attack_timer: Timer::default(),
        defend_timer: Timer::default(),
        pending_events: Vec::new(),
    }
}

/// Every card not in `used`, as tokens.
fn rest_of_deck(used: &[&str]) -> Vec<String> {
    let used = parse_cards(used);
    full_deck()
        .into_iter()
        .filter(|c| !used.contains(c))
        .map(|c| c.to_string())
        .collect()
}

pub const A_HAND: [&str; 6] = ["6H", "7H", "8H", "9C", "TC", "AS"];
pub const B_HAND: [&str; 6] = ["7D", "8D", "KH", "6S", "QC", "JD"];
pub const C_HAND: [&str; 6] = ["6C", "7C", "8C", "6D", "9D", "TD"];

/// Players "a" (attacker) and "b" (defender), spades trump, 24-card deck.
pub fn two_player_game() -> Game {
    let used: Vec<&str> = A_HAND.iter().chain(B_HAND.iter()).copied().collect();
    let deck = rest_of_deck(&used);
    let deck: Vec<&str> = deck.iter().map(String::as_str).collect();
    game_with(&[("a", &A_HAND), ("b", &B_HAND)], &deck, Suit::Spades)
}

/// Players "a" (attacker), "b" (defender), "c" (observer), 18-card deck.
pub fn three_player_game() -> Game {
    let used: Vec<&str> = A_HAND
        .iter()
        .chain(B_HAND.iter())
        .chain(C_HAND.iter())
        .copied()
        .collect();
    let deck = rest_of_deck(&used);
    let deck: Vec<&str> = deck.iter().map(String::as_str).collect();
    game_with(
        &[("a", &A_HAND), ("b", &B_HAND), ("c", &C_HAND)],
        &deck,
        Suit::Spades,
    )
}

/// Mark the game started at `now` with the attack timer running.
pub fn start(game: &mut Game, now: OffsetDateTime) {
    game.started = true;
    game.ready_voters = game.players.iter().map(|p| p.id.clone()).collect();
    game.attack_timer.start(now);
}
