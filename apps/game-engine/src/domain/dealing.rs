//! Deterministic game creation: trump pick, shuffle and initial deal.

use std::collections::{BTreeSet, HashSet};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cards_types::{full_deck, Suit};
use super::state::{Game, GameSettings, Player, PlayerId, HAND_SIZE, MAX_TURN_TIMEOUT_SECS};
use super::timers::Timer;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// A player joining a new game, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl NewPlayer {
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    pub fn named(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

fn validate_setup(players: &[NewPlayer], settings: &GameSettings) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(DomainError::validation(
            ValidationKind::PlayerCount,
            format!(
                "Player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {}",
                players.len()
            ),
        ));
    }

    let mut seen = HashSet::with_capacity(players.len());
    for p in players {
        if !seen.insert(p.id.as_str()) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayer,
                format!("Duplicate player id: {}", p.id),
            ));
        }
    }

    let timeout = settings.turn_timeout_seconds;
    if !timeout.is_finite() || timeout <= 0.0 || timeout > MAX_TURN_TIMEOUT_SECS {
        return Err(DomainError::validation(
            ValidationKind::InvalidSettings,
            format!(
                "Turn timeout must be in (0, {MAX_TURN_TIMEOUT_SECS}] seconds, got {timeout}"
            ),
        ));
    }

    Ok(())
}

/// Build a fully dealt game.
///
/// The trump suit is drawn before the shuffle. Each player receives six
/// cards from the top of the deck in seat order, a random player attacks
/// first and the next seat defends. The same seed always yields the same game.
pub fn new_game(
    id: impl Into<String>,
    players: &[NewPlayer],
    settings: GameSettings,
    seed: u64,
) -> Result<Game, DomainError> {
    validate_setup(players, &settings)?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let trump_suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];

    let mut deck = full_deck();
    deck.shuffle(&mut rng);

    let mut seated = Vec::with_capacity(players.len());
    for (seat, p) in players.iter().enumerate() {
        let mut hand = Vec::with_capacity(HAND_SIZE);
        for _ in 0..HAND_SIZE {
            if let Some(card) = deck.pop() {
                hand.push(card);
            }
        }
        seated.push(Player {
            id: p.id.clone(),
            name: p.name.clone(),
            seat_place: seat as u8,
            hand,
            last_drawn: Vec::new(),
        });
    }

    let attacker_idx = rng.random_range(0..seated.len());
    let defender_idx = (attacker_idx + 1) % seated.len();
    let attacker_id = seated[attacker_idx].id.clone();
    let defender_id = seated[defender_idx].id.clone();

    Ok(Game {
        id: id.into(),
        settings,
        players: seated,
        attacker_id,
        defender_id,
        deck,
        trump_suit,
        table: Vec::new(),
        discard: Vec::new(),
        pending_end_attack_voters: BTreeSet::new(),
        ready_voters: BTreeSet::new(),
        started: false,
        attack_timer: Timer::default(),
        defend_timer: Timer::default(),
        pending_events: Vec::new(),
    })
}
