use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit, DECK_SIZE};
use super::events::Event;
use super::timers::Timer;
use crate::errors::domain::DomainError;

pub type PlayerId = String;

/// The table never holds more than this many attack cards.
pub const MAX_TABLE_CARDS: usize = 6;
/// Players are replenished up to this many cards after each round.
pub const HAND_SIZE: usize = 6;
/// Longest accepted turn timeout, one day.
pub const MAX_TURN_TIMEOUT_SECS: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// Seconds a running attack or defend timer lasts.
    pub turn_timeout_seconds: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            turn_timeout_seconds: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    /// 0..N-1, fixed at creation.
    pub seat_place: u8,
    pub hand: Vec<Card>,
    /// Cards dealt in this player's most recent replenishment.
    #[serde(default)]
    pub last_drawn: Vec<Card>,
}

/// An attack card on the table and the card covering it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCard {
    pub card: Card,
    pub beaten_by: Option<Card>,
}

impl TableCard {
    pub fn is_beaten(&self) -> bool {
        self.beaten_by.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Attacker,
    Defender,
    Observer,
}

/// Aggregate root: everything needed to apply one command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub settings: GameSettings,
    /// Ordered by `seat_place`.
    pub players: Vec<Player>,
    pub attacker_id: PlayerId,
    pub defender_id: PlayerId,
    /// Drawn from the end.
    pub deck: Vec<Card>,
    pub trump_suit: Suit,
    pub table: Vec<TableCard>,
    #[serde(default)]
    pub discard: Vec<Card>,
    pub pending_end_attack_voters: BTreeSet<PlayerId>,
    pub ready_voters: BTreeSet<PlayerId>,
    pub started: bool,
    pub attack_timer: Timer,
    pub defend_timer: Timer,
    /// Drained by the projector at the end of every transaction.
    #[serde(skip)]
    pub pending_events: Vec<Event>,
}

impl Game {
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Id of the player seated after `id`, wrapping around.
    pub fn next_seat(&self, id: &str) -> Option<&str> {
        let idx = self.index_of(id)?;
        let next = (idx + 1) % self.players.len();
        Some(self.players[next].id.as_str())
    }

    pub fn role_of(&self, id: &str) -> Role {
        if id == self.attacker_id {
            Role::Attacker
        } else if id == self.defender_id {
            Role::Defender
        } else {
            Role::Observer
        }
    }

    /// Players that neither attack nor defend, in seat order starting after
    /// the attacker.
    pub fn observers(&self) -> Vec<&Player> {
        let n = self.players.len();
        let start = self.index_of(&self.attacker_id).unwrap_or(0);
        (1..n)
            .map(|offset| &self.players[(start + offset) % n])
            .filter(|p| p.id != self.attacker_id && p.id != self.defender_id)
            .collect()
    }

    pub fn push_event(&mut self, event: Event) {
        self.pending_events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending_events)
    }

    /// Cards accounted for across deck, hands, table and discard.
    pub fn card_count(&self) -> usize {
        let hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        let table: usize = self
            .table
            .iter()
            .map(|t| if t.is_beaten() { 2 } else { 1 })
            .sum();
        self.deck.len() + hands + table + self.discard.len()
    }

    /// Structural invariants that must hold between transactions.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if self.attacker_id == self.defender_id {
            return Err(DomainError::invariant("attacker and defender coincide"));
        }
        if self.player(&self.attacker_id).is_none() || self.player(&self.defender_id).is_none() {
            return Err(DomainError::invariant("attacker or defender is not seated"));
        }
        if self.table.len() > MAX_TABLE_CARDS {
            return Err(DomainError::invariant(format!(
                "table holds {} cards",
                self.table.len()
            )));
        }
        for (idx, p) in self.players.iter().enumerate() {
            if usize::from(p.seat_place) != idx {
                return Err(DomainError::invariant(format!(
                    "player {} has seat {} at position {idx}",
                    p.id, p.seat_place
                )));
            }
        }
        let count = self.card_count();
        if count != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "{count} cards in play, expected {DECK_SIZE}"
            )));
        }
        Ok(())
    }
}
