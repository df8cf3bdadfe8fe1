//! Domain events buffered on the game during a transaction.
//!
//! Every event carries only public information. The wire tag of each variant
//! lives in `EventKind::as_str`; the serde renames below must agree with it
//! (checked in tests).

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::cards_types::{Card, Suit};
use super::timers::TimerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    #[serde(rename = "EVENT_READY", rename_all = "camelCase")]
    Ready { user_id: String },
    #[serde(rename = "EVENT_START", rename_all = "camelCase")]
    Start {
        attacker_id: String,
        defender_id: String,
        trump_suit: Suit,
    },
    #[serde(rename = "EVENT_ATTACK", rename_all = "camelCase")]
    Attack { card: Card, attacker_id: String },
    #[serde(rename = "EVENT_DEFEND", rename_all = "camelCase")]
    Defend {
        target_card: Card,
        user_card: Card,
        defender_id: String,
    },
    #[serde(rename = "EVENT_END_ATTACK")]
    EndAttack,
    #[serde(rename = "EVENT_TAKE_ALL_CARDS", rename_all = "camelCase")]
    TakeAllCards { user_id: String },
    #[serde(rename = "EVENT_TIMER_STATE", rename_all = "camelCase")]
    TimerState {
        timer: TimerKind,
        completed: bool,
        #[serde(with = "time::serde::rfc3339::option")]
        ends_at: Option<OffsetDateTime>,
    },
    #[serde(rename = "EVENT_END_GAME")]
    EndGame { result: GameResult },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    Start,
    Attack,
    Defend,
    EndAttack,
    TakeAllCards,
    TimerState,
    EndGame,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::Ready,
        EventKind::Start,
        EventKind::Attack,
        EventKind::Defend,
        EventKind::EndAttack,
        EventKind::TakeAllCards,
        EventKind::TimerState,
        EventKind::EndGame,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "EVENT_READY",
            Self::Start => "EVENT_START",
            Self::Attack => "EVENT_ATTACK",
            Self::Defend => "EVENT_DEFEND",
            Self::EndAttack => "EVENT_END_ATTACK",
            Self::TakeAllCards => "EVENT_TAKE_ALL_CARDS",
            Self::TimerState => "EVENT_TIMER_STATE",
            Self::EndGame => "EVENT_END_GAME",
        }
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Ready { .. } => EventKind::Ready,
            Event::Start { .. } => EventKind::Start,
            Event::Attack { .. } => EventKind::Attack,
            Event::Defend { .. } => EventKind::Defend,
            Event::EndAttack => EventKind::EndAttack,
            Event::TakeAllCards { .. } => EventKind::TakeAllCards,
            Event::TimerState { .. } => EventKind::TimerState,
            Event::EndGame { .. } => EventKind::EndGame,
        }
    }
}
