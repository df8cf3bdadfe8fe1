// Proptest generators for domain types and command scripts.
// Scripts pick players and cards by index so every step is valid by
// construction against whatever state the game is in.

use proptest::prelude::*;

use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random Rank of the 36-card pack
pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

pub fn player_count() -> impl Strategy<Value = usize> {
    2usize..=6
}

/// What a scripted step tries to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Ready,
    Attack,
    Defend,
    EndAttack,
    TakeAllCards,
    CheckAttackTimer,
    CheckDefendTimer,
}

/// One scripted command: who sends it, which cards it names (as indexes
/// into the sender's hand and the table) and how far the clock moves first.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub kind: StepKind,
    pub player_pick: usize,
    pub card_pick: usize,
    pub target_pick: usize,
    pub advance_secs: i64,
}

pub fn step_kind() -> impl Strategy<Value = StepKind> {
    prop_oneof![
        1 => Just(StepKind::Ready),
        4 => Just(StepKind::Attack),
        4 => Just(StepKind::Defend),
        2 => Just(StepKind::EndAttack),
        1 => Just(StepKind::TakeAllCards),
        1 => Just(StepKind::CheckAttackTimer),
        1 => Just(StepKind::CheckDefendTimer),
    ]
}

pub fn step() -> impl Strategy<Value = Step> {
    (step_kind(), 0usize..6, 0usize..36, 0usize..6, 0i64..20).prop_map(
        |(kind, player_pick, card_pick, target_pick, advance_secs)| Step {
            kind,
            player_pick,
            card_pick,
            target_pick,
            advance_secs,
        },
    )
}

pub fn script() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(step(), 1..80)
}
