//! Validation chain: independent predicates over the game.
//!
//! Each checker either passes or yields one `RuleViolation`. Handlers chain
//! them with `?` so the first failure in chain order is the one reported.

use time::OffsetDateTime;

use super::cards_logic::{beats, hand_has_card};
use super::cards_types::{Card, Rank};
use super::state::{Game, Player, Role, MAX_TABLE_CARDS};
use super::violations::RuleViolation;

pub type CheckResult = Result<(), RuleViolation>;

pub fn game_started(game: &Game) -> CheckResult {
    if game.started {
        Ok(())
    } else {
        Err(RuleViolation::GameShouldBeStarted)
    }
}

fn turn_check(ok: bool) -> CheckResult {
    if ok {
        Ok(())
    } else {
        Err(RuleViolation::NotYourTurn)
    }
}

pub fn is_attacker(game: &Game, user_id: &str) -> CheckResult {
    turn_check(game.role_of(user_id) == Role::Attacker)
}

pub fn is_defender(game: &Game, user_id: &str) -> CheckResult {
    turn_check(game.role_of(user_id) == Role::Defender)
}

pub fn is_not_defender(game: &Game, user_id: &str) -> CheckResult {
    turn_check(game.role_of(user_id) != Role::Defender)
}

pub fn user_has_card(player: &Player, card: Card) -> CheckResult {
    if hand_has_card(&player.hand, card) {
        Ok(())
    } else {
        Err(RuleViolation::UserNoHasCard)
    }
}

pub fn attack_timer_running_out(game: &Game, now: OffsetDateTime) -> CheckResult {
    if game
        .attack_timer
        .expired(now, game.settings.turn_timeout_seconds)
    {
        Err(RuleViolation::AttackTimeOver)
    } else {
        Ok(())
    }
}

pub fn defend_timer_running_out(game: &Game, now: OffsetDateTime) -> CheckResult {
    if game
        .defend_timer
        .expired(now, game.settings.turn_timeout_seconds)
    {
        Err(RuleViolation::DefendTimeOver)
    } else {
        Ok(())
    }
}

pub fn defender_has_cards(game: &Game) -> CheckResult {
    match game.player(&game.defender_id) {
        Some(defender) if !defender.hand.is_empty() => Ok(()),
        _ => Err(RuleViolation::DefenderNoCards),
    }
}

pub fn table_not_full(game: &Game) -> CheckResult {
    if game.table.len() < MAX_TABLE_CARDS {
        Ok(())
    } else {
        Err(RuleViolation::TableHoldsOnlySixCards)
    }
}

/// Any card on the table, attacking or covering, shares `rank`.
pub fn same_rank_on_table(game: &Game, rank: Rank) -> CheckResult {
    let found = game.table.iter().any(|t| {
        t.card.rank == rank || t.beaten_by.is_some_and(|cover| cover.rank == rank)
    });
    if found {
        Ok(())
    } else {
        Err(RuleViolation::NoSameRankCardInTable)
    }
}

/// `target` is on the table and not yet covered.
pub fn target_on_table(game: &Game, target: Card) -> CheckResult {
    if game
        .table
        .iter()
        .any(|t| t.card == target && !t.is_beaten())
    {
        Ok(())
    } else {
        Err(RuleViolation::NotFoundCardOnTable)
    }
}

pub fn card_beats_target(game: &Game, card: Card, target: Card) -> CheckResult {
    if beats(card, target, game.trump_suit) {
        Ok(())
    } else {
        Err(RuleViolation::TargetCardGreaterThenYour)
    }
}

pub fn table_not_empty(game: &Game) -> CheckResult {
    if game.table.is_empty() {
        Err(RuleViolation::CannotEndAttackInFirstTurn)
    } else {
        Ok(())
    }
}

pub fn all_cards_beaten(game: &Game) -> CheckResult {
    if game.table.iter().all(|t| t.is_beaten()) {
        Ok(())
    } else {
        Err(RuleViolation::AllCardShouldBeBeatOffBeforeEndAttack)
    }
}

pub fn not_ready_yet(game: &Game, user_id: &str) -> CheckResult {
    if game.ready_voters.contains(user_id) {
        Err(RuleViolation::UserAlreadyReady)
    } else {
        Ok(())
    }
}
