//! Command handlers: the game state machine.
//!
//! Each handler runs its checker chain, and only once the whole chain passes
//! does it mutate the game and buffer events. A rejected command leaves the
//! game untouched apart from the timeout side effects on `Attack` and
//! `Defend`.

use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

use super::cards_logic::remove_card;
use super::cards_types::Card;
use super::checkers;
use super::events::Event;
use super::round::{evaluate_end_game, resolve_round};
use super::state::{Game, TableCard, MAX_TABLE_CARDS};
use super::timers::TimerKind;
use super::violations::RuleViolation;

/// A player action after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Ready,
    Attack { card: Card },
    Defend { target_card: Card, user_card: Card },
    EndAttack,
    TakeAllCards,
    CheckAttackTimer,
    CheckDefendTimer,
    /// Action tag the engine does not know.
    Unregistered { name: String },
}

impl Action {
    pub fn name(&self) -> &str {
        match self {
            Action::Ready => "ACTION_READY",
            Action::Attack { .. } => "ACTION_ATTACK",
            Action::Defend { .. } => "ACTION_DEFEND",
            Action::EndAttack => "ACTION_END_ATTACK",
            Action::TakeAllCards => "ACTION_TAKE_ALL_CARDS",
            Action::CheckAttackTimer => "ACTION_CHECK_ATTACK_TIMER",
            Action::CheckDefendTimer => "ACTION_CHECK_DEFEND_TIMER",
            Action::Unregistered { name } => name,
        }
    }
}

pub type HandlerResult = Result<(), RuleViolation>;

/// Apply one action from `user_id` to the game.
pub fn apply(game: &mut Game, user_id: &str, action: &Action, now: OffsetDateTime) -> HandlerResult {
    debug!(
        game_id = %game.id,
        user_id,
        role = ?game.role_of(user_id),
        action = action.name(),
        "Applying action"
    );
    match action {
        Action::Ready => ready(game, user_id, now),
        Action::Attack { card } => attack(game, user_id, *card, now),
        Action::Defend {
            target_card,
            user_card,
        } => defend(game, user_id, *user_card, *target_card, now),
        Action::EndAttack => end_attack(game, user_id, now),
        Action::TakeAllCards => take_all_cards(game, user_id),
        Action::CheckAttackTimer => check_timer(game, TimerKind::Attack, now),
        Action::CheckDefendTimer => check_timer(game, TimerKind::Defend, now),
        Action::Unregistered { .. } => Err(RuleViolation::UnregisteredAction),
    }
}

pub fn ready(game: &mut Game, user_id: &str, now: OffsetDateTime) -> HandlerResult {
    checkers::not_ready_yet(game, user_id)?;

    game.ready_voters.insert(user_id.to_string());
    game.push_event(Event::Ready {
        user_id: user_id.to_string(),
    });

    let everyone_ready = game
        .players
        .iter()
        .all(|p| game.ready_voters.contains(&p.id));
    if everyone_ready && !game.started {
        game.started = true;
        game.attack_timer.start(now);
        game.push_event(Event::Start {
            attacker_id: game.attacker_id.clone(),
            defender_id: game.defender_id.clone(),
            trump_suit: game.trump_suit,
        });
        info!(game_id = %game.id, attacker_id = %game.attacker_id, "Game started");
    }
    Ok(())
}

fn attack_chain(game: &Game, user_id: &str, card: Card, now: OffsetDateTime) -> HandlerResult {
    checkers::game_started(game)?;
    checkers::is_attacker(game, user_id)?;
    let attacker = game
        .player(user_id)
        .ok_or(RuleViolation::NotYourTurn)?;
    checkers::user_has_card(attacker, card)?;
    checkers::attack_timer_running_out(game, now)?;
    checkers::defender_has_cards(game)?;
    checkers::table_not_full(game)?;
    if !game.table.is_empty() {
        checkers::same_rank_on_table(game, card.rank)?;
    }
    Ok(())
}

pub fn attack(game: &mut Game, user_id: &str, card: Card, now: OffsetDateTime) -> HandlerResult {
    if let Err(violation) = attack_chain(game, user_id, card, now) {
        if violation == RuleViolation::AttackTimeOver {
            warn!(game_id = %game.id, user_id, "Attack timer expired, closing round");
            resolve_round(game, true);
        }
        return Err(violation);
    }

    let removed = game
        .player_mut(user_id)
        .is_some_and(|p| remove_card(&mut p.hand, card));
    if !removed {
        error!(game_id = %game.id, user_id, %card, "Attack card vanished after validation");
        return Err(RuleViolation::ServerError);
    }

    game.table.push(TableCard {
        card,
        beaten_by: None,
    });
    game.pending_end_attack_voters.clear();
    game.defend_timer.start(now);
    game.push_event(Event::Attack {
        card,
        attacker_id: user_id.to_string(),
    });
    Ok(())
}

fn defend_chain(
    game: &Game,
    user_id: &str,
    user_card: Card,
    target_card: Card,
    now: OffsetDateTime,
) -> HandlerResult {
    checkers::game_started(game)?;
    checkers::defend_timer_running_out(game, now)?;
    checkers::is_defender(game, user_id)?;
    let defender = game
        .player(user_id)
        .ok_or(RuleViolation::NotYourTurn)?;
    checkers::user_has_card(defender, user_card)?;
    checkers::target_on_table(game, target_card)?;
    checkers::card_beats_target(game, user_card, target_card)?;
    Ok(())
}

pub fn defend(
    game: &mut Game,
    user_id: &str,
    user_card: Card,
    target_card: Card,
    now: OffsetDateTime,
) -> HandlerResult {
    if let Err(violation) = defend_chain(game, user_id, user_card, target_card, now) {
        if violation == RuleViolation::DefendTimeOver {
            warn!(game_id = %game.id, user_id, "Defend timer expired");
            game.push_event(Event::EndAttack);
        }
        return Err(violation);
    }

    let Some(slot) = game
        .table
        .iter()
        .position(|t| t.card == target_card && !t.is_beaten())
    else {
        error!(game_id = %game.id, user_id, %target_card, "Defend target vanished after validation");
        return Err(RuleViolation::ServerError);
    };
    let removed = game
        .player_mut(user_id)
        .is_some_and(|p| remove_card(&mut p.hand, user_card));
    if !removed {
        error!(game_id = %game.id, user_id, %user_card, "Defend card vanished after validation");
        return Err(RuleViolation::ServerError);
    }

    game.table[slot].beaten_by = Some(user_card);
    game.push_event(Event::Defend {
        target_card,
        user_card,
        defender_id: user_id.to_string(),
    });

    // Timers only stop when the round resolves; the attacker gets a fresh
    // window to add cards while there is room.
    if game.table.iter().all(TableCard::is_beaten) && game.table.len() < MAX_TABLE_CARDS {
        game.attack_timer.start(now);
    }
    Ok(())
}

pub fn end_attack(game: &mut Game, user_id: &str, now: OffsetDateTime) -> HandlerResult {
    checkers::table_not_empty(game)?;
    checkers::game_started(game)?;
    checkers::is_not_defender(game, user_id)?;
    checkers::attack_timer_running_out(game, now)?;
    checkers::all_cards_beaten(game)?;

    game.pending_end_attack_voters.insert(user_id.to_string());

    let all_voted = game
        .players
        .iter()
        .filter(|p| p.id != game.defender_id)
        .all(|p| game.pending_end_attack_voters.contains(&p.id));
    if !all_voted {
        debug!(game_id = %game.id, user_id, "End attack vote recorded");
        return Ok(());
    }

    let old_attacker = game.attacker_id.clone();
    let old_defender = game.defender_id.clone();
    resolve_round(game, true);

    if let Some(result) = evaluate_end_game(game, &old_attacker, &old_defender) {
        info!(game_id = %game.id, ?result, "Game over");
        game.push_event(Event::EndGame { result });
    }
    Ok(())
}

pub fn take_all_cards(game: &mut Game, user_id: &str) -> HandlerResult {
    checkers::game_started(game)?;
    checkers::is_defender(game, user_id)?;

    let table = std::mem::take(&mut game.table);
    let Some(defender) = game.player_mut(user_id) else {
        game.table = table;
        error!(game_id = %game.id, user_id, "Defender missing from seats");
        return Err(RuleViolation::ServerError);
    };
    for entry in table {
        defender.hand.push(entry.card);
        if let Some(cover) = entry.beaten_by {
            defender.hand.push(cover);
        }
    }
    game.push_event(Event::TakeAllCards {
        user_id: user_id.to_string(),
    });

    resolve_round(game, false);

    // The defender who took the cards sits out the next attack.
    if let Some(attacker) = game.next_seat(user_id).map(str::to_owned) {
        if let Some(defender) = game.next_seat(&attacker).map(str::to_owned) {
            game.attacker_id = attacker;
            game.defender_id = defender;
        }
    }
    Ok(())
}

pub fn check_timer(game: &mut Game, kind: TimerKind, now: OffsetDateTime) -> HandlerResult {
    checkers::game_started(game)?;

    let expired = match kind {
        TimerKind::Attack => checkers::attack_timer_running_out(game, now).is_err(),
        TimerKind::Defend => checkers::defend_timer_running_out(game, now).is_err(),
    };
    if expired {
        warn!(game_id = %game.id, timer = ?kind, "Timer expired, closing round");
        resolve_round(game, true);
    }

    let timer = match kind {
        TimerKind::Attack => game.attack_timer,
        TimerKind::Defend => game.defend_timer,
    };
    game.push_event(Event::TimerState {
        timer: kind,
        completed: !timer.running,
        ends_at: timer.ends_at(game.settings.turn_timeout_seconds),
    });
    Ok(())
}
