//! Round resolution: replenishing hands, rotating roles, detecting game end.

use tracing::info;

use super::cards_types::Card;
use super::events::{Event, GameResult};
use super::state::{Game, Player, HAND_SIZE};

/// Top a player's hand up to six cards from the end of the deck.
///
/// Players already holding six or more are skipped and keep their previous
/// `last_drawn`; anyone else has it replaced by what they draw now.
fn replenish(deck: &mut Vec<Card>, player: &mut Player) {
    if player.hand.len() >= HAND_SIZE {
        return;
    }
    player.last_drawn.clear();
    while player.hand.len() < HAND_SIZE {
        let Some(card) = deck.pop() else {
            break;
        };
        player.hand.push(card);
        player.last_drawn.push(card);
    }
}

fn replenish_by_id(game: &mut Game, id: &str) {
    let Game { deck, players, .. } = game;
    if let Some(player) = players.iter_mut().find(|p| p.id == id) {
        replenish(deck, player);
    }
}

/// Close the current round.
///
/// Replenishes the attacker, then observers in seat order, then the
/// defender. Cards left on the table go to the discard pile, both timers
/// stop and votes reset. With `switch_roles` the defender attacks next and
/// the seat after the old defender defends. Emits `EndAttack`.
pub fn resolve_round(game: &mut Game, switch_roles: bool) {
    let attacker_id = game.attacker_id.clone();
    let defender_id = game.defender_id.clone();
    let next_defender = game.next_seat(&defender_id).map(str::to_owned);
    let observer_ids: Vec<String> = game.observers().iter().map(|p| p.id.clone()).collect();

    replenish_by_id(game, &attacker_id);
    for id in &observer_ids {
        replenish_by_id(game, id);
    }
    replenish_by_id(game, &defender_id);

    if switch_roles {
        if let Some(next_defender) = next_defender {
            game.attacker_id = defender_id;
            game.defender_id = next_defender;
        }
    }

    let table = std::mem::take(&mut game.table);
    for entry in table {
        game.discard.push(entry.card);
        if let Some(cover) = entry.beaten_by {
            game.discard.push(cover);
        }
    }

    game.pending_end_attack_voters.clear();
    game.attack_timer.stop();
    game.defend_timer.stop();
    game.push_event(Event::EndAttack);

    info!(
        game_id = %game.id,
        attacker_id = %game.attacker_id,
        defender_id = %game.defender_id,
        deck_size = game.deck.len(),
        switch_roles,
        "Round resolved"
    );
}

/// Game end after a voted round: the deck is empty and the old attacker or
/// old defender has no cards left. Both empty is a draw.
pub fn evaluate_end_game(game: &Game, old_attacker: &str, old_defender: &str) -> Option<GameResult> {
    if !game.deck.is_empty() {
        return None;
    }
    let empty = |id: &str| game.player(id).is_some_and(|p| p.hand.is_empty());
    match (empty(old_attacker), empty(old_defender)) {
        (true, true) => Some(GameResult::Draw),
        (true, false) | (false, true) => Some(GameResult::Win),
        (false, false) => None,
    }
}
