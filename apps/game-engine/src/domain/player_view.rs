//! Player view of game state: what one seat is allowed to see.
//!
//! The viewer's own hand is shown in full. Everybody else is reduced to a
//! card count and the number of cards they drew in their last
//! replenishment, so concealed hands never leave the engine.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use super::state::{Game, PlayerId, TableCard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherPlayerView {
    pub id: PlayerId,
    pub name: String,
    pub seat_place: u8,
    pub card_count: usize,
    pub taken_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub viewer_id: PlayerId,
    pub viewer_hand: Vec<Card>,
    pub viewer_last_drawn: Vec<Card>,
    /// Every seat except the viewer, in seat order.
    pub other_players: Vec<OtherPlayerView>,
    pub attacker_id: PlayerId,
    pub defender_id: PlayerId,
    pub deck_size: usize,
    pub trump_suit: Suit,
    pub table: Vec<TableCard>,
    pub started: bool,
}

/// Redacted snapshot for `viewer_id`, `None` if the viewer is not seated.
pub fn project(game: &Game, viewer_id: &str) -> Option<GameStateView> {
    let viewer = game.player(viewer_id)?;
    let other_players = game
        .players
        .iter()
        .filter(|p| p.id != viewer_id)
        .map(|p| OtherPlayerView {
            id: p.id.clone(),
            name: p.name.clone(),
            seat_place: p.seat_place,
            card_count: p.hand.len(),
            taken_count: p.last_drawn.len(),
        })
        .collect();

    Some(GameStateView {
        viewer_id: viewer.id.clone(),
        viewer_hand: viewer.hand.clone(),
        viewer_last_drawn: viewer.last_drawn.clone(),
        other_players,
        attacker_id: game.attacker_id.clone(),
        defender_id: game.defender_id.clone(),
        deck_size: game.deck.len(),
        trump_suit: game.trump_suit,
        table: game.table.clone(),
        started: game.started,
    })
}
