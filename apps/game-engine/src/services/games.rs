//! Game creation and command handling on top of a [`GameStore`].
//!
//! Commands for one game run strictly one after another: each game id owns a
//! lane (an async mutex) held for the whole load, apply, save sequence.
//! Different games proceed in parallel. A lane lives only while commands for
//! its game are in flight.

use std::sync::Arc;

use dashmap::DashMap;
use rand::Rng;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{new_game, Game, GameSettings, NewPlayer};
use crate::engine::{handle_message, Outbound};
use crate::error::AppError;
use crate::protocol::Command;
use crate::repos::games::{require_game, GameStore};

pub struct GameService<S: GameStore> {
    store: S,
    settings: GameSettings,
    lanes: DashMap<String, Arc<Mutex<()>>>,
}

impl<S: GameStore> GameService<S> {
    pub fn new(store: S, settings: GameSettings) -> Self {
        Self {
            store,
            settings,
            lanes: DashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn lane(&self, game_id: &str) -> Arc<Mutex<()>> {
        self.lanes
            .entry(game_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the lane once nobody else waits on it. Call with the lane held.
    fn release_lane(&self, game_id: &str) {
        // the map's handle plus the caller's
        self.lanes
            .remove_if(game_id, |_, held| Arc::strong_count(held) == 2);
    }

    /// Number of games with a command in flight.
    pub fn active_lanes(&self) -> usize {
        self.lanes.len()
    }

    /// Deal a new game with a fresh id and persist it.
    pub async fn create_game(&self, players: Vec<NewPlayer>) -> Result<Game, AppError> {
        let id = Uuid::new_v4().to_string();
        let seed: u64 = rand::rng().random();
        let game = new_game(id, &players, self.settings.clone(), seed)?;

        self.store.save(&game).await?;
        info!(
            game_id = %game.id,
            players = game.players.len(),
            trump = ?game.trump_suit,
            "Game created"
        );
        Ok(game)
    }

    /// Run one raw command against its game and persist the result.
    ///
    /// The game is only saved when the engine produced packs; structural
    /// errors leave the stored state as it was.
    pub async fn handle_command(&self, bytes: &[u8]) -> Result<Outbound, AppError> {
        self.handle_command_at(bytes, OffsetDateTime::now_utc()).await
    }

    pub async fn handle_command_at(
        &self,
        bytes: &[u8],
        now: OffsetDateTime,
    ) -> Result<Outbound, AppError> {
        let game_id = Command::peek_game_id(bytes)?;
        // Unknown ids never get a lane
        require_game(&self.store, &game_id).await?;

        let lane = self.lane(&game_id);
        let _guard = lane.lock().await;
        let result = self.apply_locked(&game_id, bytes, now).await;
        // Still under the guard, so a waiter always holds a handle
        self.release_lane(&game_id);
        result
    }

    async fn apply_locked(
        &self,
        game_id: &str,
        bytes: &[u8],
        now: OffsetDateTime,
    ) -> Result<Outbound, AppError> {
        let mut game = require_game(&self.store, game_id).await?;
        let out = handle_message(&mut game, bytes, now)?;
        self.store.save(&game).await?;

        debug!(game_id, recipients = out.len(), "Command handled");
        Ok(out)
    }
}
