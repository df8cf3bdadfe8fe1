//! In-memory adapter for the game store.
//!
//! Games are kept as serialized JSON keyed by id, the way a keyed store
//! would hold them, so every load goes through a full decode.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::error;

use crate::domain::Game;
use crate::error::AppError;
use crate::repos::games::GameStore;

#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: DashMap<String, String>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn load(&self, game_id: &str) -> Result<Option<Game>, AppError> {
        let Some(raw) = self.games.get(game_id).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            error!(game_id, error = %e, "Stored game failed to decode");
            AppError::data_corruption(format!("game {game_id}: {e}"))
        })
    }

    async fn save(&self, game: &Game) -> Result<(), AppError> {
        let raw = serde_json::to_string(game)
            .map_err(|e| AppError::store(format!("encode game {}: {e}", game.id)))?;
        self.games.insert(game.id.clone(), raw);
        Ok(())
    }
}
