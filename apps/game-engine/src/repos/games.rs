//! Game persistence seam.
//!
//! The engine only needs "load the latest state" and "persist the resulting
//! state". Durability is up to the implementation.

use async_trait::async_trait;

use crate::domain::Game;
use crate::error::AppError;
use crate::errors::ErrorCode;

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn load(&self, game_id: &str) -> Result<Option<Game>, AppError>;

    async fn save(&self, game: &Game) -> Result<(), AppError>;
}

/// Load a game or fail with `GAME_NOT_FOUND`.
pub async fn require_game<S: GameStore + ?Sized>(store: &S, game_id: &str) -> Result<Game, AppError> {
    store.load(game_id).await?.ok_or_else(|| {
        AppError::not_found(ErrorCode::GameNotFound, format!("game {game_id} not found"))
    })
}
