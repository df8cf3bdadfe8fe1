//! Structural error codes for the game engine.
//!
//! These codes cover everything that is not a game rule violation: malformed
//! commands, unknown games or players, configuration and storage failures.
//! Rule violations live in `domain::violations::RuleViolation`.
//!
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in command results and logs.

use core::fmt;

/// Centralized structural error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Command payload could not be decoded
    BadRequest,
    /// Command carries a game id that does not match the loaded game
    InvalidGameId,
    /// Card token could not be parsed
    ParseCard,
    /// Game could not be set up with the given players
    InvalidSetup,

    // Resource lookup
    /// Game not found in the store
    GameNotFound,
    /// Issuing user is not seated in the game
    PlayerNotFound,

    // Storage
    /// Store read or write failed
    StoreError,
    /// Persisted state could not be decoded
    DataCorruption,

    // System
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Get the canonical string representation of this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidSetup => "INVALID_SETUP",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::StoreError => "STORE_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
