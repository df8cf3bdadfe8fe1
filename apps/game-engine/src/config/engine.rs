//! Environment-driven engine configuration.

use std::env;

use crate::domain::state::MAX_TURN_TIMEOUT_SECS;
use crate::domain::{GameSettings, NewPlayer};
use crate::error::AppError;

pub const TURN_TIMEOUT_VAR: &str = "GAME_TURN_TIMEOUT_SECS";
pub const PLAYERS_VAR: &str = "GAME_PLAYERS";
pub const DEFAULT_TURN_TIMEOUT_SECS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub turn_timeout_seconds: f64,
    pub players: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_timeout_seconds: DEFAULT_TURN_TIMEOUT_SECS,
            players: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Read `GAME_TURN_TIMEOUT_SECS` and `GAME_PLAYERS`.
    ///
    /// Unset variables fall back to defaults; set but invalid ones are errors.
    pub fn from_env() -> Result<Self, AppError> {
        let turn_timeout_seconds = match env::var(TURN_TIMEOUT_VAR) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(env::VarError::NotPresent) => DEFAULT_TURN_TIMEOUT_SECS,
            Err(e) => return Err(e.into()),
        };
        let players = match env::var(PLAYERS_VAR) {
            Ok(raw) => parse_players(&raw),
            Err(env::VarError::NotPresent) => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            turn_timeout_seconds,
            players,
        })
    }

    pub fn settings(&self) -> GameSettings {
        GameSettings {
            turn_timeout_seconds: self.turn_timeout_seconds,
        }
    }

    pub fn new_players(&self) -> Vec<NewPlayer> {
        self.players.iter().cloned().map(NewPlayer::new).collect()
    }
}

fn parse_timeout(raw: &str) -> Result<f64, AppError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        AppError::config(format!("{TURN_TIMEOUT_VAR} must be a number of seconds, got '{raw}'"))
    })?;
    if !value.is_finite() || value <= 0.0 || value > MAX_TURN_TIMEOUT_SECS {
        return Err(AppError::config(format!(
            "{TURN_TIMEOUT_VAR} must be in (0, {MAX_TURN_TIMEOUT_SECS}] seconds, got {value}"
        )));
    }
    Ok(value)
}

fn parse_players(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
