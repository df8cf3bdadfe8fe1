//! Inbound command envelope.
//!
//! Decoding happens in two steps: the shared envelope
//! `{gameId, userId, action}` first, then the payload for that action.
//! An action tag the engine does not know still decodes, as
//! `Action::Unregistered`, so the issuer gets `UNREGISTERED_ACTION` back
//! instead of a structural error.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::{Action, Card};
use crate::error::AppError;
use crate::errors::ErrorCode;

pub const ACTION_READY: &str = "ACTION_READY";
pub const ACTION_ATTACK: &str = "ACTION_ATTACK";
pub const ACTION_DEFEND: &str = "ACTION_DEFEND";
pub const ACTION_END_ATTACK: &str = "ACTION_END_ATTACK";
pub const ACTION_TAKE_ALL_CARDS: &str = "ACTION_TAKE_ALL_CARDS";
pub const ACTION_CHECK_ATTACK_TIMER: &str = "ACTION_CHECK_ATTACK_TIMER";
pub const ACTION_CHECK_DEFEND_TIMER: &str = "ACTION_CHECK_DEFEND_TIMER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub game_id: String,
    pub user_id: String,
    pub action: Action,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    game_id: String,
    user_id: String,
    action: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

#[derive(Deserialize)]
struct AttackPayload {
    card: Card,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefendPayload {
    target_card: Card,
    user_card: Card,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameIdOnly {
    game_id: String,
}

fn malformed(detail: impl std::fmt::Display) -> AppError {
    AppError::bad_request(ErrorCode::BadRequest, format!("malformed command: {detail}"))
}

fn payload<T: DeserializeOwned>(action: &str, payload: Map<String, Value>) -> Result<T, AppError> {
    serde_json::from_value(Value::Object(payload)).map_err(|e| malformed(format!("{action}: {e}")))
}

impl Command {
    pub fn decode(bytes: &[u8]) -> Result<Self, AppError> {
        let envelope: Envelope = serde_json::from_slice(bytes).map_err(malformed)?;

        let action = match envelope.action.as_str() {
            ACTION_READY => Action::Ready,
            ACTION_ATTACK => {
                let p: AttackPayload = payload(ACTION_ATTACK, envelope.payload)?;
                Action::Attack { card: p.card }
            }
            ACTION_DEFEND => {
                let p: DefendPayload = payload(ACTION_DEFEND, envelope.payload)?;
                Action::Defend {
                    target_card: p.target_card,
                    user_card: p.user_card,
                }
            }
            ACTION_END_ATTACK => Action::EndAttack,
            ACTION_TAKE_ALL_CARDS => Action::TakeAllCards,
            ACTION_CHECK_ATTACK_TIMER => Action::CheckAttackTimer,
            ACTION_CHECK_DEFEND_TIMER => Action::CheckDefendTimer,
            other => Action::Unregistered {
                name: other.to_string(),
            },
        };

        Ok(Command {
            game_id: envelope.game_id,
            user_id: envelope.user_id,
            action,
        })
    }

    /// Read only the game id, for routing before the game is loaded.
    pub fn peek_game_id(bytes: &[u8]) -> Result<String, AppError> {
        let only: GameIdOnly = serde_json::from_slice(bytes).map_err(malformed)?;
        Ok(only.game_id)
    }
}

impl Serialize for Command {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("gameId", &self.game_id)?;
        map.serialize_entry("userId", &self.user_id)?;
        map.serialize_entry("action", self.action.name())?;
        match &self.action {
            Action::Attack { card } => map.serialize_entry("card", card)?,
            Action::Defend {
                target_card,
                user_card,
            } => {
                map.serialize_entry("targetCard", target_card)?;
                map.serialize_entry("userCard", user_card)?;
            }
            _ => {}
        }
        map.end()
    }
}
