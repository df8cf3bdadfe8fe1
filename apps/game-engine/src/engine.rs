//! Transaction entry point: raw command bytes in, one pack per seat out.

use std::collections::BTreeMap;

use time::OffsetDateTime;
use tracing::{debug, error};

use crate::domain::{apply, project, Game, PlayerId, RuleViolation};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::protocol::{Command, CommandResult, Message, MessagePack};

/// Serialized pack per recipient.
pub type Outbound = BTreeMap<PlayerId, Vec<u8>>;

/// Decode one command, apply it to `game` and project the outcome.
///
/// Structural problems (undecodable bytes, wrong game, unknown user) are
/// returned as `AppError` and leave the game untouched. Rule violations are
/// part of the normal outcome and travel in the issuer's `COMMAND_RESULT`.
pub fn handle_message(
    game: &mut Game,
    bytes: &[u8],
    now: OffsetDateTime,
) -> Result<Outbound, AppError> {
    let command = Command::decode(bytes)?;

    if command.game_id != game.id {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("command for game {} sent to game {}", command.game_id, game.id),
        ));
    }
    if game.player(&command.user_id).is_none() {
        return Err(AppError::not_found(
            ErrorCode::PlayerNotFound,
            format!("user {} is not seated in game {}", command.user_id, game.id),
        ));
    }

    let outcome = apply(game, &command.user_id, &command.action, now);
    if let Err(violation) = outcome {
        debug!(
            game_id = %game.id,
            user_id = %command.user_id,
            action = command.action.name(),
            %violation,
            "Command rejected"
        );
    }

    build_packs(game, command, outcome.err())
}

/// Drain the buffered events into one serialized pack per seat.
pub fn build_packs(
    game: &mut Game,
    command: Command,
    error: Option<RuleViolation>,
) -> Result<Outbound, AppError> {
    let events = game.take_events();
    let mut result = Some(command);
    let mut out = Outbound::new();

    for player in &game.players {
        let view = project(game, &player.id).ok_or_else(|| {
            AppError::internal(format!("no view for seated player {}", player.id))
        })?;

        let mut messages = Vec::with_capacity(events.len() + 1);
        if result.as_ref().is_some_and(|c| c.user_id == player.id) {
            if let Some(command) = result.take() {
                messages.push(Message::Result(CommandResult {
                    command,
                    error,
                    state: view.clone(),
                }));
            }
        }
        messages.extend(events.iter().cloned().map(Message::Event));

        let pack = MessagePack {
            messages,
            game_state: view,
        };
        let bytes = serde_json::to_vec(&pack).map_err(|e| {
            error!(game_id = %game.id, player_id = %player.id, error = %e, "Failed to encode pack");
            AppError::internal(format!("encode pack: {e}"))
        })?;
        out.insert(player.id.clone(), bytes);
    }

    Ok(out)
}
