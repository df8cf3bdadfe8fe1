use game_engine::{AppError, EngineConfig, GameService, InMemoryGameStore};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

mod telemetry;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // GAME_PLAYERS=alice,bob GAME_TURN_TIMEOUT_SECS=30 game-engine < commands.ndjson
    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let service = GameService::new(InMemoryGameStore::new(), config.settings());
    let game = match service.create_game(config.new_players()).await {
        Ok(game) => game,
        Err(e) => {
            eprintln!("❌ Failed to create game: {e}");
            std::process::exit(1);
        }
    };
    eprintln!("🃏 Game {} ready for {} players", game.id, game.players.len());

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        for out in render(service.handle_command(line.as_bytes()).await) {
            stdout.write_all(out.to_string().as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
    }

    info!(game_id = %game.id, "Input closed, shutting down");
    Ok(())
}

fn render(result: Result<game_engine::Outbound, AppError>) -> Vec<Value> {
    match result {
        Ok(packs) => packs
            .into_iter()
            .map(|(recipient, bytes)| {
                let pack = serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|e| {
                    warn!(recipient = %recipient, error = %e, "Pack is not valid JSON");
                    Value::Null
                });
                json!({ "recipient": recipient, "pack": pack })
            })
            .collect(),
        Err(e) => {
            warn!(code = %e.code(), error = %e, "Command dropped");
            vec![json!({ "error": e.body() })]
        }
    }
}
