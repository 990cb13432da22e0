//! Headless tile-merge runner (default binary).
//!
//! Plays one game with random moves through the action queue and prints the
//! final board, score, and saved state. Configuration comes from the
//! environment (see `tile_merge::engine::config`); log filtering from
//! `RUST_LOG`.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{debug, info};

use tile_merge::core::{RandomSource, SimpleRng};
use tile_merge::engine::{GameSession, SessionConfig};
use tile_merge::types::{Direction, GameAction, GameEvent};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig::from_env();
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(size = config.grid_size, seed, "starting session");

    let mut session = GameSession::from_config(&config, seed);
    let mut player = SimpleRng::new(seed.rotate_left(16));
    let sender = session.sender();

    sender.push(GameAction::Start {
        serialized_state: config.saved_state.clone(),
    });

    let mut game_over = false;
    while !game_over && session.turns() < config.max_turns {
        let events = session
            .process_action()
            .await
            .context("engine invariant violated")?;

        for event in &events {
            debug!(?event, "event");
            game_over |= matches!(event, GameEvent::GameOver);
        }

        if !game_over {
            let direction = Direction::ALL[player.next_index(Direction::ALL.len())];
            sender.push(GameAction::Move { direction });
        }
    }

    let game = session.game();
    info!(
        turns = session.turns(),
        score = game.score(),
        game_over,
        "session finished"
    );

    print!("{}", game.grid());
    println!("score: {}", game.score());
    println!("state: {}", game.serialize());
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
