//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the tile-merging rules, grid state, and turn resolution.
//! It has **zero dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same random source produces identical games (for replays)
//! - **Testable**: Unit tests for every rule next to the code
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Row processing runs on stack buffers without allocation
//!
//! # Module Structure
//!
//! - [`grid`]: Square tile matrix with line extraction and a text codec
//! - [`row`]: Slide and merge for one row or column
//! - [`game`]: Turn resolution, spawning, scoring, and game-over detection
//! - [`rng`]: Injected random source plus a seedable LCG
//! - [`scoring`]: Merge scoring with the exponential bonus above 32
//! - [`snapshot`]: Saved-state JSON codec
//! - [`error`]: Restore and invariant errors
//!
//! # Game Rules
//!
//! - **Slide**: Every tile slides as far as possible toward the move edge
//! - **Merge**: Two equal tiles meeting combine into one of double value; a
//!   tile merges at most once per move
//! - **Spawn**: A move that changes the grid spawns one `2` in a random vacant cell
//! - **Game Over**: A blocked move on a full grid with no legal direction left
//!
//! # Example
//!
//! ```
//! use tile_merge_core::{Game, SimpleRng};
//! use tile_merge_types::{Direction, GameAction, GameEvent};
//!
//! // Create and start a game
//! let mut game = Game::new(4, SimpleRng::new(12345));
//! let events = game.apply_action(&GameAction::Start { serialized_state: None }).unwrap();
//! assert_eq!(events[0], GameEvent::GameStarted);
//!
//! // Apply a move
//! let events = game.apply_action(&GameAction::Move { direction: Direction::Left }).unwrap();
//! assert!(!events.is_empty());
//!
//! // Save and resume
//! let saved = game.serialize();
//! let mut resumed = Game::new(4, SimpleRng::new(1));
//! resumed.init_from_state(&saved).unwrap();
//! assert_eq!(resumed.grid(), game.grid());
//! ```

pub mod error;
pub mod game;
pub mod grid;
pub mod rng;
pub mod row;
pub mod scoring;
pub mod snapshot;

pub use tile_merge_types as types;

// Re-export commonly used types for convenience
pub use error::{GameError, GridParseError, RestoreError};
pub use game::Game;
pub use grid::{Grid, Line};
pub use rng::{RandomSource, SimpleRng};
pub use row::{process_row, RowEvent, RowEvents};
pub use scoring::merge_score;
pub use snapshot::SavedState;
