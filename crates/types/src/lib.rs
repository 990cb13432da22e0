//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, action queue, renderers, sound).
//!
//! # Grid Coordinates
//!
//! The grid is a square of `size x size` cells:
//!
//! - **Rows**: indexed top to bottom starting at 0
//! - **Cells**: indexed left to right starting at 0 within each row
//! - **Vacant**: a cell holding the value 0
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Classic 4x4 board |
//! | `MAX_GRID_SIZE` | 8 | Largest supported board edge |
//! | `SPAWN_VALUE` | 2 | Value of every spawned tile |
//! | `MAX_TILE_VALUE` | 2³⁰ | Largest tile value; tiles at this value no longer merge |
//! | `EXPONENTIAL_SCORE_THRESHOLD` | 32 | Merges above this score `value²` |
//!
//! # Examples
//!
//! ```
//! use tile_merge_types::{Direction, GameAction, Position, Tile};
//!
//! // Parse a direction (case-insensitive)
//! let direction = Direction::from_str("Left").unwrap();
//! assert_eq!(direction, Direction::Left);
//!
//! // Build a move action
//! let action = GameAction::Move { direction };
//! assert_eq!(action.as_str(), "move");
//!
//! // Tiles are position + value snapshots
//! let tile = Tile::new(1, 2, 4);
//! assert_eq!(tile.position, Position::new(1, 2));
//! ```

use std::fmt;

/// Grid edge length used when nothing else is configured
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Largest grid edge length supported by the engine
///
/// Per-row buffers are stack allocated with this capacity.
pub const MAX_GRID_SIZE: usize = 8;

/// Value of every newly spawned tile
pub const SPAWN_VALUE: u32 = 2;

/// Largest value a tile may hold
///
/// Two tiles of this value do not merge, so merged values always fit in a `u32`.
pub const MAX_TILE_VALUE: u32 = 1 << 30;

/// Merged values above this threshold score `value²` instead of `value`
pub const EXPONENTIAL_SCORE_THRESHOLD: u32 = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(SPAWN_VALUE, 2);
        assert_eq!(EXPONENTIAL_SCORE_THRESHOLD, 32);
        assert!(MAX_TILE_VALUE.is_power_of_two());
        assert!(MAX_TILE_VALUE.checked_mul(2).is_some());
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
    }

    #[test]
    fn direction_parse_roundtrip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_str(direction.as_str()), Some(direction));
        }
        assert_eq!(Direction::from_str("U"), Some(Direction::Up));
        assert_eq!(Direction::from_str("diagonal"), None);
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }

    #[test]
    fn action_names() {
        assert_eq!(
            GameAction::Start {
                serialized_state: None
            }
            .as_str(),
            "start"
        );
        assert_eq!(
            GameAction::CheatCode {
                code: "iddqd".to_string()
            }
            .as_str(),
            "cheatCode"
        );
    }
}

/// The four move directions
///
/// Up/Down slide tiles along columns, Left/Right slide tiles along rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order used for game-over probing
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Left,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_merge_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grid cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub cell: usize,
}

impl Position {
    pub fn new(row: usize, cell: usize) -> Self {
        Self { row, cell }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.cell)
    }
}

/// A tile snapshot: a position and the value occupying it
///
/// Tiles carry no identity. Moves and merges are tracked by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub position: Position,
    pub value: u32,
}

impl Tile {
    pub fn new(row: usize, cell: usize, value: u32) -> Self {
        Self {
            position: Position::new(row, cell),
            value,
        }
    }
}

/// Player intents consumed by the engine, one per turn
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Start a game, resuming from `serialized_state` when it decodes
    Start { serialized_state: Option<String> },
    /// Slide every tile toward one edge
    Move { direction: Direction },
    /// Cast a spell (handled by an external collaborator)
    Magic { spell: String },
    /// Enter a cheat code (handled by an external collaborator)
    CheatCode { code: String },
}

impl GameAction {
    /// Convert to camelCase action name (for logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start { .. } => "start",
            GameAction::Move { .. } => "move",
            GameAction::Magic { .. } => "magic",
            GameAction::CheatCode { .. } => "cheatCode",
        }
    }
}

/// Observable state changes emitted by the engine, in emission order
///
/// Consumers (renderer, scorer, sound) pattern-match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// A game started (fresh or restored)
    GameStarted,
    /// A tile appeared on the grid
    TileCreated { tile: Tile },
    /// A tile was removed while resetting the grid
    TileDeleted { position: Position },
    /// A tile slid without merging
    TileMoved {
        from: Position,
        to: Position,
        value: u32,
    },
    /// A tile slid into an equal tile; `value` is the combined value
    TileMerged {
        from: Position,
        into: Position,
        value: u32,
    },
    /// A move in `direction` changed nothing
    TilesNotMoved { direction: Direction },
    /// No direction can change the full grid
    GameOver,
}

/// Lifecycle of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// No `Start` action processed yet
    #[default]
    Uninitialized,
    Running,
    /// Terminal until the next `Start`
    GameOver,
}
