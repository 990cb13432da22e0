//! Error types raised by the rules engine.

use thiserror::Error;

use crate::types::Direction;

/// Reasons a grid text encoding was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("grid encoding is empty")]
    Empty,

    #[error("grid size {size} exceeds the supported maximum")]
    TooLarge { size: usize },

    #[error("row {row} has {width} cells, expected {expected}")]
    NotSquare {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("invalid cell value: {token:?}")]
    InvalidValue { token: String },

    #[error("cell value {value} is not a power of two")]
    NotPowerOfTwo { value: u32 },

    #[error("cell value {value} exceeds the largest tile value")]
    TileTooLarge { value: u32 },
}

/// Reasons a saved game could not be restored
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("saved state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("saved grid is corrupt: {0}")]
    Grid(#[from] GridParseError),
}

/// Broken engine invariants
///
/// These indicate a bug, not bad input. The session should stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("move {direction} changed the grid but left no vacant cell to spawn into")]
    NoVacantCell { direction: Direction },
}

pub type Result<T> = std::result::Result<T, GameError>;
