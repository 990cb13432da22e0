//! Saved-state codec.
//!
//! A saved game is JSON `{"scores": <u64>, "gridSerialized": "<grid text>"}`
//! where the grid text is [`Grid::serialize`] output.

use serde::{Deserialize, Serialize};

use crate::error::RestoreError;
use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub scores: u64,
    pub grid_serialized: String,
}

impl SavedState {
    pub fn capture(score: u64, grid: &Grid) -> Self {
        Self {
            scores: score,
            grid_serialized: grid.serialize(),
        }
    }

    /// Encode as a JSON object
    ///
    /// # Panics
    ///
    /// Never in practice: the struct holds only an integer and a string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("saved state serializes")
    }

    /// Parse and validate a saved game in one step
    pub fn decode(encoded: &str) -> Result<(u64, Grid), RestoreError> {
        let state: SavedState = serde_json::from_str(encoded)?;
        let grid = Grid::deserialize(&state.grid_serialized)?;
        Ok((state.scores, grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let grid = Grid::from_rows(&[[2, 0], [0, 4]]);
        let json = SavedState::capture(12, &grid).to_json();
        assert_eq!(json, r#"{"scores":12,"gridSerialized":"2,0/0,4"}"#);
    }

    #[test]
    fn test_decode_valid() {
        let (score, grid) = SavedState::decode(r#"{"scores":8,"gridSerialized":"4,0/0,2"}"#)
            .expect("valid state");
        assert_eq!(score, 8);
        assert_eq!(grid, Grid::from_rows(&[[4, 0], [0, 2]]));
    }

    #[test]
    fn test_decode_rejects_bad_json() {
        assert!(matches!(
            SavedState::decode("not json"),
            Err(RestoreError::Json(_))
        ));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        assert!(matches!(
            SavedState::decode(r#"{"gridSerialized":"2,0/0,4"}"#),
            Err(RestoreError::Json(_))
        ));
        assert!(matches!(
            SavedState::decode(r#"{"scores":4}"#),
            Err(RestoreError::Json(_))
        ));
    }

    #[test]
    fn test_decode_rejects_negative_score() {
        assert!(SavedState::decode(r#"{"scores":-4,"gridSerialized":"2"}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_corrupt_grid() {
        assert!(matches!(
            SavedState::decode(r#"{"scores":0,"gridSerialized":"2,0/0"}"#),
            Err(RestoreError::Grid(_))
        ));
    }
}
