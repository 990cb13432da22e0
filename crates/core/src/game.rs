//! Game module - executes one action against the grid
//!
//! This module ties together the grid, row processor, scoring, and spawn
//! randomness. Each call to [`Game::apply_action`] resolves exactly one turn and
//! returns the events describing every observable change, in order.

use tracing::{debug, error, warn};

use crate::error::{GameError, RestoreError, Result};
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::row::{process_row, RowEvent};
use crate::scoring::{add_score, merge_score};
use crate::snapshot::SavedState;
use crate::types::*;

/// One game session: grid, score, and lifecycle status
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    grid: Grid,
    score: u64,
    status: GameStatus,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    /// Create an uninitialized game with an empty `size x size` grid
    pub fn new(size: usize, rng: R) -> Self {
        Self {
            grid: Grid::new(size),
            score: 0,
            status: GameStatus::Uninitialized,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Encode score and grid as a saved-state string
    pub fn serialize(&self) -> String {
        SavedState::capture(self.score, &self.grid).to_json()
    }

    /// Replace score and grid from a saved-state string
    ///
    /// On error nothing is changed.
    pub fn init_from_state(&mut self, state: &str) -> std::result::Result<(), RestoreError> {
        let (score, grid) = SavedState::decode(state)?;
        self.score = score;
        self.grid = grid;
        Ok(())
    }

    /// Resolve one action and return the events it produced
    ///
    /// `Magic` and `CheatCode` produce no events here; they belong to
    /// collaborators outside the rules engine.
    ///
    /// # Errors
    ///
    /// [`GameError`] when an engine invariant breaks. The game must not be
    /// driven further after an error.
    pub fn apply_action(&mut self, action: &GameAction) -> Result<Vec<GameEvent>> {
        match action {
            GameAction::Start { serialized_state } => Ok(self.start(serialized_state.as_deref())),
            GameAction::Move { direction } => self.apply_move(*direction),
            GameAction::Magic { .. } | GameAction::CheatCode { .. } => {
                debug!(action = action.as_str(), "no core rules for action");
                Ok(Vec::new())
            }
        }
    }

    /// Start a game, resuming from `serialized_state` when it decodes
    ///
    /// A missing or malformed state falls back to a fresh game.
    pub fn start(&mut self, serialized_state: Option<&str>) -> Vec<GameEvent> {
        self.status = GameStatus::Running;

        if let Some(state) = serialized_state {
            match self.init_from_state(state) {
                Ok(()) => {
                    debug!(score = self.score, size = self.grid.size(), "game restored");
                    let mut events = vec![GameEvent::GameStarted];
                    events.extend(self.grid.tiles().map(|tile| GameEvent::TileCreated { tile }));
                    return events;
                }
                Err(err) => {
                    warn!(%err, "saved state rejected, starting fresh");
                }
            }
        }

        self.score = 0;
        let mut events = vec![GameEvent::GameStarted];
        events.extend(
            self.grid
                .tiles()
                .map(|tile| GameEvent::TileDeleted {
                    position: tile.position,
                }),
        );
        self.grid.clear();

        if let Some(tile) = self.spawn_tile() {
            events.push(GameEvent::TileCreated { tile });
        }
        debug!(size = self.grid.size(), "fresh game started");
        events
    }

    /// Slide toward `direction`, spawn a tile if anything changed, detect game over
    pub fn apply_move(&mut self, direction: Direction) -> Result<Vec<GameEvent>> {
        let mut events = self.slide(direction);

        if !events.is_empty() {
            let Some(tile) = self.spawn_tile() else {
                error!(%direction, "move changed the grid but no cell is vacant");
                return Err(GameError::NoVacantCell { direction });
            };
            events.push(GameEvent::TileCreated { tile });
            return Ok(events);
        }

        events.push(GameEvent::TilesNotMoved { direction });
        if self.grid.is_full() && !self.grid.has_moves() {
            debug!(score = self.score, "no moves left");
            self.status = GameStatus::GameOver;
            events.push(GameEvent::GameOver);
        }
        Ok(events)
    }

    /// Run the row processor over every line and apply each outcome as it is produced
    fn slide(&mut self, direction: Direction) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for line in self.grid.lines(direction) {
            let values = self.grid.line_values(&line);
            for row_event in process_row(&values) {
                let from = line[row_event.from()];
                let to = line[row_event.to()];
                match row_event {
                    RowEvent::Move { value, .. } => {
                        self.grid.update_tile(to, value);
                        self.grid.remove_tile(from);
                        events.push(GameEvent::TileMoved { from, to, value });
                    }
                    RowEvent::Merge { value, .. } => {
                        self.grid.update_tile(to, value);
                        self.grid.remove_tile(from);
                        self.score = add_score(self.score, merge_score(value));
                        events.push(GameEvent::TileMerged {
                            from,
                            into: to,
                            value,
                        });
                    }
                }
            }
        }

        events
    }

    /// Insert a [`SPAWN_VALUE`] tile into a uniformly random vacant cell
    fn spawn_tile(&mut self) -> Option<Tile> {
        let available = self.grid.available_cells();
        if available.is_empty() {
            return None;
        }

        let pos = available[self.rng.next_index(available.len())];
        let tile = Tile {
            position: pos,
            value: SPAWN_VALUE,
        };
        self.grid.insert_tile(tile);
        Some(tile)
    }
}
