//! Row processor - slide and merge for a single line
//!
//! Input is one row or column already extracted in move order: index 0 is the
//! destination edge, the edge tiles slide toward. Output is the list of
//! per-tile outcomes as indices into that same line.
//!
//! Uses a write cursor that walks away from the destination edge with
//! zero allocation (events live in an `ArrayVec`).

use arrayvec::ArrayVec;

use crate::types::{MAX_GRID_SIZE, MAX_TILE_VALUE};

/// Outcome of one tile in one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowEvent {
    /// Tile at `from` slides to `to` unchanged
    Move { from: usize, to: usize, value: u32 },
    /// Tile at `from` slides into the equal tile at `to`, producing `value`
    Merge { from: usize, to: usize, value: u32 },
}

impl RowEvent {
    pub fn from(&self) -> usize {
        match *self {
            RowEvent::Move { from, .. } | RowEvent::Merge { from, .. } => from,
        }
    }

    pub fn to(&self) -> usize {
        match *self {
            RowEvent::Move { to, .. } | RowEvent::Merge { to, .. } => to,
        }
    }

    pub fn is_merge(&self) -> bool {
        matches!(self, RowEvent::Merge { .. })
    }
}

/// Events for one line (at most one per occupied cell)
pub type RowEvents = ArrayVec<RowEvent, MAX_GRID_SIZE>;

/// Compute the slide + merge outcome of one line
///
/// Tiles that neither move nor merge produce no event, so an empty result
/// means the line is unchanged. A destination absorbs at most one merge, and
/// tiles already at [`MAX_TILE_VALUE`] never merge.
///
/// # Panics
///
/// If `values` is longer than [`MAX_GRID_SIZE`].
///
/// # Examples
///
/// ```
/// use tile_merge_core::row::{process_row, RowEvent};
///
/// let events = process_row(&[2, 0, 0, 2]);
/// assert_eq!(events.as_slice(), &[RowEvent::Merge { from: 3, to: 0, value: 4 }]);
///
/// assert!(process_row(&[2, 4, 8, 16]).is_empty());
/// ```
pub fn process_row(values: &[u32]) -> RowEvents {
    assert!(
        values.len() <= MAX_GRID_SIZE,
        "row of length {} exceeds MAX_GRID_SIZE ({})",
        values.len(),
        MAX_GRID_SIZE
    );

    let mut events = RowEvents::new();
    // Next free destination slot.
    let mut cursor = 0usize;
    // Value and merge flag of the tile most recently placed at `cursor - 1`.
    let mut last: Option<(u32, bool)> = None;

    for (from, &value) in values.iter().enumerate() {
        if value == 0 {
            continue;
        }

        match last {
            Some((placed, false)) if placed == value && value < MAX_TILE_VALUE => {
                let merged = value * 2;
                events.push(RowEvent::Merge {
                    from,
                    to: cursor - 1,
                    value: merged,
                });
                last = Some((merged, true));
            }
            _ => {
                if from != cursor {
                    events.push(RowEvent::Move {
                        from,
                        to: cursor,
                        value,
                    });
                }
                last = Some((value, false));
                cursor += 1;
            }
        }
    }

    events
}

/// Whether processing `values` would change the line
pub fn row_changes(values: &[u32]) -> bool {
    !process_row(values).is_empty()
}
