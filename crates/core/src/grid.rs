//! Grid module - manages the square tile matrix
//!
//! The grid is a `size x size` matrix where each cell is vacant (0) or holds a
//! power-of-two tile value.
//! Uses a flat vector in row-major order (row * size + cell).
//!
//! Out-of-range positions are programming errors and panic. Malformed text
//! encodings are runtime input and come back as [`GridParseError`].

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::error::GridParseError;
use crate::row::row_changes;
use crate::types::{Direction, Position, Tile, MAX_GRID_SIZE, MAX_TILE_VALUE};

/// One row or column in move order: index 0 is the destination edge
pub type Line = ArrayVec<Position, MAX_GRID_SIZE>;

/// Values read from a [`Line`], same order
pub type LineValues = ArrayVec<u32, MAX_GRID_SIZE>;

const ROW_SEPARATOR: &str = "/";
const CELL_SEPARATOR: &str = ",";

/// The square tile matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order
    cells: Vec<u32>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Panics
    ///
    /// If `size` is 0 or larger than [`MAX_GRID_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_GRID_SIZE).contains(&size),
            "grid size {} outside 1..={}",
            size,
            MAX_GRID_SIZE
        );
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from explicit rows
    ///
    /// # Panics
    ///
    /// If the rows are not square or hold a value that is neither 0 nor a
    /// power of two no larger than [`MAX_TILE_VALUE`].
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Self {
        let mut grid = Self::new(rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            assert_eq!(values.len(), grid.size, "row {} is not {} cells wide", row, grid.size);
            for (cell, &value) in values.iter().enumerate() {
                assert!(
                    value == 0 || value.is_power_of_two(),
                    "tile value {} is not a power of two",
                    value
                );
                assert!(
                    value <= MAX_TILE_VALUE,
                    "tile value {} exceeds MAX_TILE_VALUE",
                    value
                );
                grid.update_tile(Position::new(row, cell), value);
            }
        }
        grid
    }

    /// Edge length
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.size && pos.cell < self.size,
            "position {} outside {}x{} grid",
            pos,
            self.size,
            self.size
        );
        pos.row * self.size + pos.cell
    }

    /// Value at `pos` (0 when vacant)
    pub fn get(&self, pos: Position) -> u32 {
        self.cells[self.index(pos)]
    }

    pub fn is_vacant(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Vacant positions in row-major order
    pub fn available_cells(&self) -> Vec<Position> {
        self.positions().filter(|&pos| self.is_vacant(pos)).collect()
    }

    /// Occupied cells as tiles, row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.positions().filter_map(move |pos| match self.get(pos) {
            0 => None,
            value => Some(Tile {
                position: pos,
                value,
            }),
        })
    }

    /// Every position, row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |cell| Position::new(row, cell)))
    }

    /// Rows (Left/Right) or columns (Up/Down) ordered for sliding toward `direction`
    ///
    /// Each line starts at the edge tiles slide toward.
    pub fn lines(&self, direction: Direction) -> Vec<Line> {
        let n = self.size;
        (0..n)
            .map(|outer| {
                (0..n)
                    .map(|step| match direction {
                        Direction::Left => Position::new(outer, step),
                        Direction::Right => Position::new(outer, n - 1 - step),
                        Direction::Up => Position::new(step, outer),
                        Direction::Down => Position::new(n - 1 - step, outer),
                    })
                    .collect()
            })
            .collect()
    }

    /// Read the values along a line
    pub fn line_values(&self, line: &Line) -> LineValues {
        line.iter().map(|&pos| self.get(pos)).collect()
    }

    /// Overwrite the value at `pos`
    pub fn update_tile(&mut self, pos: Position, value: u32) {
        debug_assert!(
            value == 0 || (value.is_power_of_two() && value <= MAX_TILE_VALUE),
            "tile value {} is not a power of two up to MAX_TILE_VALUE",
            value
        );
        let idx = self.index(pos);
        self.cells[idx] = value;
    }

    /// Vacate the cell at `pos`
    pub fn remove_tile(&mut self, pos: Position) {
        self.update_tile(pos, 0);
    }

    /// Place a tile into a vacant cell
    ///
    /// # Panics
    ///
    /// If the target cell is already occupied.
    pub fn insert_tile(&mut self, tile: Tile) {
        assert!(
            self.is_vacant(tile.position),
            "insert into occupied cell {}",
            tile.position
        );
        self.update_tile(tile.position, tile.value);
    }

    /// Vacate every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = 0);
    }

    /// Whether sliding toward `direction` would change anything
    ///
    /// Pure query; the grid is not touched.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.lines(direction)
            .iter()
            .any(|line| row_changes(&self.line_values(line)))
    }

    /// Whether any direction would change the grid
    pub fn has_moves(&self) -> bool {
        Direction::ALL.iter().any(|&d| self.can_move(d))
    }

    /// Encode as `v,v,v/v,v,v/...` (rows top to bottom)
    pub fn serialize(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(CELL_SEPARATOR)
            })
            .collect::<Vec<_>>()
            .join(ROW_SEPARATOR)
    }

    /// Decode the output of [`Grid::serialize`]
    ///
    /// Never returns a partially built grid.
    pub fn deserialize(encoded: &str) -> Result<Self, GridParseError> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(GridParseError::Empty);
        }

        let rows: Vec<&str> = encoded.split(ROW_SEPARATOR).collect();
        let size = rows.len();
        if size > MAX_GRID_SIZE {
            return Err(GridParseError::TooLarge { size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let mut width = 0usize;
            for token in text.split(CELL_SEPARATOR) {
                let token = token.trim();
                let value: u32 = token.parse().map_err(|_| GridParseError::InvalidValue {
                    token: token.to_string(),
                })?;
                if value != 0 && !value.is_power_of_two() {
                    return Err(GridParseError::NotPowerOfTwo { value });
                }
                if value > MAX_TILE_VALUE {
                    return Err(GridParseError::TileTooLarge { value });
                }
                cells.push(value);
                width += 1;
            }
            if width != size {
                return Err(GridParseError::NotSquare {
                    row,
                    width,
                    expected: size,
                });
            }
        }

        Ok(Self { size, cells })
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for row in self.cells.chunks(self.size) {
            let line = row
                .iter()
                .map(|&v| match v {
                    0 => format!("{:>width$}", ".", width = width),
                    v => format!("{:>width$}", v, width = width),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(4);
        assert_eq!(grid.index(Position::new(0, 0)), 0);
        assert_eq!(grid.index(Position::new(0, 3)), 3);
        assert_eq!(grid.index(Position::new(1, 0)), 4);
        assert_eq!(grid.index(Position::new(3, 3)), 15);
    }

    #[test]
    #[should_panic(expected = "outside 4x4 grid")]
    fn test_out_of_range_access_panics() {
        let grid = Grid::new(4);
        grid.get(Position::new(4, 0));
    }

    #[test]
    #[should_panic(expected = "grid size 0")]
    fn test_zero_size_panics() {
        let _ = Grid::new(0);
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_insert_into_occupied_panics() {
        let mut grid = Grid::from_rows(&[[2, 0], [0, 0]]);
        grid.insert_tile(Tile::new(0, 0, 2));
    }

    #[test]
    fn test_lines_left_and_right() {
        let grid = Grid::new(3);
        let left = grid.lines(Direction::Left);
        assert_eq!(
            left[1].as_slice(),
            &[Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
        );
        let right = grid.lines(Direction::Right);
        assert_eq!(
            right[1].as_slice(),
            &[Position::new(1, 2), Position::new(1, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_lines_up_and_down() {
        let grid = Grid::new(3);
        let up = grid.lines(Direction::Up);
        assert_eq!(
            up[2].as_slice(),
            &[Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
        );
        let down = grid.lines(Direction::Down);
        assert_eq!(
            down[0].as_slice(),
            &[Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)]
        );
    }

    #[test]
    fn test_display_aligns_columns() {
        let grid = Grid::from_rows(&[[2, 0], [128, 4]]);
        assert_eq!(grid.to_string(), "  2   .\n128   4\n");
    }
}
