//! Square board of optional tiles with spatial queries
//!
//! Cells are stored in an `ndarray` matrix indexed `[x, y]`, so iterating the
//! matrix visits columns in the outer loop and rows in the inner loop. Every
//! query that depends on iteration order (available cells, serialization)
//! inherits that ordering.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_SIZE;
use crate::io::error::{Result, invalid_state};
use crate::io::state::SavedGrid;
use crate::math::random::RandomSource;
use crate::spatial::tiles::{Position, Tile};

/// Fixed-size board holding at most one tile per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Array2<Option<Tile>>,
}

impl Grid {
    /// Create an empty board with `size` cells per side
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: Array2::default((size, size)),
        }
    }

    /// Rebuild a board from its persisted form
    ///
    /// Tiles come back without move history. The snapshot is checked rather
    /// than trusted: it must describe a square board of supported size whose
    /// tiles carry power-of-two values and sit in the cell they claim.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::InvalidState`] if any of those checks fail
    pub fn from_saved(saved: &SavedGrid) -> Result<Self> {
        let size = saved.size;
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(invalid_state(&format!(
                "grid size {size} is outside 1..={MAX_GRID_SIZE}"
            )));
        }
        if saved.cells.len() != size {
            return Err(invalid_state(&format!(
                "expected {size} columns, found {}",
                saved.cells.len()
            )));
        }

        let mut grid = Self::new(size);
        for (x, column) in saved.cells.iter().enumerate() {
            if column.len() != size {
                return Err(invalid_state(&format!(
                    "column {x} has {} cells, expected {size}",
                    column.len()
                )));
            }

            for (y, cell) in column.iter().enumerate() {
                let Some(saved_tile) = cell else {
                    continue;
                };

                if saved_tile.value < 2 || !saved_tile.value.is_power_of_two() {
                    return Err(invalid_state(&format!(
                        "tile value {} at ({x}, {y}) is not a power of two of at least 2",
                        saved_tile.value
                    )));
                }
                if saved_tile.position != Position::new(x, y) {
                    return Err(invalid_state(&format!(
                        "tile stored in cell ({x}, {y}) claims position ({}, {})",
                        saved_tile.position.x, saved_tile.position.y
                    )));
                }

                grid.insert_tile(Tile::new(saved_tile.position, saved_tile.value));
            }
        }

        Ok(grid)
    }

    /// Number of cells per side
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether a position lies on the board
    pub const fn within_bounds(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    /// Tile at a position, or `None` when the cell is empty or off the board
    pub fn cell_content(&self, position: Position) -> Option<&Tile> {
        self.cells
            .get([position.x, position.y])
            .and_then(Option::as_ref)
    }

    /// Whether the cell holds no tile
    pub fn cell_available(&self, position: Position) -> bool {
        !self.cell_occupied(position)
    }

    /// Whether the cell holds a tile
    pub fn cell_occupied(&self, position: Position) -> bool {
        self.cell_content(position).is_some()
    }

    /// Place a tile at its own recorded position, replacing any occupant
    ///
    /// Tiles whose position lies off the board are dropped.
    pub fn insert_tile(&mut self, tile: Tile) {
        if let Some(cell) = self.cells.get_mut([tile.position.x, tile.position.y]) {
            *cell = Some(tile);
        }
    }

    /// Take the tile out of a cell
    pub fn remove_tile(&mut self, position: Position) -> Option<Tile> {
        self.cells
            .get_mut([position.x, position.y])
            .and_then(Option::take)
    }

    /// Slide the tile at `from` into the cell `to`
    pub fn move_tile(&mut self, from: Position, to: Position) {
        if let Some(mut tile) = self.remove_tile(from) {
            tile.update_position(to);
            self.insert_tile(tile);
        }
    }

    /// Merge `tile` into the occupant of `position`, returning the new value
    ///
    /// The occupant qualifies when it can combine with the tile and was not
    /// itself produced by a merge during the current move.
    ///
    /// # Errors
    ///
    /// Hands `tile` back when the cell is empty, out of bounds or holds a tile
    /// that cannot absorb it
    pub fn merge_into(&mut self, position: Position, tile: Tile) -> std::result::Result<u32, Tile> {
        let Some(occupant) = self
            .cells
            .get_mut([position.x, position.y])
            .and_then(Option::as_mut)
            .filter(|occupant| !occupant.is_merged())
        else {
            return Err(tile);
        };

        occupant.absorb(tile)?;
        Ok(occupant.value)
    }

    /// All empty cells, columns outer and rows inner
    pub fn available_cells(&self) -> Vec<Position> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|((x, y), _)| Position::new(x, y))
            .collect()
    }

    /// Pick one empty cell uniformly at random
    pub fn random_available_cell(&self, random: &mut impl RandomSource) -> Option<Position> {
        let cells = self.available_cells();
        if cells.is_empty() {
            return None;
        }

        cells.get(random.next_index(cells.len())).copied()
    }

    /// Whether at least one cell is empty
    pub fn cells_available(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Every tile on the board, columns outer and rows inner
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// Mutable access to every tile on the board
    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.cells.iter_mut().flatten()
    }

    /// Highest tile value on the board
    pub fn max_tile_value(&self) -> Option<u32> {
        self.tiles().map(|tile| tile.value).max()
    }

    /// Persistable form: size plus a column-major matrix of optional tiles
    pub fn serialize(&self) -> SavedGrid {
        let cells = (0..self.size)
            .map(|x| {
                (0..self.size)
                    .map(|y| self.cell_content(Position::new(x, y)).map(Tile::serialize))
                    .collect()
            })
            .collect();

        SavedGrid {
            size: self.size,
            cells,
        }
    }
}
