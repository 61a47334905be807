//! Tile and cell position types
//!
//! A tile carries its value and current cell, plus the transient history a
//! renderer needs to animate the last move: the cell it started from and the
//! two tiles it was merged from. Neither piece of history survives
//! serialization.

use serde::{Deserialize, Serialize};

use crate::io::state::SavedTile;
use crate::spatial::direction::Vector;

/// Zero-based cell coordinates (`x` is the column, `y` the row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `vector`
    ///
    /// Returns `None` when the step would produce a negative coordinate. The
    /// upper bound depends on the grid and is checked there.
    pub fn step(self, vector: Vector) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(vector.x)?,
            y: self.y.checked_add_signed(vector.y)?,
        })
    }
}

/// A numbered piece on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Face value, always a power of two of at least 2
    pub value: u32,
    /// Current cell
    pub position: Position,
    /// Cell occupied before the current move
    pub previous_position: Option<Position>,
    /// The moving tile and the target tile this one was produced from
    pub merged_from: Option<Box<[Tile; 2]>>,
}

impl Tile {
    /// Create a fresh tile with no move history
    pub const fn new(position: Position, value: u32) -> Self {
        Self {
            value,
            position,
            previous_position: None,
            merged_from: None,
        }
    }

    /// Whether this tile and one of `value` could combine into a single tile
    ///
    /// Equal values qualify as long as the doubled value still fits in a `u32`.
    pub const fn can_merge_with(&self, value: u32) -> bool {
        self.value == value && value.checked_mul(2).is_some()
    }

    /// Absorb the equal-valued tile that ran into this one
    ///
    /// This tile doubles in place and records the moving tile and its own
    /// previous state as `merged_from`. The moving tile is relocated onto this
    /// cell so its recorded history ends where the merge happened.
    ///
    /// # Errors
    ///
    /// Hands `source` back unchanged when the values differ or the doubled
    /// value would overflow
    pub fn absorb(&mut self, mut source: Self) -> Result<(), Self> {
        let Some(value) = self
            .value
            .checked_mul(2)
            .filter(|_| self.value == source.value)
        else {
            return Err(source);
        };

        let position = self.position;
        source.update_position(position);

        let target = std::mem::replace(self, Self::new(position, value));
        self.merged_from = Some(Box::new([source, target]));
        Ok(())
    }

    /// Remember the current cell as the starting point of a move
    pub const fn save_position(&mut self) {
        self.previous_position = Some(self.position);
    }

    /// Relocate the tile
    pub const fn update_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Reset per-move history: snapshot the position and drop merge provenance
    pub fn prepare_for_move(&mut self) {
        self.merged_from = None;
        self.save_position();
    }

    /// Whether this tile was produced by a merge during the current move
    pub const fn is_merged(&self) -> bool {
        self.merged_from.is_some()
    }

    /// Merge level of the tile: 1 for 2, 2 for 4, 11 for 2048
    pub const fn level(&self) -> u32 {
        self.value.trailing_zeros()
    }

    /// Persistable form of the tile (value and position only)
    pub const fn serialize(&self) -> SavedTile {
        SavedTile {
            position: self.position,
            value: self.value,
        }
    }
}
