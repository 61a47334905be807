//! Move directions, unit vectors and traversal ordering

use std::fmt;

use crate::io::error::{GameError, invalid_parameter};
use crate::spatial::tiles::Position;

/// One of the four directions a move can slide the board
///
/// The discriminants are the wire encoding used by input sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    Up = 0,
    /// Towards the last column
    Right = 1,
    /// Towards the last row
    Down = 2,
    /// Towards column 0
    Left = 3,
}

impl Direction {
    /// All directions in encoding order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit vector of the direction in grid coordinates
    pub const fn vector(self) -> Vector {
        match self {
            Self::Up => Vector { x: 0, y: -1 },
            Self::Right => Vector { x: 1, y: 0 },
            Self::Down => Vector { x: 0, y: 1 },
            Self::Left => Vector { x: -1, y: 0 },
        }
    }

    /// Integer encoding (0 = up, 1 = right, 2 = down, 3 = left)
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Up),
            1 => Ok(Self::Right),
            2 => Ok(Self::Down),
            3 => Ok(Self::Left),
            _ => Err(invalid_parameter(
                "direction",
                &value,
                &"expected 0 (up), 1 (right), 2 (down) or 3 (left)",
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Unit step in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// Column delta
    pub x: isize,
    /// Row delta
    pub y: isize,
}

/// Order in which cells are visited during a move
///
/// Cells are always visited starting from the edge the tiles travel towards,
/// so a tile that has already slid is never picked up again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversals {
    /// Column visiting order
    pub x: Vec<usize>,
    /// Row visiting order
    pub y: Vec<usize>,
}

impl Traversals {
    /// Build the visiting order for a square grid of `size` cells per side
    pub fn build(size: usize, vector: Vector) -> Self {
        let mut x: Vec<usize> = (0..size).collect();
        let mut y: Vec<usize> = (0..size).collect();

        if vector.x == 1 {
            x.reverse();
        }
        if vector.y == 1 {
            y.reverse();
        }

        Self { x, y }
    }

    /// Cells in visiting order, columns outer and rows inner
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.x
            .iter()
            .flat_map(move |&x| self.y.iter().map(move |&y| Position::new(x, y)))
    }
}
