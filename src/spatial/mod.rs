//! Spatial data structures for the board
//!
//! This module contains:
//! - Tiles and cell positions
//! - The square grid and its spatial queries
//! - Move directions and traversal ordering

/// Directions, unit vectors and traversal ordering
pub mod direction;
/// Board storage and spatial queries
pub mod grid;
/// Tile and position types
pub mod tiles;

pub use direction::Direction;
pub use grid::Grid;
pub use tiles::{Position, Tile};
