//! The sliding-tile puzzle 2048 as a library, a terminal game and a simulator
//!
//! Numbered tiles on a square board slide in one of four directions; equal
//! tiles that collide merge into their sum, and a new tile appears after every
//! move that changes the board. The game is won by building a 2048 tile and
//! lost when no move can change the board.
//!
//! The rules live in [`game`] and only reach the outside world through three
//! collaborator traits: [`io::storage::Storage`], [`io::actuator::Actuator`]
//! and [`math::random::RandomSource`].

#![forbid(unsafe_code)]

/// Move engine, game manager and simulation
pub mod game;
/// Collaborator adapters, persistence format, errors and CLI
pub mod io;
/// Seedable randomness
pub mod math;
/// Tiles, positions, directions and the grid
pub mod spatial;

pub use game::{GameConfig, GameManager, GameStatus, MoveOutcome};
pub use io::error::{GameError, Result};
pub use spatial::{Direction, Grid, Position, Tile};
