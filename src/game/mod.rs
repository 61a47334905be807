//! Game rules and lifecycle
//!
//! This module contains:
//! - The move engine: sliding, merging, spawning and termination checks
//! - The game manager that owns the board and drives its collaborators
//! - Batch simulation with a random legal-move policy

/// Sliding, merging and spawning on a grid
pub mod engine;
/// Game state machine and collaborator wiring
pub mod manager;
/// Seeded batch play for statistics and benchmarks
pub mod simulation;

pub use manager::{GameConfig, GameManager, GameStatus, MoveOutcome};
