//! Randomness utilities for the game

/// Seedable random sources
pub mod random;
