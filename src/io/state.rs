//! Persisted game state in its JSON wire shape
//!
//! ```json
//! { "grid": { "size": 4, "cells": [[{"position": {"x": 0, "y": 0}, "value": 2}, null, ...], ...] },
//!   "score": 0, "over": false, "won": false, "keepPlaying": false }
//! ```
//!
//! `cells` is indexed `[x][y]`. These types only describe the shape; checking
//! that a snapshot is a playable board is left to `Grid::from_saved`.

use serde::{Deserialize, Serialize};

use crate::io::error::{GameError, Result};
use crate::spatial::tiles::Position;

/// A tile without move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTile {
    /// Cell the tile occupies
    pub position: Position,
    /// Face value
    pub value: u32,
}

/// A board as size plus `[x][y]` matrix of optional tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGrid {
    /// Cells per side
    pub size: usize,
    /// Column-major cell contents
    pub cells: Vec<Vec<Option<SavedTile>>>,
}

/// Everything needed to resume a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    /// Board contents
    pub grid: SavedGrid,
    /// Score so far
    pub score: u64,
    /// Whether no moves remain
    pub over: bool,
    /// Whether a winning tile was reached
    pub won: bool,
    /// Whether the player chose to continue after winning
    pub keep_playing: bool,
}

impl SavedGame {
    /// Encode as JSON
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Serialization`] if encoding fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| GameError::Serialization {
            operation: "encode",
            source,
        })
    }

    /// Decode from JSON
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Serialization`] if the text is not a game state
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| GameError::Serialization {
            operation: "decode",
            source,
        })
    }
}
