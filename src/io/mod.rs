//! Input/output around the game core
//!
//! This module contains:
//! - Collaborator adapters: storage, actuators and input sources
//! - The persisted state format
//! - Error types, constants and the command-line front end
//! - Board image export and simulation progress display

/// Terminal and headless rendering
pub mod actuator;
/// Command-line parsing and subcommand execution
pub mod cli;
/// Game constants and defaults
pub mod configuration;
/// Error type and context helpers
pub mod error;
/// PNG export of boards
pub mod image;
/// Keyboard, mouse and scripted input
pub mod input;
/// Progress bar for simulation runs
pub mod progress;
/// JSON shape of saved games
pub mod state;
/// Best-score and saved-game persistence
pub mod storage;
