//! Game lifecycle: setup, moves, win and loss, restart
//!
//! [`GameManager`] owns the board and the game flags and talks to the outside
//! world only through its three collaborators. Every state change ends in
//! [`GameManager::actuate`], which updates the best score, persists or clears
//! the saved game and hands the board to the actuator for display.

use log::{debug, info, warn};
use std::ops::ControlFlow;

use crate::game::engine;
use crate::io::actuator::{Actuator, Metadata};
use crate::io::configuration::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, START_TILES, WINNING_VALUE};
use crate::io::error::{Result, invalid_parameter};
use crate::io::input::{InputEvent, InputSource};
use crate::io::state::SavedGame;
use crate::io::storage::Storage;
use crate::math::random::RandomSource;
use crate::spatial::{Direction, Grid, Position};

/// Board dimensions and opening layout for new games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Cells per side
    pub size: usize,
    /// Tiles spawned on a fresh board
    pub start_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            start_tiles: START_TILES,
        }
    }
}

impl GameConfig {
    /// Check the board can be built and seeded
    ///
    /// # Errors
    ///
    /// Returns an error if the size is outside `1..=MAX_GRID_SIZE` or more
    /// start tiles are requested than the board has cells
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between 1 and {MAX_GRID_SIZE}"),
            ));
        }
        if self.start_tiles > self.size * self.size {
            return Err(invalid_parameter(
                "start_tiles",
                &self.start_tiles,
                &"cannot exceed the number of cells",
            ));
        }
        Ok(())
    }
}

/// Result of a move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The board changed
    Moved {
        /// Points added by this move
        score_gained: u64,
        /// Value of every tile created by a merge
        merged_values: Vec<u32>,
        /// Cell of the tile spawned afterwards, if any cell was free
        spawned: Option<Position>,
        /// Whether this move produced the first winning tile of the game
        won_now: bool,
    },
    /// Nothing could slide that way; the game state is untouched
    Unchanged,
    /// Moves are refused until the player restarts or keeps playing
    Terminated,
}

/// Coarse phase of the game as seen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are accepted
    Playing,
    /// A winning tile exists and the player has not chosen to continue
    Won,
    /// No moves remain
    Over,
}

/// Owner of the board, score and status flags
pub struct GameManager<S: Storage, A: Actuator, R: RandomSource> {
    config: GameConfig,
    grid: Grid,
    score: u64,
    over: bool,
    won: bool,
    keep_playing: bool,
    storage: S,
    actuator: A,
    random: R,
}

impl<S: Storage, A: Actuator, R: RandomSource> GameManager<S, A, R> {
    /// Create a manager and run setup
    ///
    /// A saved game in `storage` is resumed when it passes validation;
    /// otherwise a fresh board is dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the first frame
    /// cannot be displayed
    pub fn new(config: GameConfig, storage: S, actuator: A, random: R) -> Result<Self> {
        config.validate()?;

        let mut manager = Self {
            config,
            grid: Grid::new(config.size),
            score: 0,
            over: false,
            won: false,
            keep_playing: false,
            storage,
            actuator,
            random,
        };
        manager.setup()?;
        Ok(manager)
    }

    fn setup(&mut self) -> Result<()> {
        let restored = self.storage.game_state().and_then(|saved| {
            Grid::from_saved(&saved.grid)
                .inspect_err(|error| warn!("Starting a new game: {error}"))
                .ok()
                .map(|grid| (grid, saved))
        });

        if let Some((grid, saved)) = restored {
            debug!("Resuming saved game with score {}", saved.score);
            self.grid = grid;
            self.score = saved.score;
            self.over = saved.over || !engine::moves_available(&self.grid);
            self.won = saved.won;
            self.keep_playing = saved.keep_playing;
        } else {
            self.grid = Grid::new(self.config.size);
            self.score = 0;
            self.over = false;
            self.won = false;
            self.keep_playing = false;
            self.add_start_tiles();
        }

        self.actuate()
    }

    fn add_start_tiles(&mut self) {
        for _ in 0..self.config.start_tiles {
            engine::add_random_tile(&mut self.grid, &mut self.random);
        }
    }

    /// Abandon the current game and deal a new one
    ///
    /// # Errors
    ///
    /// Returns an error if the actuator fails
    pub fn restart(&mut self) -> Result<()> {
        info!("Restarting game at score {}", self.score);
        self.storage.clear_game_state();
        self.actuator.continue_game()?;
        self.setup()
    }

    /// Let play continue past the winning tile
    ///
    /// # Errors
    ///
    /// Returns an error if the actuator fails
    pub fn keep_playing(&mut self) -> Result<()> {
        self.keep_playing = true;
        self.actuator.continue_game()?;
        if !self.over {
            self.storage.set_game_state(&self.serialize());
        }
        Ok(())
    }

    /// Whether moves are currently refused
    pub const fn is_game_terminated(&self) -> bool {
        self.over || (self.won && !self.keep_playing)
    }

    /// Slide the board, then spawn, score and check for the end of the game
    ///
    /// # Errors
    ///
    /// Returns an error if the actuator fails while showing the new board
    pub fn move_tiles(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if self.is_game_terminated() {
            return Ok(MoveOutcome::Terminated);
        }

        let slide = engine::slide(&mut self.grid, direction);
        if !slide.moved {
            debug!("Move {direction} changed nothing");
            return Ok(MoveOutcome::Unchanged);
        }

        self.score += slide.score_gained;

        let won_now = !self.won && slide.produced(WINNING_VALUE);
        if slide.produced(WINNING_VALUE) {
            self.won = true;
        }
        if won_now {
            info!("Reached {WINNING_VALUE} with score {}", self.score);
        }

        let spawned = engine::add_random_tile(&mut self.grid, &mut self.random);

        if !engine::moves_available(&self.grid) {
            self.over = true;
            info!("Game over with score {}", self.score);
        }

        debug!(
            "Moved {direction}: +{} (score {})",
            slide.score_gained, self.score
        );
        self.actuate()?;

        Ok(MoveOutcome::Moved {
            score_gained: slide.score_gained,
            merged_values: slide.merged_values,
            spawned,
            won_now,
        })
    }

    /// Record the best score, persist or clear the game and redraw
    ///
    /// # Errors
    ///
    /// Returns an error if the actuator fails
    pub fn actuate(&mut self) -> Result<()> {
        let mut best_score = self.storage.best_score();
        if self.score > best_score {
            best_score = self.score;
            self.storage.set_best_score(best_score);
        }

        if self.over {
            self.storage.clear_game_state();
        } else {
            self.storage.set_game_state(&self.serialize());
        }

        let metadata = Metadata {
            score: self.score,
            over: self.over,
            won: self.won,
            best_score,
            terminated: self.is_game_terminated(),
        };
        self.actuator.actuate(&self.grid, &metadata)
    }

    /// Apply one input event; `Break` means the player asked to quit
    ///
    /// # Errors
    ///
    /// Returns an error if the actuator fails
    pub fn handle(&mut self, event: InputEvent) -> Result<ControlFlow<()>> {
        match event {
            InputEvent::Move(direction) => {
                if self.move_tiles(direction)? == MoveOutcome::Unchanged {
                    self.actuator.move_failed(direction)?;
                }
            }
            InputEvent::Restart => self.restart()?,
            InputEvent::KeepPlaying => self.keep_playing()?,
            InputEvent::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Process events until the source runs dry or asks to quit
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or displaying the board fails
    pub fn run(&mut self, input: &mut impl InputSource) -> Result<()> {
        while let Some(event) = input.next_event()? {
            if self.handle(event)?.is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Persistable snapshot of the game
    pub fn serialize(&self) -> SavedGame {
        SavedGame {
            grid: self.grid.serialize(),
            score: self.score,
            over: self.over,
            won: self.won,
            keep_playing: self.keep_playing,
        }
    }

    /// Current board
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current score
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Whether no moves remain
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Whether a winning tile has been reached this game
    pub const fn has_won(&self) -> bool {
        self.won
    }

    /// Whether the player chose to continue after winning
    pub const fn is_keep_playing(&self) -> bool {
        self.keep_playing
    }

    /// Phase of the game
    pub const fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::Over
        } else if self.won && !self.keep_playing {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Configuration used for fresh boards
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Persistence collaborator
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Rendering collaborator
    pub const fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Random source shared by spawning and any caller-side policy
    pub const fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }
}
