//! Batch play with a random legal-move policy
//!
//! Each game runs through a full [`GameManager`] with in-memory storage and a
//! headless actuator, so simulated games follow exactly the same rules as
//! interactive ones. Game `i` is seeded with `seed + i`, which makes a batch
//! reproducible and lets any single game be replayed on its own.

use log::debug;

use crate::game::engine;
use crate::game::manager::{GameConfig, GameManager, GameStatus};
use crate::io::actuator::HeadlessActuator;
use crate::io::configuration::{DEFAULT_MAX_MOVES, DEFAULT_SEED, DEFAULT_SIMULATION_GAMES};
use crate::io::error::{Result, invalid_parameter};
use crate::io::storage::StorageManager;
use crate::math::random::{RandomSource, SeededRandom};
use crate::spatial::{Direction, Grid};

/// Parameters of a simulation batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of games to play
    pub games: usize,
    /// Seed of the first game
    pub seed: u64,
    /// Move limit per game
    pub max_moves: usize,
    /// Board used by every game
    pub game: GameConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_SIMULATION_GAMES,
            seed: DEFAULT_SEED,
            max_moves: DEFAULT_MAX_MOVES,
            game: GameConfig::default(),
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    /// Position of the game in its batch
    pub index: usize,
    /// Seed the game was played with
    pub seed: u64,
    /// Final score
    pub score: u64,
    /// Moves that changed the board
    pub moves: usize,
    /// Highest tile on the final board
    pub highest_tile: u32,
    /// Whether the winning tile was reached
    pub won: bool,
    /// Whether the game ended with no moves left (rather than at the move limit)
    pub over: bool,
}

/// Aggregate results of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    /// Games played
    pub games: usize,
    /// Games that reached the winning tile
    pub wins: usize,
    /// Highest final score
    pub best_score: u64,
    /// Highest tile seen on any final board
    pub highest_tile: u32,
    /// Mean final score
    pub average_score: f64,
    /// Final board of the best-scoring game
    pub best_board: Option<Grid>,
}

/// Directions that would change the board
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| engine::can_move(grid, direction))
        .collect()
}

/// Pick a legal direction uniformly at random, `None` if the board is stuck
pub fn choose_random_move(grid: &Grid, random: &mut impl RandomSource) -> Option<Direction> {
    let moves = legal_moves(grid);
    if moves.is_empty() {
        return None;
    }

    moves.get(random.next_index(moves.len())).copied()
}

/// Play one game to the end or to `max_moves`, keeping going after a win
///
/// # Errors
///
/// Returns an error if the game configuration is invalid
pub fn play_random_game(
    config: GameConfig,
    index: usize,
    seed: u64,
    max_moves: usize,
) -> Result<(GameReport, Grid)> {
    let mut manager = GameManager::new(
        config,
        StorageManager::in_memory(),
        HeadlessActuator::new(),
        SeededRandom::new(seed),
    )?;
    let mut moves = 0;

    while moves < max_moves {
        match manager.status() {
            GameStatus::Over => break,
            GameStatus::Won => manager.keep_playing()?,
            GameStatus::Playing => {}
        }

        let board = manager.grid().clone();
        let Some(direction) = choose_random_move(&board, manager.random_mut()) else {
            break;
        };

        manager.move_tiles(direction)?;
        moves += 1;
    }

    let report = GameReport {
        index,
        seed,
        score: manager.score(),
        moves,
        highest_tile: manager.grid().max_tile_value().unwrap_or(0),
        won: manager.has_won(),
        over: manager.is_over(),
    };
    debug!(
        "Game {index} (seed {seed}): score {} after {moves} moves",
        report.score
    );

    Ok((report, manager.grid().clone()))
}

/// Play a batch of games, reporting each one to `on_game` as it finishes
///
/// # Errors
///
/// Returns an error if the batch is empty or the game configuration is invalid
pub fn simulate(
    config: &SimulationConfig,
    mut on_game: impl FnMut(&GameReport),
) -> Result<SimulationSummary> {
    if config.games == 0 {
        return Err(invalid_parameter(
            "games",
            &config.games,
            &"at least one game is required",
        ));
    }
    config.game.validate()?;

    let mut wins = 0;
    let mut total_score = 0;
    let mut best_score = 0;
    let mut highest_tile = 0;
    let mut best_board = None;

    for index in 0..config.games {
        let seed = config.seed.wrapping_add(index as u64);
        let (report, board) = play_random_game(config.game, index, seed, config.max_moves)?;

        if report.won {
            wins += 1;
        }
        total_score += report.score;
        highest_tile = highest_tile.max(report.highest_tile);
        if best_board.is_none() || report.score > best_score {
            best_score = report.score;
            best_board = Some(board);
        }

        on_game(&report);
    }

    Ok(SimulationSummary {
        games: config.games,
        wins,
        best_score,
        highest_tile,
        average_score: total_score as f64 / config.games as f64,
        best_board,
    })
}
