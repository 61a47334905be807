//! Command-line interface: interactive play and batch simulation

use clap::{Args, Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::game::manager::{GameConfig, GameManager};
use crate::game::simulation::{SimulationConfig, SimulationSummary, simulate};
use crate::io::actuator::{TerminalActuator, TerminalSession, TileLabels};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_MOVES, DEFAULT_SEED, DEFAULT_SIMULATION_GAMES,
    DEFAULT_STATE_DIR, SNAPSHOT_CELL_PIXELS, SNAPSHOT_GAP_PIXELS, START_TILES,
};
use crate::io::error::{Result, WithTerminal};
use crate::io::image::export_grid_as_png;
use crate::io::input::KeyboardInput;
use crate::io::progress::SimulationProgress;
use crate::io::storage::StorageManager;
use crate::math::random::SeededRandom;

#[derive(Parser)]
#[command(name = "twenty48")]
#[command(author, version, about = "Slide and merge numbered tiles to reach 2048")]
/// Command-line arguments
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),
    /// Play many games with random legal moves and report statistics
    Simulate(SimulateArgs),
}

/// Options for interactive play
#[derive(Args)]
pub struct PlayArgs {
    /// Directory holding the best score and the saved game
    #[arg(long, default_value = DEFAULT_STATE_DIR)]
    pub state_dir: PathBuf,

    /// Seed for tile spawning (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Keep the best score and saved game in memory only
    #[arg(short, long)]
    pub memory: bool,

    /// Cells per side of a new board
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Comma-separated tile labels for 2, 4, 8, ...
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,
}

impl PlayArgs {
    /// Storage selected by the options
    pub fn storage(&self) -> StorageManager {
        if self.memory {
            StorageManager::in_memory()
        } else {
            StorageManager::open(&self.state_dir)
        }
    }

    /// Tile labels selected by the options
    pub fn tile_labels(&self) -> TileLabels {
        self.labels
            .clone()
            .map_or_else(TileLabels::default, TileLabels::new)
    }
}

/// Options for batch simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games
    #[arg(short, long, default_value_t = DEFAULT_SIMULATION_GAMES)]
    pub games: usize,

    /// Seed of the first game; game `i` uses `seed + i`
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Move limit per game
    #[arg(long, default_value_t = DEFAULT_MAX_MOVES)]
    pub max_moves: usize,

    /// Cells per side
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Write the best final board to this PNG file
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl SimulateArgs {
    /// Simulation parameters selected by the options
    pub const fn config(&self) -> SimulationConfig {
        SimulationConfig {
            games: self.games,
            seed: self.seed,
            max_moves: self.max_moves,
            game: GameConfig {
                size: self.size,
                start_tiles: START_TILES,
            },
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Human-readable report of a simulation batch
pub fn format_summary(summary: &SimulationSummary) -> String {
    format!(
        "Games: {}\nWins: {} ({:.1}%)\nBest score: {}\nAverage score: {:.1}\nHighest tile: {}",
        summary.games,
        summary.wins,
        summary.wins as f64 * 100.0 / summary.games.max(1) as f64,
        summary.best_score,
        summary.average_score,
        summary.highest_tile,
    )
}

/// Executes the parsed command
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal, the game configuration or the
    /// snapshot export fails
    pub fn run(self) -> Result<()> {
        match self.cli.command {
            Command::Play(args) => Self::play(&args),
            Command::Simulate(args) => Self::simulate(&args),
        }
    }

    // Allow print for the closing score once the alternate screen is gone
    #[allow(clippy::print_stdout)]
    fn play(args: &PlayArgs) -> Result<()> {
        let config = GameConfig {
            size: args.size,
            start_tiles: START_TILES,
        };
        let random = args
            .seed
            .map_or_else(SeededRandom::from_entropy, SeededRandom::new);
        let storage = args.storage();
        info!(
            "Starting {}x{} game, persistent storage: {}",
            config.size,
            config.size,
            storage.is_persistent()
        );

        let score = {
            let session = TerminalSession::enter()?;
            let actuator = TerminalActuator::new(std::io::stdout(), args.tile_labels());
            let mut manager = GameManager::new(config, storage, actuator, random)?;
            manager.run(&mut KeyboardInput::new())?;
            drop(session);
            manager.score()
        };

        println!("Final score: {score}");
        std::io::stdout().flush().with_terminal("flush output")
    }

    // Allow print for the simulation report
    #[allow(clippy::print_stdout)]
    fn simulate(args: &SimulateArgs) -> Result<()> {
        let config = args.config();
        let mut progress = SimulationProgress::new(config.games, args.should_show_progress());

        let summary = simulate(&config, |report| progress.record(report))?;
        progress.finish();

        println!("{}", format_summary(&summary));

        if let (Some(path), Some(board)) = (&args.snapshot, &summary.best_board) {
            export_grid_as_png(board, path, SNAPSHOT_CELL_PIXELS, SNAPSHOT_GAP_PIXELS)?;
            println!("Best board written to {}", path.display());
        }

        Ok(())
    }
}
