//! Game constants and runtime configuration defaults

// Board rules
/// Cells per side of a standard board
pub const DEFAULT_GRID_SIZE: usize = 4;

// Restored boards larger than this are rejected as corrupt
/// Maximum accepted cells per side
pub const MAX_GRID_SIZE: usize = 16;

/// Tiles placed on a fresh board
pub const START_TILES: usize = 2;

/// Probability that a spawned tile is a 2 rather than a 4
pub const TWO_TILE_PROBABILITY: f64 = 0.9;

/// Tile value that wins the game
pub const WINNING_VALUE: u32 = 2048;

// Storage layout
/// Key holding the best score
pub const BEST_SCORE_KEY: &str = "bestScore";
/// Key holding the serialized game
pub const GAME_STATE_KEY: &str = "gameState";
/// Key written and removed to check that a store accepts writes
pub const STORAGE_PROBE_KEY: &str = "test";
/// Directory used by the file store when none is given
pub const DEFAULT_STATE_DIR: &str = ".twenty48";

// Input
/// Minimum drag distance in terminal cells that counts as a swipe
pub const SWIPE_THRESHOLD: u16 = 2;

// Terminal rendering
/// Width of one rendered cell in characters
pub const CELL_WIDTH: usize = 7;

/// Labels shown for tiles, indexed by merge level minus one (2 is index 0)
///
/// Values past the end of the table are shown as numbers.
pub const DEFAULT_TILE_LABELS: [&str; 11] = [
    "2", "4", "8", "16", "32", "64", "128", "256", "512", "1024", "2048",
];

/// RGBA colours for tiles, indexed by merge level minus one
pub const TILE_PALETTE: [[u8; 4]; 11] = [
    [238, 228, 218, 255],
    [237, 224, 200, 255],
    [242, 177, 121, 255],
    [245, 149, 99, 255],
    [246, 124, 95, 255],
    [246, 94, 59, 255],
    [237, 207, 114, 255],
    [237, 204, 97, 255],
    [237, 200, 80, 255],
    [237, 197, 63, 255],
    [237, 194, 46, 255],
];
/// Colour for tiles beyond the palette
pub const SUPER_TILE_COLOR: [u8; 4] = [60, 58, 50, 255];
/// Colour of an empty cell
pub const EMPTY_CELL_COLOR: [u8; 4] = [205, 193, 180, 255];
/// Colour behind the cells
pub const BOARD_BACKGROUND_COLOR: [u8; 4] = [187, 173, 160, 255];
/// Text colour on low tiles (2 and 4)
pub const DARK_TEXT_COLOR: [u8; 3] = [119, 110, 101];
/// Text colour on every other tile
pub const LIGHT_TEXT_COLOR: [u8; 3] = [249, 246, 242];

// Board snapshot export
/// Side length of one cell in the exported image
pub const SNAPSHOT_CELL_PIXELS: u32 = 64;
/// Gap between cells in the exported image
pub const SNAPSHOT_GAP_PIXELS: u32 = 8;

// Default values for configurable parameters
/// Fixed seed for reproducible simulations
pub const DEFAULT_SEED: u64 = 42;
/// Games played by a simulation run
pub const DEFAULT_SIMULATION_GAMES: usize = 100;
/// Move cap per simulated game
pub const DEFAULT_MAX_MOVES: usize = 10_000;
