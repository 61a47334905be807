//! Rendering collaborators: terminal board display and a headless recorder

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};
use std::io::Write;

use crate::io::configuration::{
    CELL_WIDTH, DARK_TEXT_COLOR, DEFAULT_TILE_LABELS, EMPTY_CELL_COLOR, LIGHT_TEXT_COLOR,
    SUPER_TILE_COLOR, TILE_PALETTE,
};
use crate::io::error::{Result, WithTerminal};
use crate::spatial::{Direction, Grid, Position, Tile};

/// Game status shown alongside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metadata {
    /// Current score
    pub score: u64,
    /// Whether no moves remain
    pub over: bool,
    /// Whether a winning tile was reached
    pub won: bool,
    /// Best score recorded in storage
    pub best_score: u64,
    /// Whether moves are currently refused
    pub terminated: bool,
}

/// Rendering collaborator of the game manager
pub trait Actuator {
    /// Show the board after a state change
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    fn actuate(&mut self, grid: &Grid, metadata: &Metadata) -> Result<()>;

    /// Clear any win or game-over message (restart and keep playing)
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    fn continue_game(&mut self) -> Result<()>;

    /// Signal that a move in `direction` left the board unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    fn move_failed(&mut self, direction: Direction) -> Result<()>;
}

/// Actuator that keeps the last frame instead of drawing it
#[derive(Debug, Clone, Default)]
pub struct HeadlessActuator {
    /// Number of frames received
    pub frames: usize,
    /// Number of continue requests received
    pub continues: usize,
    /// Directions of moves that changed nothing, oldest first
    pub failed_moves: Vec<Direction>,
    /// Copy of the most recent board
    pub last_grid: Option<Grid>,
    /// Most recent status
    pub last_metadata: Option<Metadata>,
}

impl HeadlessActuator {
    /// Create a recorder with no frames
    pub fn new() -> Self {
        Self::default()
    }
}

impl Actuator for HeadlessActuator {
    fn actuate(&mut self, grid: &Grid, metadata: &Metadata) -> Result<()> {
        self.frames += 1;
        self.last_grid = Some(grid.clone());
        self.last_metadata = Some(*metadata);
        Ok(())
    }

    fn continue_game(&mut self) -> Result<()> {
        self.continues += 1;
        Ok(())
    }

    fn move_failed(&mut self, direction: Direction) -> Result<()> {
        self.failed_moves.push(direction);
        Ok(())
    }
}

/// Text shown on each tile, looked up by merge level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLabels {
    labels: Vec<String>,
}

impl Default for TileLabels {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_LABELS.iter().map(ToString::to_string).collect())
    }
}

impl TileLabels {
    /// Labels for levels 1, 2, 3, ... (tiles 2, 4, 8, ...)
    pub const fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Label for a tile value, or the number itself past the end of the table
    pub fn label(&self, value: u32) -> String {
        value
            .trailing_zeros()
            .checked_sub(1)
            .and_then(|index| self.labels.get(index as usize))
            .cloned()
            .unwrap_or_else(|| value.to_string())
    }
}

/// Raw-mode alternate screen with mouse capture, restored on drop
pub struct TerminalSession;

impl TerminalSession {
    /// Switch the terminal into game mode
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses raw mode or screen switching
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().with_terminal("enable raw mode")?;
        let mut stdout = std::io::stdout();
        stdout
            .execute(terminal::EnterAlternateScreen)
            .with_terminal("enter alternate screen")?;
        stdout.execute(cursor::Hide).with_terminal("hide cursor")?;
        stdout
            .execute(EnableMouseCapture)
            .with_terminal("enable mouse capture")?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = std::io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Actuator drawing the board with box characters and tile colours
pub struct TerminalActuator<W: Write> {
    out: W,
    labels: TileLabels,
    previous_score: u64,
    message_row: Option<u16>,
    status_row: Option<u16>,
}

impl<W: Write> TerminalActuator<W> {
    /// Draw to `out` using `labels` for tile text
    pub const fn new(out: W, labels: TileLabels) -> Self {
        Self {
            out,
            labels,
            previous_score: 0,
            message_row: None,
            status_row: None,
        }
    }

    /// Give back the output stream
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: impl std::fmt::Display) -> Result<()> {
        self.out
            .queue(style::Print(text))
            .with_terminal("queue output")?;
        Ok(())
    }

    fn draw_border(&mut self, size: usize, left: char, join: char, right: char) -> Result<()> {
        let segment = "─".repeat(CELL_WIDTH);
        let inner = vec![segment; size].join(&join.to_string());
        self.print(format!(" {left}{inner}{right}\r\n"))
    }

    fn draw_row(&mut self, grid: &Grid, y: usize) -> Result<()> {
        self.print(" │")?;
        for x in 0..grid.size() {
            match grid.cell_content(Position::new(x, y)) {
                Some(tile) => {
                    let text = center(&self.labels.label(tile.value), CELL_WIDTH);
                    let styled = text
                        .with(text_color(tile))
                        .on(rgb(tile_color(tile)))
                        .bold();
                    self.out
                        .queue(style::PrintStyledContent(styled))
                        .with_terminal("queue output")?;
                }
                None => {
                    let styled = " ".repeat(CELL_WIDTH).on(rgb(EMPTY_CELL_COLOR));
                    self.out
                        .queue(style::PrintStyledContent(styled))
                        .with_terminal("queue output")?;
                }
            }
            self.print("│")?;
        }
        self.print("\r\n")
    }
}

impl<W: Write> Actuator for TerminalActuator<W> {
    fn actuate(&mut self, grid: &Grid, metadata: &Metadata) -> Result<()> {
        self.out
            .queue(terminal::Clear(ClearType::All))
            .with_terminal("clear screen")?;
        self.out
            .queue(cursor::MoveTo(0, 0))
            .with_terminal("move cursor")?;

        let gained = metadata.score.saturating_sub(self.previous_score);
        self.previous_score = metadata.score;
        let addition = if gained > 0 {
            format!(" (+{gained})")
        } else {
            String::new()
        };
        let header = format!(
            " 2048 | Score: {}{addition} | Best: {}",
            metadata.score, metadata.best_score
        );
        self.print(format!("\r\n{}\r\n\r\n", header.bold()))?;

        let size = grid.size();
        self.draw_border(size, '┌', '┬', '┐')?;
        for y in 0..size {
            self.draw_row(grid, y)?;
            if y + 1 < size {
                self.draw_border(size, '├', '┼', '┤')?;
            }
        }
        self.draw_border(size, '└', '┴', '┘')?;

        // Three header lines, the board, then one blank line
        let message_row = u16::try_from(5 + size * 2).unwrap_or(u16::MAX);
        self.status_row = Some(message_row);
        self.print("\r\n")?;
        if metadata.terminated {
            let message = if metadata.over {
                " Game over!  r: try again  q: quit"
            } else {
                " You win!  c: keep going  r: new game  q: quit"
            };
            self.print(message.bold())?;
            self.message_row = Some(message_row);
        } else {
            self.message_row = None;
        }
        self.print("\r\n\r\n arrows / wasd / hjkl: move   r: restart   q: quit\r\n")?;

        self.out.flush().with_terminal("flush output")
    }

    fn continue_game(&mut self) -> Result<()> {
        if let Some(row) = self.message_row.take() {
            self.out
                .queue(cursor::MoveTo(0, row))
                .with_terminal("move cursor")?;
            self.out
                .queue(terminal::Clear(ClearType::CurrentLine))
                .with_terminal("clear message")?;
            self.out.flush().with_terminal("flush output")?;
        }
        Ok(())
    }

    // Uses the message line unless a win or game-over message occupies it;
    // the next frame redraws over the notice
    fn move_failed(&mut self, direction: Direction) -> Result<()> {
        let Some(row) = self.status_row.filter(|_| self.message_row.is_none()) else {
            return Ok(());
        };

        self.out
            .queue(cursor::MoveTo(0, row))
            .with_terminal("move cursor")?;
        self.out
            .queue(terminal::Clear(ClearType::CurrentLine))
            .with_terminal("clear message")?;
        self.print(format!(" Nothing moves {direction}").dim())?;
        self.out.flush().with_terminal("flush output")
    }
}

fn tile_color(tile: &Tile) -> [u8; 4] {
    (tile.level() as usize)
        .checked_sub(1)
        .and_then(|index| TILE_PALETTE.get(index))
        .copied()
        .unwrap_or(SUPER_TILE_COLOR)
}

fn text_color(tile: &Tile) -> Color {
    let [r, g, b] = if tile.value <= 4 {
        DARK_TEXT_COLOR
    } else {
        LIGHT_TEXT_COLOR
    };
    Color::Rgb { r, g, b }
}

const fn rgb(color: [u8; 4]) -> Color {
    let [r, g, b, _] = color;
    Color::Rgb { r, g, b }
}

fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}
