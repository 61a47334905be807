//! Input collaborators turning key presses, drags and scripts into game events

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::collections::VecDeque;

use crate::io::configuration::SWIPE_THRESHOLD;
use crate::io::error::{Result, WithTerminal};
use crate::spatial::Direction;

/// Semantic event delivered to the game manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Slide the board
    Move(Direction),
    /// Abandon the current game and start a fresh one
    Restart,
    /// Continue after reaching the winning tile
    KeepPlaying,
    /// Stop processing input
    Quit,
}

/// Pull-based stream of input events, consumed one event at a time
pub trait InputSource {
    /// Next event, or `None` once the source is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying device cannot be read
    fn next_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Events supplied up front, replayed in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    /// Queue `events` for replay
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Queue moves given in the integer encoding (0 = up, 1 = right, 2 = down, 3 = left)
    ///
    /// # Errors
    ///
    /// Returns an error on the first code outside `0..=3`
    pub fn from_moves(codes: impl IntoIterator<Item = u8>) -> Result<Self> {
        codes
            .into_iter()
            .map(|code| Direction::try_from(code).map(InputEvent::Move))
            .collect()
    }

    /// Events not yet delivered
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl FromIterator<InputEvent> for ScriptedInput {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}

/// Map a key press to a game event
///
/// Arrows, vim keys (`k l j h`) and `w d s a` move; `r` restarts; `c` keeps
/// playing after a win; `q`, `Esc` and `Ctrl-C` quit. Any other modified key
/// is ignored so terminal shortcuts pass through untouched.
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    if !key.modifiers.is_empty() {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(InputEvent::Move(Direction::Up)),
        KeyCode::Right => Some(InputEvent::Move(Direction::Right)),
        KeyCode::Down => Some(InputEvent::Move(Direction::Down)),
        KeyCode::Left => Some(InputEvent::Move(Direction::Left)),
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'k' | 'w' => Some(InputEvent::Move(Direction::Up)),
            'l' | 'd' => Some(InputEvent::Move(Direction::Right)),
            'j' | 's' => Some(InputEvent::Move(Direction::Down)),
            'h' | 'a' => Some(InputEvent::Move(Direction::Left)),
            'r' => Some(InputEvent::Restart),
            'c' => Some(InputEvent::KeepPlaying),
            'q' => Some(InputEvent::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Direction of a drag from its start to its end
///
/// The longer axis wins; drags no longer than `threshold` on either axis are
/// ignored.
pub fn swipe_direction(dx: i32, dy: i32, threshold: u32) -> Option<Direction> {
    let (abs_dx, abs_dy) = (dx.unsigned_abs(), dy.unsigned_abs());
    if abs_dx.max(abs_dy) <= threshold {
        return None;
    }

    Some(if abs_dx > abs_dy {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    })
}

/// Blocking terminal input: keys plus left-button mouse drags
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    drag_origin: Option<(u16, u16)>,
}

impl KeyboardInput {
    /// Create an input with no drag in progress
    pub fn new() -> Self {
        Self::default()
    }

    fn map_mouse(&mut self, mouse: &MouseEvent) -> Option<InputEvent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_origin = Some((mouse.column, mouse.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (column, row) = self.drag_origin.take()?;
                let dx = i32::from(mouse.column) - i32::from(column);
                let dy = i32::from(mouse.row) - i32::from(row);
                swipe_direction(dx, dy, u32::from(SWIPE_THRESHOLD)).map(InputEvent::Move)
            }
            _ => None,
        }
    }
}

impl InputSource for KeyboardInput {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        loop {
            let mapped = match event::read().with_terminal("read input")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => map_key(&key),
                Event::Mouse(mouse) => self.map_mouse(&mouse),
                _ => None,
            };

            if mapped.is_some() {
                return Ok(mapped);
            }
        }
    }
}
