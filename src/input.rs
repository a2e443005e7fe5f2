use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::Serialize;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` grid step for one cell of movement.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Player intents forwarded into the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Start,
    Pause,
    /// Pauses while playing, otherwise behaves like `Start`.
    TogglePause,
    Reset,
    SetBaseSpeed(u64),
    /// Shortens the base interval by one adjustment step.
    SpeedUp,
    /// Lengthens the base interval by one adjustment step.
    SpeedDown,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
///
/// With no committed direction yet every heading is legal.
#[must_use]
pub fn direction_change_is_valid(current: Option<Direction>, next: Direction) -> bool {
    current.is_none_or(|current| next != current.opposite())
}

/// Translates terminal key events into game intents.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a key press and maps it to an intent.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps one key press to an intent, if it is bound.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Enter => GameInput::Start,
        KeyCode::Char(' ' | 'p' | 'P') => GameInput::TogglePause,
        KeyCode::Char('r' | 'R') => GameInput::Reset,
        KeyCode::Char('+' | '=') => GameInput::SpeedUp,
        KeyCode::Char('-' | '_') => GameInput::SpeedDown,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Direction, GameInput, direction_change_is_valid, map_key};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Some(Direction::Up), Direction::Down));
        assert!(!direction_change_is_valid(
            Some(Direction::Left),
            Direction::Right
        ));

        assert!(direction_change_is_valid(Some(Direction::Up), Direction::Left));
        assert!(direction_change_is_valid(Some(Direction::Up), Direction::Up));
        assert!(direction_change_is_valid(None, Direction::Down));
    }

    #[test]
    fn arrows_and_wasd_steer() {
        let up = map_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        let left = map_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));

        assert_eq!(up, Some(GameInput::Direction(Direction::Up)));
        assert_eq!(left, Some(GameInput::Direction(Direction::Left)));
    }

    #[test]
    fn control_keys_map_to_commands() {
        let key = |code| map_key(KeyEvent::new(code, KeyModifiers::NONE));

        assert_eq!(key(KeyCode::Enter), Some(GameInput::Start));
        assert_eq!(key(KeyCode::Char(' ')), Some(GameInput::TogglePause));
        assert_eq!(key(KeyCode::Char('r')), Some(GameInput::Reset));
        assert_eq!(key(KeyCode::Char('+')), Some(GameInput::SpeedUp));
        assert_eq!(key(KeyCode::Char('-')), Some(GameInput::SpeedDown));
        assert_eq!(key(KeyCode::Esc), Some(GameInput::Quit));
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }
}
