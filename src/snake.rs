use std::collections::VecDeque;

use serde::Serialize;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        let side = i32::from(bounds.side());
        self.x >= 0 && self.y >= 0 && self.x < side && self.y < side
    }

    /// Returns the neighbouring cell one step along `direction`.
    ///
    /// The result may lie outside the grid; callers check bounds.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Moves the head to `next_head`, keeping the tail when `grow` is set.
    pub fn advance(&mut self, next_head: Position, grow: bool) {
        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true if moving the head to `next_head` would bite the body.
    ///
    /// The tail is excluded because it vacates its cell on the same tick.
    #[must_use]
    pub fn would_bite_itself(&self, next_head: Position) -> bool {
        let keep = self.body.len().saturating_sub(1);
        self.body.iter().take(keep).any(|segment| *segment == next_head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    #[cfg(test)]
    fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_covers_both_axes() {
        let bounds = GridSize::square(20);

        assert!(Position::new(0, 0).is_within_bounds(bounds));
        assert!(Position::new(19, 19).is_within_bounds(bounds));
        assert!(!Position::new(-1, 5).is_within_bounds(bounds));
        assert!(!Position::new(5, 20).is_within_bounds(bounds));
    }

    #[test]
    fn stepping_moves_one_cell() {
        let origin = Position::new(5, 5);

        assert_eq!(origin.stepped(Direction::Up), Position::new(5, 4));
        assert_eq!(origin.stepped(Direction::Down), Position::new(5, 6));
        assert_eq!(origin.stepped(Direction::Left), Position::new(4, 5));
        assert_eq!(origin.stepped(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn advancing_without_growth_keeps_length() {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)])
            .expect("segments are non-empty");

        snake.advance(Position::new(6, 5), false);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.tail(), Position::new(5, 5));
    }

    #[test]
    fn snake_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Position::new(6, 5), true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Position::new(5, 5));
    }

    #[test]
    fn empty_segment_list_is_rejected() {
        assert_eq!(Snake::from_segments(Vec::new()), None);
    }

    #[test]
    fn tail_cell_is_not_a_bite() {
        let snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 5),
        ])
        .expect("segments are non-empty");

        assert!(!snake.would_bite_itself(Position::new(6, 5)));
        assert!(snake.would_bite_itself(Position::new(5, 6)));
        assert!(!snake.would_bite_itself(Position::new(4, 5)));
    }
}
