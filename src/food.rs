use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Cell used for food when the snake covers the whole board.
pub const FALLBACK_FOOD_CELL: Position = Position { x: 0, y: 0 };

/// Food currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random empty cell.
    ///
    /// Falls back to [`FALLBACK_FOOD_CELL`] when no empty cell exists.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        let position = spawn_position(rng, bounds, snake).unwrap_or(FALLBACK_FOOD_CELL);
        Self::at(position)
    }
}

/// Picks a free position that is not currently occupied by the snake.
///
/// Returns `None` when the snake fills the board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let side = i32::from(bounds.side());
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..side {
        for x in 0..side {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
