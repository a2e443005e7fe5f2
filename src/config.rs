use serde::Serialize;

/// Logical grid dimensions. The board is always square.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct GridSize {
    side: u16,
}

impl GridSize {
    /// Creates a square grid with `side` cells per axis.
    ///
    /// Sides below [`MIN_GRID_SIZE`] are raised to it, so a fresh board
    /// always has a free cell for food.
    #[must_use]
    pub fn square(side: u16) -> Self {
        Self {
            side: side.max(MIN_GRID_SIZE),
        }
    }

    /// Cells per axis.
    #[must_use]
    pub fn side(self) -> u16 {
        self.side
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.side) * usize::from(self.side)
    }

    /// Returns the center cell coordinate on each axis.
    #[must_use]
    pub fn center(self) -> i32 {
        i32::from(self.side / 2)
    }
}

/// Default board side length in cells.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest playable board side.
pub const MIN_GRID_SIZE: u16 = 2;

/// Default base tick interval in milliseconds.
pub const DEFAULT_BASE_SPEED_MS: u64 = 150;

/// Effective tick interval never drops below this.
pub const SPEED_FLOOR_MS: u64 = 70;

/// Interval reduction applied per speed step.
pub const SPEED_STEP_MS: u64 = 10;

/// Score needed per speed step.
pub const POINTS_PER_SPEED_STEP: u32 = 5;

/// Store key holding the persisted high score.
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// Base speed change applied by the speed up/down keys.
pub const BASE_SPEED_ADJUST_MS: u64 = 10;

/// Lower bound for base speed set from the keyboard.
pub const MIN_BASE_SPEED_MS: u64 = 70;

/// Upper bound for base speed set from the keyboard.
pub const MAX_BASE_SPEED_MS: u64 = 300;

/// Frame poll interval of the driving loop.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Tunables fixed for the lifetime of one engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EngineConfig {
    pub grid_size: GridSize,
    pub base_speed_ms: u64,
    pub speed_floor_ms: u64,
    pub speed_step_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::square(DEFAULT_GRID_SIZE),
            base_speed_ms: DEFAULT_BASE_SPEED_MS,
            speed_floor_ms: SPEED_FLOOR_MS,
            speed_step_ms: SPEED_STEP_MS,
        }
    }
}
