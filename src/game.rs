use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{
    BASE_SPEED_ADJUST_MS, EngineConfig, GridSize, MAX_BASE_SPEED_MS, MIN_BASE_SPEED_MS,
};
use crate::food::{FALLBACK_FOOD_CELL, Food};
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::snake::{Position, Snake};
use crate::speed::effective_speed_ms;
use crate::store::{KeyValueStore, MemoryStore, load_high_score, save_high_score};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
    /// The snake covers every cell; terminal like `GameOver`.
    Victory,
}

impl GameStatus {
    /// Returns true for states only `reset` can leave.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// Why the last run ended in `GameOver`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
}

/// What a single call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Not playing, or no heading chosen yet.
    Skipped,
    Moved,
    Ate,
    Collided(GameOverReason),
    BoardFilled,
}

/// Read-only copy of everything a renderer needs for one frame.
///
/// Serializes to JSON for renderers outside this process.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub grid_size: GridSize,
    pub direction: Option<Direction>,
    pub speed_ms: u64,
    pub base_speed_ms: u64,
    pub game_over_reason: Option<GameOverReason>,
}

/// Owns and mutates all simulation state for one board.
#[derive(Debug)]
pub struct GameEngine<S = MemoryStore> {
    pub(crate) snake: Snake,
    pub(crate) food: Food,
    pub(crate) direction: Option<Direction>,
    pub(crate) pending_direction: Option<Direction>,
    pub(crate) score: u32,
    high_score: u32,
    pub(crate) status: GameStatus,
    game_over_reason: Option<GameOverReason>,
    config: EngineConfig,
    effective_speed_ms: u64,
    rng: StdRng,
    store: S,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Creates an engine with entropy-seeded food placement.
    #[must_use]
    pub fn new(config: EngineConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: EngineConfig, store: S, seed: u64) -> Self {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, store: S, mut rng: StdRng) -> Self {
        let high_score = load_high_score(&store);
        let snake = Snake::new(center_of(config.grid_size));
        let food = Food::spawn(&mut rng, config.grid_size, &snake);

        debug!(
            grid = config.grid_size.side(),
            base_speed_ms = config.base_speed_ms,
            high_score,
            "engine created"
        );

        Self {
            snake,
            food,
            direction: None,
            pending_direction: None,
            score: 0,
            high_score,
            status: GameStatus::Idle,
            game_over_reason: None,
            effective_speed_ms: speed_for(&config, 0),
            config,
            rng,
            store,
        }
    }

    /// Starts a fresh run or resumes a paused one.
    ///
    /// Ignored while already playing or after the run has ended.
    pub fn start(&mut self) {
        match self.status {
            GameStatus::Idle | GameStatus::Paused => {
                if self.direction.is_none() {
                    self.direction = Some(self.pending_direction.unwrap_or(Direction::Right));
                }
                debug!(from = ?self.status, "playing");
                self.status = GameStatus::Playing;
            }
            GameStatus::Playing | GameStatus::GameOver | GameStatus::Victory => {}
        }
    }

    /// Freezes a run in progress.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            debug!(score = self.score, "paused");
            self.status = GameStatus::Paused;
        }
    }

    /// Returns to the idle board, keeping the high score and base speed.
    pub fn reset(&mut self) {
        self.snake = Snake::new(center_of(self.config.grid_size));
        self.food = Food::spawn(&mut self.rng, self.config.grid_size, &self.snake);
        self.direction = None;
        self.pending_direction = None;
        self.score = 0;
        self.game_over_reason = None;
        self.status = GameStatus::Idle;
        self.recompute_speed();
        debug!(food = ?self.food.position, "reset");
    }

    /// Requests a heading change for the next tick.
    ///
    /// Reversals of the committed direction are dropped. Directional input on
    /// an idle board starts the run.
    pub fn set_direction(&mut self, direction: Direction) {
        match self.status {
            GameStatus::Idle => {
                self.pending_direction = Some(direction);
                self.start();
            }
            GameStatus::Playing => {
                if direction_change_is_valid(self.direction, direction) {
                    self.pending_direction = Some(direction);
                }
            }
            GameStatus::Paused | GameStatus::GameOver | GameStatus::Victory => {}
        }
    }

    /// Sets the base tick interval and recomputes the effective one.
    pub fn set_base_speed(&mut self, base_speed_ms: u64) {
        self.config.base_speed_ms = base_speed_ms;
        self.recompute_speed();
        debug!(
            base_speed_ms,
            effective_speed_ms = self.effective_speed_ms,
            "base speed changed"
        );
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Skipped;
        }

        let Some(heading) = self.pending_direction.or(self.direction) else {
            return TickOutcome::Skipped;
        };

        let next_head = self.snake.head().stepped(heading);
        if !next_head.is_within_bounds(self.config.grid_size) {
            return self.collide(GameOverReason::WallCollision);
        }
        if self.snake.would_bite_itself(next_head) {
            return self.collide(GameOverReason::SelfCollision);
        }

        let ate = next_head == self.food.position;
        self.snake.advance(next_head, ate);
        self.direction = Some(heading);
        self.pending_direction = None;

        let outcome = if ate {
            self.score += 1;
            self.eat()
        } else {
            TickOutcome::Moved
        };

        self.recompute_speed();
        outcome
    }

    /// Dispatches one player intent to the matching command.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.set_direction(direction),
            GameInput::Start => self.start(),
            GameInput::Pause => self.pause(),
            GameInput::TogglePause => {
                if self.status == GameStatus::Playing {
                    self.pause();
                } else {
                    self.start();
                }
            }
            GameInput::Reset => self.reset(),
            GameInput::SetBaseSpeed(ms) => self.set_base_speed(ms),
            GameInput::SpeedUp => self.set_base_speed(
                self.config
                    .base_speed_ms
                    .saturating_sub(BASE_SPEED_ADJUST_MS)
                    .max(MIN_BASE_SPEED_MS),
            ),
            GameInput::SpeedDown => self.set_base_speed(
                (self.config.base_speed_ms + BASE_SPEED_ADJUST_MS).min(MAX_BASE_SPEED_MS),
            ),
            GameInput::Quit => {}
        }
    }

    /// Returns a detached copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food.position,
            score: self.score,
            high_score: self.high_score,
            status: self.status,
            grid_size: self.config.grid_size,
            direction: self.direction,
            speed_ms: self.effective_speed_ms,
            base_speed_ms: self.config.base_speed_ms,
            game_over_reason: self.game_over_reason,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn effective_speed_ms(&self) -> u64 {
        self.effective_speed_ms
    }

    #[must_use]
    pub fn base_speed_ms(&self) -> u64 {
        self.config.base_speed_ms
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.config.grid_size
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn eat(&mut self) -> TickOutcome {
        if self.snake.len() >= self.config.grid_size.total_cells() {
            self.food = Food::at(FALLBACK_FOOD_CELL);
            self.end_run(GameStatus::Victory);
            return TickOutcome::BoardFilled;
        }

        self.food = Food::spawn(&mut self.rng, self.config.grid_size, &self.snake);
        debug!(score = self.score, food = ?self.food.position, "food eaten");
        TickOutcome::Ate
    }

    fn collide(&mut self, reason: GameOverReason) -> TickOutcome {
        self.game_over_reason = Some(reason);
        self.end_run(GameStatus::GameOver);
        TickOutcome::Collided(reason)
    }

    fn end_run(&mut self, status: GameStatus) {
        self.status = status;

        let previous = self.high_score;
        self.high_score = previous.max(self.score);
        info!(
            ?status,
            reason = ?self.game_over_reason,
            score = self.score,
            high_score = self.high_score,
            "run ended"
        );

        if self.high_score > previous {
            save_high_score(&mut self.store, self.high_score);
        }
    }

    fn recompute_speed(&mut self) {
        self.effective_speed_ms = speed_for(&self.config, self.score);
    }
}

fn speed_for(config: &EngineConfig, score: u32) -> u64 {
    effective_speed_ms(
        config.base_speed_ms,
        score,
        config.speed_floor_ms,
        config.speed_step_ms,
    )
}

fn center_of(bounds: GridSize) -> Position {
    Position::new(bounds.center(), bounds.center())
}
