use std::collections::HashSet;
use std::time::{Duration, Instant};

use grid_snake::config::{EngineConfig, GridSize, HIGH_SCORE_KEY};
use grid_snake::game::{GameEngine, GameStatus, TickOutcome};
use grid_snake::input::{Direction, GameInput};
use grid_snake::session::GameSession;
use grid_snake::snake::Position;
use grid_snake::store::{KeyValueStore, MemoryStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn config(side: u16) -> EngineConfig {
    EngineConfig {
        grid_size: GridSize::square(side),
        ..EngineConfig::default()
    }
}

/// Steers a fresh engine straight to its first food and returns that cell.
fn eat_first_food(engine: &mut GameEngine) -> Position {
    let food = engine.food().position;
    let head = engine.snake().head();

    let horizontal = if food.x < head.x {
        Direction::Left
    } else {
        Direction::Right
    };
    let vertical = if food.y < head.y {
        Direction::Up
    } else {
        Direction::Down
    };

    if food.x == head.x {
        engine.set_direction(vertical);
    } else {
        engine.set_direction(horizontal);
    }
    assert_eq!(engine.status(), GameStatus::Playing);

    let mut ticks = 0;
    while engine.score() == 0 {
        if engine.snake().head().x == food.x {
            engine.set_direction(vertical);
        }
        assert_ne!(engine.tick(), TickOutcome::Skipped);
        ticks += 1;
        assert!(ticks <= 40, "food should be reached within the board");
    }

    food
}

#[test]
fn steering_to_food_scores_and_grows() {
    let mut engine = GameEngine::new_with_seed(config(20), MemoryStore::new(), 42);
    assert_eq!(engine.snake().head(), Position::new(10, 10));

    let food = eat_first_food(&mut engine);

    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.snake().head(), food);
    assert_eq!(engine.snake().len(), 2);
    assert_ne!(engine.food().position, food);
    assert!(!engine.snake().occupies(engine.food().position));
}

#[test]
fn random_play_preserves_invariants() {
    let mut engine = GameEngine::new_with_seed(config(8), MemoryStore::new(), 7);
    let mut rng = StdRng::seed_from_u64(99);
    let mut best_final_score = 0;
    let mut previous_high = engine.high_score();

    for _ in 0..5_000 {
        if engine.status().is_finished() {
            best_final_score = best_final_score.max(engine.score());
            assert_eq!(engine.high_score(), best_final_score);
            engine.reset();
            assert!(!engine.snake().occupies(engine.food().position));
        }

        engine.set_direction(DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())]);

        let before_len = engine.snake().len();
        let before_score = engine.score();
        let outcome = engine.tick();

        match outcome {
            TickOutcome::Ate | TickOutcome::BoardFilled => {
                assert_eq!(engine.snake().len(), before_len + 1);
                assert_eq!(engine.score(), before_score + 1);
            }
            TickOutcome::Moved => assert_eq!(engine.snake().len(), before_len),
            TickOutcome::Collided(_) => {
                assert_eq!(engine.snake().len(), before_len);
                assert_eq!(engine.status(), GameStatus::GameOver);
            }
            TickOutcome::Skipped => panic!("playing engine should always move"),
        }

        let unique: HashSet<Position> = engine.snake().segments().copied().collect();
        assert_eq!(unique.len(), engine.snake().len());
        if !engine.status().is_finished() {
            assert!(!engine.snake().occupies(engine.food().position));
        }

        let steps = u64::from(engine.score() / 5);
        let expected = 150u64.saturating_sub(steps * 10).max(70);
        assert_eq!(engine.effective_speed_ms(), expected);

        assert!(engine.high_score() >= previous_high);
        previous_high = engine.high_score();
    }
}

#[test]
fn high_score_survives_across_engines() {
    let mut engine = GameEngine::new_with_seed(config(20), MemoryStore::new(), 3);
    eat_first_food(&mut engine);
    while engine.status() == GameStatus::Playing {
        engine.tick();
    }
    let first_run = engine.score();
    assert!(first_run > 0);
    assert_eq!(engine.high_score(), first_run);

    let store = engine.store().clone();
    assert_eq!(
        store.get(HIGH_SCORE_KEY).expect("memory store read"),
        Some(first_run.to_string())
    );

    let reopened = GameEngine::new_with_seed(config(20), store, 4);
    assert_eq!(reopened.high_score(), first_run);
}

#[test]
fn session_paces_ticks_by_effective_speed() {
    let t0 = Instant::now();
    let engine = GameEngine::new_with_seed(config(20), MemoryStore::new(), 11);
    let mut session = GameSession::new(engine);

    session.submit(GameInput::SetBaseSpeed(100));
    session.submit(GameInput::Direction(Direction::Down));
    assert_eq!(session.step(t0), None);

    let mut now = t0;
    let mut ticks = 0;
    for _ in 0..50 {
        now += Duration::from_millis(10);
        if session.step(now).is_some() {
            ticks += 1;
        }
    }

    assert_eq!(ticks, 5);
    assert_eq!(session.snapshot().speed_ms, 100);
    assert_eq!(session.snapshot().status, GameStatus::Playing);
}
