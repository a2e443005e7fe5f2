use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::game::{GameEngine, GameSnapshot, GameStatus, TickOutcome};
use crate::input::GameInput;
use crate::scheduler::TickScheduler;
use crate::store::KeyValueStore;

/// Drives one engine: queued intents first, then at most one tick per step.
///
/// Input sources only enqueue; every mutation happens inside [`step`],
/// so direction changes and ticks never interleave.
///
/// [`step`]: GameSession::step
#[derive(Debug)]
pub struct GameSession<S> {
    engine: GameEngine<S>,
    scheduler: TickScheduler,
    inbox: VecDeque<GameInput>,
    quit_requested: bool,
}

impl<S: KeyValueStore> GameSession<S> {
    #[must_use]
    pub fn new(engine: GameEngine<S>) -> Self {
        let scheduler = TickScheduler::new(Duration::from_millis(engine.effective_speed_ms()));
        Self {
            engine,
            scheduler,
            inbox: VecDeque::new(),
            quit_requested: false,
        }
    }

    /// Queues an intent for the next step.
    pub fn submit(&mut self, input: GameInput) {
        self.inbox.push_back(input);
    }

    /// Applies queued intents, then ticks if the interval has elapsed.
    pub fn step(&mut self, now: Instant) -> Option<TickOutcome> {
        while let Some(input) = self.inbox.pop_front() {
            if input == GameInput::Quit {
                debug!("quit requested");
                self.quit_requested = true;
                continue;
            }

            let previous = self.engine.status();
            self.engine.apply_input(input);
            self.sync_schedule(previous, now);
        }

        self.scheduler.set_interval(self.current_interval());
        if !self.scheduler.poll(now) {
            return None;
        }

        let previous = self.engine.status();
        let outcome = self.engine.tick();
        trace!(?outcome, score = self.engine.score(), "tick");
        self.sync_schedule(previous, now);
        self.scheduler.set_interval(self.current_interval());

        Some(outcome)
    }

    /// Time until the next tick is due, if one is scheduled.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    fn current_interval(&self) -> Duration {
        Duration::from_millis(self.engine.effective_speed_ms())
    }

    fn sync_schedule(&mut self, previous: GameStatus, now: Instant) {
        match (previous, self.engine.status()) {
            (GameStatus::Playing, GameStatus::Playing) => {}
            (_, GameStatus::Playing) => self.scheduler.arm(now),
            (_, _) => self.scheduler.cancel(),
        }
    }
}
