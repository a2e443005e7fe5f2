//! Grid snake: a deterministic game-state engine plus a terminal frontend.
//!
//! [`game::GameEngine`] owns the simulation. [`session::GameSession`] feeds it
//! queued player intents and rate-limits ticks through
//! [`scheduler::TickScheduler`]. Renderers only read [`game::GameSnapshot`].

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod snake;
pub mod speed;
pub mod store;
pub mod terminal_runtime;
pub mod ui;
