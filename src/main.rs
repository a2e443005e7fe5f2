use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    DEFAULT_BASE_SPEED_MS, DEFAULT_GRID_SIZE, EngineConfig, FRAME_INTERVAL_MS, GridSize,
    MIN_GRID_SIZE,
};
use grid_snake::game::GameEngine;
use grid_snake::input::InputHandler;
use grid_snake::logging::init_file_logging;
use grid_snake::session::GameSession;
use grid_snake::store::{JsonFileStore, KeyValueStore, MemoryStore};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Cells per side of the square board.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_SIZE)..=100),
    )]
    grid_size: u16,

    /// Base tick interval in milliseconds.
    #[arg(
        long = "base-speed",
        default_value_t = DEFAULT_BASE_SPEED_MS,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    base_speed_ms: u64,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the high score in memory only.
    #[arg(long = "no-persist")]
    no_persist: bool,

    /// Store file to use instead of the platform data directory.
    #[arg(long = "scores-file", conflicts_with = "no_persist")]
    scores_file: Option<PathBuf>,

    /// Write tracing output to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    install_panic_hook();
    run(cli)
}

fn run(cli: Cli) -> io::Result<()> {
    let config = EngineConfig {
        grid_size: GridSize::square(cli.grid_size),
        base_speed_ms: cli.base_speed_ms,
        ..EngineConfig::default()
    };

    let store: Box<dyn KeyValueStore> = match (cli.no_persist, cli.scores_file) {
        (true, _) => Box::new(MemoryStore::new()),
        (false, Some(path)) => Box::new(JsonFileStore::new(path)),
        (false, None) => Box::new(JsonFileStore::open_default()),
    };

    let engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(config, store, seed),
        None => GameEngine::new(config, store),
    };
    info!(grid = cli.grid_size, seed = ?cli.seed, "starting");

    let mut session = GameSession::new(engine);
    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        terminal.draw(&session.snapshot())?;

        let now = Instant::now();
        let timeout = session
            .time_until_tick(now)
            .map_or(frame_interval, |due| due.min(frame_interval));

        if let Some(game_input) = input.poll_input(timeout)? {
            session.submit(game_input);
        }

        session.step(Instant::now());
        if session.quit_requested() {
            break;
        }
    }

    info!(high_score = session.engine().high_score(), "exiting");
    Ok(())
}
