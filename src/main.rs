//! Wumpus - Entry Point
//!
//! Sets up logging and configuration, then hands stdin/stdout to the shell.

use std::io;

use anyhow::Result;

use wumpus::data::GameConfig;
use wumpus::game::Game;
use wumpus::ui::Shell;

fn main() -> Result<()> {
    let config = GameConfig::load();
    let settings = config.as_ref().cloned().unwrap_or_default();

    // Log to a file so nothing interleaves with the game text
    let log_file = settings.open_log_file();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter.as_str())
    )
    .target(env_logger::Target::Pipe(log_file))
    .init();

    log::info!("Starting Wumpus v{}", env!("CARGO_PKG_VERSION"));
    if let Err(e) = &config {
        log::warn!("Using default settings: {}", e);
    }

    let game = match settings.seed {
        Some(seed) => {
            log::info!("Seeded session: {}", seed);
            Game::seeded(seed)
        }
        None => Game::new(),
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), game);
    let result = shell.run();

    if let Err(ref e) = result {
        log::error!("Session ended with error: {}", e);
    }

    log::info!("Wumpus shut down cleanly");
    result
}
