//! Tic-tac-toe GUI
//!
//! Opens a single window and mounts the game into it.

use tictactoe::ui::TicTacToeApp;
use tictactoe::{AppConfig, AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), AppError> {
    let config = AppConfig::default();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    tracing::info!(app_id = %config.app_id, "Starting tic-tac-toe");

    eframe::run_native(
        &config.app_id,
        config.native_options(),
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )?;
    Ok(())
}
