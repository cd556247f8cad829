//! Error types

use thiserror::Error;

/// Malformed input reaching the game logic
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid square index: {0}")]
    InvalidSquare(usize),

    #[error("Invalid square ({row}, {col})")]
    InvalidPos { row: u8, col: u8 },

    #[error("Invalid history step {step} (history has {len} entries)")]
    InvalidStep { step: usize, len: usize },
}

/// Errors surfaced by the binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
