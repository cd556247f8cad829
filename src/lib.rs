//! Tic-tac-toe with move history
//!
//! A two-player hotseat game on a 3x3 board:
//! - X moves first, marks alternate
//! - Three in a row, column or diagonal wins
//! - A full board without a line is a draw
//! - Any earlier move can be revisited; playing from there discards the
//!   moves that followed
//!
//! # Architecture
//!
//! - [`board`]: Board snapshot, marks and positions
//! - [`rules`]: Win and draw detection
//! - [`game`]: Game state, actions and the reducer that applies them
//! - [`ui`]: Pure view projection and the egui/eframe front end
//! - [`config`]: Window and logging settings
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Action, GameState, Pos};
//!
//! let state = GameState::new()
//!     .reduce(Action::Play(Pos::new(1, 1)))
//!     .reduce(Action::Play(Pos::new(0, 0)));
//!
//! assert_eq!(state.step(), 2);
//! assert!(state.x_is_next());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::AppConfig;
pub use error::{AppError, GameError};
pub use game::{Action, GameState, Status};
