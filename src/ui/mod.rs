//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod theme;
pub mod view;

pub use app::TicTacToeApp;
pub use view::{square_glyph, CellView, GameView, Glyph, MoveEntry};
