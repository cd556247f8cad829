//! Game rules for tic-tac-toe
//!
//! Win condition: three identical marks on one of the 8 fixed lines.
//! Draw: board full with no completed line.

pub mod win;

// Re-exports for convenient access
pub use win::{find_win, is_draw, Win, WINNING_LINES};
