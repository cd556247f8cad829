//! Pure projection of the game state into what the window shows
//!
//! Nothing in here touches egui; the app rebuilds a [`GameView`] every frame
//! and paints it.

use crate::board::{Mark, Pos, TOTAL_CELLS};
use crate::game::GameState;

/// Shape drawn inside a square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Cross,
    Ring,
}

/// X is drawn as a cross, O as a ring, empty cells stay blank
#[inline]
pub fn square_glyph(mark: Mark) -> Option<Glyph> {
    match mark {
        Mark::X => Some(Glyph::Cross),
        Mark::O => Some(Glyph::Ring),
        Mark::Empty => None,
    }
}

/// Display data for one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    pub glyph: Option<Glyph>,
    /// Part of the winning line
    pub highlighted: bool,
    /// A click here would place a mark
    pub playable: bool,
}

/// Entry in the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    pub step: usize,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub headline: String,
    pub cells: [CellView; TOTAL_CELLS],
    /// Set once the game is won or drawn; drives the end overlay
    pub end_message: Option<String>,
    /// One entry per move played, empty before the first move
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    pub fn from_state(state: &GameState) -> Self {
        let board = state.current();
        let win = state.win();
        let status = state.status();

        let mut cells = [CellView::default(); TOTAL_CELLS];
        for (idx, cell) in cells.iter_mut().enumerate() {
            let pos = Pos::from_index(idx);
            let mark = board.get(pos);
            *cell = CellView {
                glyph: square_glyph(mark),
                highlighted: win.is_some_and(|w| w.contains(pos)),
                playable: win.is_none() && mark.is_empty(),
            };
        }

        let moves = (1..state.history().len())
            .map(|step| MoveEntry {
                step,
                current: step == state.step(),
            })
            .collect();

        Self {
            headline: status.headline(),
            cells,
            end_message: status.is_over().then(|| status.to_string()),
            moves,
        }
    }

    #[inline]
    pub fn show_moves(&self) -> bool {
        !self.moves.is_empty()
    }
}
