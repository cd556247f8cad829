//! Board snapshot

use super::{Mark, Pos, TOTAL_CELLS};

/// One immutable snapshot of the 9 cells.
///
/// Snapshots stored in the game history are never edited in place; a move
/// produces a new board through [`Board::with_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from row-major cells
    pub fn from_cells(cells: [Mark; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Copy of this board with one more cell filled
    #[inline]
    pub fn with_mark(&self, pos: Pos, mark: Mark) -> Board {
        debug_assert!(self.is_empty(pos), "cell {} already filled", pos.to_index());
        let mut next = *self;
        next.cells[pos.to_index()] = mark;
        next
    }

    /// Row-major view of all cells
    #[inline]
    pub fn cells(&self) -> &[Mark; TOTAL_CELLS] {
        &self.cells
    }

    /// Number of filled cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Every cell is filled
    #[inline]
    pub fn is_full(&self) -> bool {
        self.mark_count() == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.mark_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
