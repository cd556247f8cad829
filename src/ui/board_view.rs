//! Board rendering for the tic-tac-toe GUI

use crate::board::{Pos, BOARD_SIZE, TOTAL_CELLS};
use egui::{CornerRadius, Painter, Rect, Response, Sense, Stroke, Vec2};

use super::theme::*;
use super::view::{CellView, Glyph};

/// Board view lays out the 3x3 grid and reports clicks
pub struct BoardView {
    /// Cached square size for layout
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, cells: &[CellView; TOTAL_CELLS]) -> Option<Pos> {
        let available = ui.available_size();
        let board_size = available
            .x
            .min(available.y - MOVES_RESERVED_HEIGHT)
            .clamp(3.0 * 40.0, BOARD_MAX_SIZE);
        self.cell_size = (board_size - 2.0 * BOARD_PADDING - 2.0 * SQUARE_GAP) / BOARD_SIZE as f32;

        let (rect, _) = ui.allocate_exact_size(Vec2::splat(board_size), Sense::hover());
        self.board_rect = rect;
        ui.painter().rect_filled(rect, CornerRadius::same(8), BOARD_BG);

        let mut clicked = None;
        for (idx, cell) in cells.iter().enumerate() {
            let pos = Pos::from_index(idx);
            let id = ui.id().with(("square", idx));
            let response = square(ui, self.square_rect(pos), id, cell);
            if response.clicked() {
                clicked = Some(pos);
            }
        }
        clicked
    }

    /// Area covered by the last rendered board
    pub fn rect(&self) -> Rect {
        self.board_rect
    }

    /// Screen rectangle of one square
    pub fn square_rect(&self, pos: Pos) -> Rect {
        let step = self.cell_size + SQUARE_GAP;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_PADDING + pos.col as f32 * step,
                BOARD_PADDING + pos.row as f32 * step,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}

/// A single clickable square. Knows nothing about the board it sits on.
pub fn square(ui: &mut egui::Ui, rect: Rect, id: egui::Id, cell: &CellView) -> Response {
    let response = ui.interact(rect, id, Sense::click());

    let fill = if cell.highlighted {
        SQUARE_HIGHLIGHT
    } else if cell.playable && response.hovered() {
        SQUARE_HOVER
    } else {
        SQUARE_BG
    };

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::same(SQUARE_CORNER), fill);
    if let Some(glyph) = cell.glyph {
        draw_glyph(&painter, rect, glyph);
    }

    response
}

/// Paint a cross or a ring centred in the square
fn draw_glyph(painter: &Painter, rect: Rect, glyph: Glyph) {
    let side = rect.width();
    let inset = side * GLYPH_INSET_RATIO;
    let stroke = Stroke::new(side * GLYPH_STROKE_RATIO, GLYPH);

    match glyph {
        Glyph::Cross => {
            let inner = rect.shrink(inset);
            painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
            painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
        }
        Glyph::Ring => {
            painter.circle_stroke(rect.center(), side * 0.5 - inset, stroke);
        }
    }
}
