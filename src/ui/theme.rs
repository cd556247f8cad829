//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const SQUARE_BG: Color32 = Color32::from_rgb(236, 232, 222);
pub const SQUARE_HOVER: Color32 = Color32::from_rgb(220, 214, 200);
pub const SQUARE_HIGHLIGHT: Color32 = Color32::from_rgb(140, 220, 140);

// Glyphs
pub const GLYPH: Color32 = Color32::BLACK;

// End-of-game overlay
pub fn overlay_bg() -> Color32 {
    Color32::from_rgba_unmultiplied(25, 27, 31, 210)
}

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);

// Sizes
pub const BOARD_MAX_SIZE: f32 = 420.0;
pub const BOARD_PADDING: f32 = 8.0;
pub const SQUARE_GAP: f32 = 6.0;
pub const SQUARE_CORNER: u8 = 6;
/// Glyph inset from each square edge, as a fraction of the square side
pub const GLYPH_INSET_RATIO: f32 = 0.25;
pub const GLYPH_STROKE_RATIO: f32 = 0.05;
/// Room kept below the board for the move list
pub const MOVES_RESERVED_HEIGHT: f32 = 120.0;
