//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - translucent red tint over the panel
pub const BOARD_BG: Color32 = Color32::from_rgba_premultiplied(68, 0, 0, 68);
pub const GRID_LINE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 136);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_white() -> Color32 {
    Color32::from_rgba_unmultiplied(240, 240, 240, 80)
}

pub fn hover_black() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const BUTTON_BG: Color32 = Color32::from_rgb(60, 100, 70);
pub const TOAST_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_PADDING: f32 = 20.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const WIN_LINE_WIDTH: f32 = 4.0;
pub const LAST_MOVE_MARKER_RATIO: f32 = 0.2;
pub const TOAST_SECONDS: f32 = 2.0;
