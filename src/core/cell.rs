use macroquad::prelude::*;

use super::grid::GRID_DIM;

/// Screen-pixel edge length of one board cell
pub const CELL_PIXELS: f32 = 28.0;

/// Top-left corner of the board on screen
pub const BOARD_ORIGIN: Vec2 = Vec2::new(24.0, 56.0);

pub fn board_pixel_size() -> f32 {
    GRID_DIM as f32 * CELL_PIXELS
}

/// Map a screen position to `(row, col)`, or `None` outside the board
pub fn screen_to_cell(pos: Vec2) -> Option<(usize, usize)> {
    let local = pos - BOARD_ORIGIN;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let col = (local.x / CELL_PIXELS).floor() as usize;
    let row = (local.y / CELL_PIXELS).floor() as usize;
    if row >= GRID_DIM || col >= GRID_DIM {
        return None;
    }
    Some((row, col))
}

/// Screen position of a cell's top-left corner
pub fn cell_to_screen(row: usize, col: usize) -> Vec2 {
    BOARD_ORIGIN + Vec2::new(col as f32 * CELL_PIXELS, row as f32 * CELL_PIXELS)
}
