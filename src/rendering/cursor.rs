use macroquad::prelude::*;

use crate::core::cell::{cell_to_screen, screen_to_cell, CELL_PIXELS};
use crate::state::{EditorPhase, EditorState};

/// Outline the cell under the pointer. A red outline warns that a click
/// would erase (the cell already holds the selected color).
pub fn draw_hover_highlight(state: &EditorState) {
    match state.phase() {
        EditorPhase::Editing | EditorPhase::Saving => {}
        EditorPhase::Saved | EditorPhase::Cancelled => return,
    }

    let Some((row, col)) = screen_to_cell(Vec2::from(mouse_position())) else {
        return;
    };

    let pos = cell_to_screen(row, col);
    let would_erase = state.grid.get(row, col) == Some(state.selected_color);
    let outline = if would_erase {
        Color::from_rgba(255, 100, 100, 200)
    } else {
        Color::from_rgba(0, 0, 0, 150)
    };
    draw_rectangle_lines(pos.x, pos.y, CELL_PIXELS, CELL_PIXELS, 2.0, outline);
}
