use macroquad::prelude::*;

use crate::core::cell::{board_pixel_size, cell_to_screen, BOARD_ORIGIN, CELL_PIXELS};
use crate::core::grid::{LogoGrid, GRID_DIM};

// Light blue separators on a white board
fn grid_line_color() -> Color {
    Color::from_rgba(210, 225, 255, 255)
}

/// Draw the editing board: white backdrop, cell separators, painted cells.
/// Unpainted cells stay white here but are transparent in the exported logo.
pub fn draw_board(grid: &LogoGrid) {
    let size = board_pixel_size();

    draw_rectangle(BOARD_ORIGIN.x, BOARD_ORIGIN.y, size, size, WHITE);

    for i in 0..=GRID_DIM {
        let offset = i as f32 * CELL_PIXELS;
        draw_line(
            BOARD_ORIGIN.x + offset,
            BOARD_ORIGIN.y,
            BOARD_ORIGIN.x + offset,
            BOARD_ORIGIN.y + size,
            1.0,
            grid_line_color(),
        );
        draw_line(
            BOARD_ORIGIN.x,
            BOARD_ORIGIN.y + offset,
            BOARD_ORIGIN.x + size,
            BOARD_ORIGIN.y + offset,
            1.0,
            grid_line_color(),
        );
    }

    for (row, col, color) in grid.painted() {
        let pos = cell_to_screen(row, col);
        draw_rectangle(pos.x, pos.y, CELL_PIXELS, CELL_PIXELS, color.to_mq_color());
    }

    draw_rectangle_lines(BOARD_ORIGIN.x, BOARD_ORIGIN.y, size, size, 2.0, BLACK);
}
