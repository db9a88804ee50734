use macroquad::prelude::*;

use crate::core::cell::{board_pixel_size, BOARD_ORIGIN};
use crate::core::color::{PALETTE, PALETTE_COLS, PALETTE_ROWS};
use crate::state::EditorState;

const SWATCH_SIZE: f32 = 26.0;
const SWATCH_PADDING: f32 = 6.0;

fn panel_origin() -> Vec2 {
    Vec2::new(BOARD_ORIGIN.x + board_pixel_size() + 24.0, BOARD_ORIGIN.y)
}

/// Fixed 24-swatch palette panel with a current-color indicator.
/// Returns true while the pointer is over the panel.
pub fn render_palette(state: &mut EditorState) -> bool {
    let origin = panel_origin();
    let panel_width = PALETTE_COLS as f32 * (SWATCH_SIZE + SWATCH_PADDING) + SWATCH_PADDING;
    let indicator_size = 40.0;
    let swatch_start_y = origin.y + indicator_size + SWATCH_PADDING * 3.0 + 16.0;
    let panel_height = swatch_start_y - origin.y
        + PALETTE_ROWS as f32 * (SWATCH_SIZE + SWATCH_PADDING)
        + SWATCH_PADDING;

    let mouse_pos = Vec2::from(mouse_position());

    // Panel background
    draw_rectangle(origin.x, origin.y, panel_width, panel_height, Color::from_rgba(230, 230, 230, 255));
    draw_rectangle_lines(origin.x, origin.y, panel_width, panel_height, 2.0, BLACK);

    // Current color indicator
    draw_text("Current", origin.x + SWATCH_PADDING, origin.y + 16.0, 16.0, BLACK);
    draw_rectangle(
        origin.x + SWATCH_PADDING,
        origin.y + 20.0,
        indicator_size,
        indicator_size,
        state.selected_color.to_mq_color(),
    );
    draw_rectangle_lines(
        origin.x + SWATCH_PADDING,
        origin.y + 20.0,
        indicator_size,
        indicator_size,
        3.0,
        BLACK,
    );

    for (i, color) in PALETTE.iter().enumerate() {
        let col = i % PALETTE_COLS;
        let row = i / PALETTE_COLS;
        let x = origin.x + SWATCH_PADDING + col as f32 * (SWATCH_SIZE + SWATCH_PADDING);
        let y = swatch_start_y + row as f32 * (SWATCH_SIZE + SWATCH_PADDING);

        draw_rectangle(x, y, SWATCH_SIZE, SWATCH_SIZE, color.to_mq_color());

        // Highlight the selected swatch
        let selected = state.selected_color == *color;
        let border_width = if selected { 3.0 } else { 1.5 };
        let border_color = if selected {
            Color::from_rgba(255, 255, 0, 255)
        } else {
            BLACK
        };
        draw_rectangle_lines(x, y, SWATCH_SIZE, SWATCH_SIZE, border_width, border_color);

        let rect = Rect::new(x, y, SWATCH_SIZE, SWATCH_SIZE);
        if is_mouse_button_pressed(MouseButton::Left) && rect.contains(mouse_pos) {
            state.select_color(*color);
        }
    }

    Rect::new(origin.x, origin.y, panel_width, panel_height).contains(mouse_pos)
}
