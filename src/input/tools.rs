use macroquad::prelude::*;

use crate::core::cell::screen_to_cell;
use crate::state::EditorState;

/// Bresenham line algorithm - returns all grid cells between two points
fn bresenham(from: (usize, usize), to: (usize, usize)) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    let (mut x0, mut y0) = (from.0 as i32, from.1 as i32);
    let (x1, y1) = (to.0 as i32, to.1 as i32);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        cells.push((x0 as usize, y0 as usize));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    cells
}

/// Translate pointer input into grid mutations: press starts a stroke with
/// click-toggle semantics, holding interpolates unconditional paints, and
/// release ends the stroke wherever the pointer is.
pub fn handle_paint_gesture(state: &mut EditorState, pointer_over_ui: bool) {
    let mouse_pos = Vec2::from(mouse_position());
    let hovered = screen_to_cell(mouse_pos);

    if is_mouse_button_pressed(MouseButton::Left) && !pointer_over_ui {
        if let Some((row, col)) = hovered {
            state.begin_paint(row, col);
        }
    } else if is_mouse_button_down(MouseButton::Left) && state.is_drawing() {
        if let (Some(last), Some(current)) = (state.last_stroke_cell(), hovered) {
            if last != current {
                // Skip the stroke's previous cell: it was already handled,
                // and repainting it would undo a click-erase
                for (row, col) in bresenham(last, current).into_iter().skip(1) {
                    state.continue_paint(row, col);
                }
            }
        }
    }

    // Global release capture, even off the board, so the stroke flag
    // cannot stick
    if is_mouse_button_released(MouseButton::Left) {
        state.end_paint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bresenham_covers_a_horizontal_run() {
        assert_eq!(bresenham((2, 2), (2, 5)), vec![(2, 2), (2, 3), (2, 4), (2, 5)]);
    }

    #[test]
    fn bresenham_covers_a_diagonal_run() {
        assert_eq!(bresenham((0, 0), (3, 3)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn bresenham_runs_backwards() {
        assert_eq!(bresenham((1, 4), (1, 2)), vec![(1, 4), (1, 3), (1, 2)]);
    }

    #[test]
    fn bresenham_single_cell() {
        assert_eq!(bresenham((7, 7), (7, 7)), vec![(7, 7)]);
    }
}
