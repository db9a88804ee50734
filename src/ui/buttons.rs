use macroquad::prelude::*;

use crate::state::{EditorPhase, EditorState};

/// Which controls were clicked this frame
#[derive(Default)]
pub struct ControlClicks {
    pub save: bool,
    pub cancel: bool,
    pub clear: bool,
}

pub fn draw_button(text: &str, x: f32, y: f32, width: f32, height: f32, enabled: bool) -> bool {
    let color = if enabled { GRAY } else { LIGHTGRAY };
    let rect = Rect::new(x, y, width, height);
    draw_rectangle(x, y, width, height, color);
    draw_rectangle_lines(x, y, width, height, 2.0, BLACK);
    let text_size = measure_text(text, None, 20, 1.0);
    let text_x = x + (width - text_size.width) / 2.0;
    let text_y = y + (height + text_size.height) / 2.0;
    let text_color = if enabled { BLACK } else { DARKGRAY };
    draw_text(text, text_x, text_y, 20.0, text_color);
    enabled
        && is_mouse_button_pressed(MouseButton::Left)
        && rect.contains(Vec2::from(mouse_position()))
}

/// Save/Cancel/Clear row with the flow's status line. The save button is
/// disabled for an empty board and while a save is in flight; the last save
/// error stays visible until the next attempt.
pub fn render_controls(state: &EditorState) -> (ControlClicks, bool) {
    let mut clicks = ControlClicks::default();
    let row_y = 12.0;
    let saving = state.phase() == EditorPhase::Saving;

    let save_label = if saving { "Saving..." } else { "Save" };
    if draw_button(save_label, 24.0, row_y, 90.0, 30.0, state.can_save()) {
        clicks.save = true;
    }
    if draw_button("Cancel", 124.0, row_y, 90.0, 30.0, !saving) {
        clicks.cancel = true;
    }
    if draw_button("Clear", 224.0, row_y, 90.0, 30.0, true) {
        clicks.clear = true;
    }

    if let Some(message) = state.error() {
        draw_text(
            &format!("Save failed: {}", message),
            330.0,
            row_y + 21.0,
            18.0,
            Color::from_rgba(220, 38, 38, 255),
        );
    }

    let row_rect = Rect::new(24.0, row_y, 290.0, 30.0);
    let hot = row_rect.contains(Vec2::from(mouse_position()));
    (clicks, hot)
}
