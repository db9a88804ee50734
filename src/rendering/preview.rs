use macroquad::prelude::*;

use crate::core::grid::GRID_DIM;
use crate::core::svg::{self, PaintedRect};

/// Display scales for the small / medium / large previews, in screen pixels
/// per logo unit
pub const PREVIEW_SCALES: [f32; 3] = [2.0, 4.0, 8.0];

/// Renders the serialized logo markup at the three preview sizes. Holds no
/// grid state: the input is the serialized string, re-parsed only when it
/// changes.
pub struct PreviewPanel {
    markup: String,
    rects: Vec<PaintedRect>,
}

impl PreviewPanel {
    pub fn new() -> Self {
        PreviewPanel {
            markup: String::new(),
            rects: Vec::new(),
        }
    }

    /// Adopt the latest serialized markup, re-parsing on change
    pub fn refresh(&mut self, markup: &str) {
        if self.markup != markup {
            self.markup = markup.to_string();
            self.rects = svg::parse(markup);
        }
    }

    pub fn rects(&self) -> &[PaintedRect] {
        &self.rects
    }

    /// Draw the three previews stacked below `origin`
    pub fn draw(&self, origin: Vec2) {
        draw_text("Preview", origin.x, origin.y - 8.0, 18.0, BLACK);

        let mut y = origin.y;
        for scale in PREVIEW_SCALES {
            let size = GRID_DIM as f32 * scale;
            draw_rectangle(origin.x, y, size, size, WHITE);
            for rect in self.rects() {
                draw_rectangle(
                    origin.x + rect.col as f32 * scale,
                    y + rect.row as f32 * scale,
                    scale,
                    scale,
                    rect.color.to_mq_color(),
                );
            }
            draw_rectangle_lines(origin.x, y, size, size, 1.0, DARKGRAY);
            y += size + 16.0;
        }
    }
}
