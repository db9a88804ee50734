//! Editor State Module
//!
//! Holds the whole state of one logo-constructor session: the canonical
//! 16x16 grid, the active palette color, the pointer drawing flag, and the
//! save/cancel flow phase. All mutations are synchronous; the serializer and
//! renderers see them on their next read.

use crate::core::color::{default_color, Rgba};
use crate::core::grid::LogoGrid;
use crate::core::svg;

/// Save/cancel flow phase. `Saved` and `Cancelled` are terminal: a finished
/// session is discarded, never resumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorPhase {
    Editing,
    Saving,
    Saved,
    Cancelled,
}

pub struct EditorState {
    /// The currently selected palette color
    pub selected_color: Rgba,
    /// The canonical drawing state
    pub grid: LogoGrid,
    /// True while a pointer-down-drag stroke is active
    drawing: bool,
    /// Last cell the active stroke touched, for stroke interpolation
    last_stroke_cell: Option<(usize, usize)>,
    phase: EditorPhase,
    error: Option<String>,
}

impl EditorState {
    pub fn new() -> Self {
        EditorState {
            selected_color: default_color(),
            grid: LogoGrid::new(),
            drawing: false,
            last_stroke_cell: None,
            phase: EditorPhase::Editing,
            error: None,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn last_stroke_cell(&self) -> Option<(usize, usize)> {
        self.last_stroke_cell
    }

    fn closed(&self) -> bool {
        match self.phase {
            EditorPhase::Saved | EditorPhase::Cancelled => true,
            EditorPhase::Editing | EditorPhase::Saving => false,
        }
    }

    /// Last-write-wins; any color value is accepted
    pub fn select_color(&mut self, color: Rgba) {
        self.selected_color = color;
    }

    /// Single-click: toggle the cell against the selected color
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.closed() {
            return;
        }
        self.grid.toggle(row, col, self.selected_color);
    }

    /// Pointer-down over a cell: start a stroke, then toggle like a click
    pub fn begin_paint(&mut self, row: usize, col: usize) {
        if self.closed() {
            return;
        }
        self.drawing = true;
        self.last_stroke_cell = Some((row, col));
        self.toggle_cell(row, col);
    }

    /// Pointer-enter while a stroke is active: unconditional paint. A drag
    /// always paints, never erases; without an active stroke this is inert.
    pub fn continue_paint(&mut self, row: usize, col: usize) {
        if !self.drawing || self.closed() {
            return;
        }
        self.grid.paint(row, col, self.selected_color);
        self.last_stroke_cell = Some((row, col));
    }

    /// Pointer-up anywhere, including outside the board; the stroke flag
    /// must never stick
    pub fn end_paint(&mut self) {
        self.drawing = false;
        self.last_stroke_cell = None;
    }

    pub fn clear(&mut self) {
        if self.closed() {
            return;
        }
        self.grid.clear();
    }

    /// The save control is enabled only for a non-empty grid in `Editing`;
    /// an all-empty board is not submittable, and at most one save may be
    /// outstanding
    pub fn can_save(&self) -> bool {
        self.phase == EditorPhase::Editing && !self.grid.is_empty()
    }

    /// Serialize the grid and enter `Saving`. The returned string is the
    /// in-flight payload, fixed at this instant; later grid edits do not
    /// alter it. Returns `None` when the guard refuses.
    pub fn begin_save(&mut self) -> Option<String> {
        if !self.can_save() {
            return None;
        }
        self.phase = EditorPhase::Saving;
        self.error = None;
        Some(svg::serialize(&self.grid))
    }

    /// Apply the external collaborator's outcome. Failure returns to
    /// `Editing` with the message surfaced and the grid preserved.
    pub fn complete_save(&mut self, outcome: Result<(), String>) {
        match self.phase {
            EditorPhase::Saving => match outcome {
                Ok(()) => self.phase = EditorPhase::Saved,
                Err(message) => {
                    self.phase = EditorPhase::Editing;
                    self.error = Some(message);
                }
            },
            // No save in flight; nothing to apply
            EditorPhase::Editing | EditorPhase::Saved | EditorPhase::Cancelled => {}
        }
    }

    /// Discard the session. Only an `Editing` session can cancel; a
    /// dispatched save runs to its outcome.
    pub fn cancel(&mut self) {
        if self.phase == EditorPhase::Editing {
            self.phase = EditorPhase::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::PALETTE;
    use crate::core::svg;

    #[test]
    fn click_toggle_paints_then_erases() {
        let blue = Rgba::from_hex("#3b82f6").unwrap();
        let mut state = EditorState::new();
        state.select_color(blue);
        state.toggle_cell(0, 0);
        assert_eq!(state.grid.get(0, 0), Some(blue));
        state.toggle_cell(0, 0);
        assert_eq!(state.grid.get(0, 0), None);
    }

    #[test]
    fn drag_paints_every_entered_cell_until_release() {
        let mut state = EditorState::new();
        let color = state.selected_color;
        state.begin_paint(2, 2);
        state.continue_paint(2, 3);
        state.continue_paint(2, 4);
        state.end_paint();
        assert_eq!(state.grid.get(2, 2), Some(color));
        assert_eq!(state.grid.get(2, 3), Some(color));
        assert_eq!(state.grid.get(2, 4), Some(color));
        // Stroke is over; enter events no longer mutate
        state.continue_paint(2, 5);
        assert_eq!(state.grid.get(2, 5), None);
    }

    #[test]
    fn continue_paint_never_erases_a_matching_cell() {
        let mut state = EditorState::new();
        state.begin_paint(5, 5);
        assert_eq!(state.grid.get(5, 5), Some(state.selected_color));
        state.continue_paint(5, 5);
        assert_eq!(state.grid.get(5, 5), Some(state.selected_color));
    }

    #[test]
    fn end_paint_is_safe_without_a_stroke() {
        let mut state = EditorState::new();
        state.end_paint();
        assert!(!state.is_drawing());
    }

    #[test]
    fn empty_grid_cannot_save() {
        let mut state = EditorState::new();
        assert!(!state.can_save());
        assert_eq!(state.begin_save(), None);
        assert_eq!(state.phase(), EditorPhase::Editing);
    }

    #[test]
    fn painted_grid_saves_and_payload_ignores_later_edits() {
        let mut state = EditorState::new();
        state.toggle_cell(0, 0);
        assert!(state.can_save());
        let payload = state.begin_save().unwrap();
        assert_eq!(state.phase(), EditorPhase::Saving);
        // Edits after dispatch do not reach the in-flight payload
        state.toggle_cell(1, 1);
        assert_eq!(payload, {
            let mut grid = LogoGrid::new();
            grid.paint(0, 0, state.selected_color);
            svg::serialize(&grid)
        });
    }

    #[test]
    fn at_most_one_save_in_flight() {
        let mut state = EditorState::new();
        state.toggle_cell(0, 0);
        assert!(state.begin_save().is_some());
        assert!(!state.can_save());
        assert_eq!(state.begin_save(), None);
    }

    #[test]
    fn failed_save_returns_to_editing_with_grid_and_message_intact() {
        let mut state = EditorState::new();
        state.toggle_cell(3, 7);
        let before = state.grid.clone();
        state.begin_save().unwrap();
        state.complete_save(Err("network".to_string()));
        assert_eq!(state.phase(), EditorPhase::Editing);
        assert_eq!(state.error(), Some("network"));
        assert_eq!(state.grid, before);
    }

    #[test]
    fn retried_save_clears_the_previous_error() {
        let mut state = EditorState::new();
        state.toggle_cell(0, 0);
        state.begin_save().unwrap();
        state.complete_save(Err("network".to_string()));
        state.begin_save().unwrap();
        assert_eq!(state.error(), None);
        state.complete_save(Ok(()));
        assert_eq!(state.phase(), EditorPhase::Saved);
    }

    #[test]
    fn cancel_only_applies_while_editing() {
        let mut state = EditorState::new();
        state.toggle_cell(0, 0);
        state.begin_save().unwrap();
        state.cancel();
        assert_eq!(state.phase(), EditorPhase::Saving);
        state.complete_save(Ok(()));
        state.cancel();
        assert_eq!(state.phase(), EditorPhase::Saved);
    }

    #[test]
    fn terminal_phases_refuse_further_mutation() {
        let mut state = EditorState::new();
        state.cancel();
        assert_eq!(state.phase(), EditorPhase::Cancelled);
        state.toggle_cell(0, 0);
        state.begin_paint(1, 1);
        state.clear();
        assert!(state.grid.is_empty());
        assert_eq!(state.begin_save(), None);
    }

    #[test]
    fn selecting_another_color_changes_later_writes_only() {
        let mut state = EditorState::new();
        let first = state.selected_color;
        state.toggle_cell(0, 0);
        state.select_color(PALETTE[4]);
        state.toggle_cell(0, 1);
        assert_eq!(state.grid.get(0, 0), Some(first));
        assert_eq!(state.grid.get(0, 1), Some(PALETTE[4]));
    }
}
