use log::debug;
use macroquad::prelude::*;

use super::tools::handle_paint_gesture;
use crate::state::{EditorPhase, EditorState};

/// Central per-frame input dispatch: hotkeys plus board paint gestures.
/// Returns true when a save was requested from the keyboard.
pub fn handle_input(state: &mut EditorState, pointer_over_ui: bool) -> bool {
    let mut save_requested = false;

    match state.phase() {
        EditorPhase::Editing | EditorPhase::Saving => {
            if is_key_pressed(KeyCode::C) {
                debug!("clearing board via hotkey");
                state.clear();
            }
            if is_key_pressed(KeyCode::S) {
                save_requested = true;
            }
            if is_key_pressed(KeyCode::Escape) {
                state.cancel();
            }

            handle_paint_gesture(state, pointer_over_ui);
        }
        // Terminal phases: the session is over, input is ignored
        EditorPhase::Saved | EditorPhase::Cancelled => {}
    }

    save_requested
}
