mod config;
mod save;

use log::{info, warn};
use macroquad::prelude::*;

use crate::core::cell::{board_pixel_size, BOARD_ORIGIN};
use crate::core::svg;
use crate::input;
use crate::rendering::{self, PreviewPanel};
use crate::state::{EditorPhase, EditorState};
use crate::ui;

use config::AppConfig;
use save::{write_logo, SaveJob};

fn preview_origin() -> Vec2 {
    // Right of the palette panel
    Vec2::new(BOARD_ORIGIN.x + board_pixel_size() + 310.0, BOARD_ORIGIN.y + 16.0)
}

pub async fn run() {
    let config = AppConfig::from_env();
    info!(
        "logo constructor opened; saves go to {}",
        config.out_path.display()
    );

    let mut state = EditorState::new();
    let mut preview = PreviewPanel::new();
    let mut save_job: Option<SaveJob> = None;

    loop {
        clear_background(Color::from_rgba(243, 244, 246, 255));

        rendering::draw_board(&state.grid);
        preview.refresh(&svg::serialize(&state.grid));
        preview.draw(preview_origin());

        let (clicks, controls_hot) = ui::render_controls(&state);
        let palette_hot = ui::render_palette(&mut state);

        let save_hotkey = input::handle_input(&mut state, controls_hot || palette_hot);
        rendering::draw_hover_highlight(&state);

        if clicks.clear {
            state.clear();
        }
        if clicks.cancel {
            state.cancel();
        }
        if (clicks.save || save_hotkey) && save_job.is_none() {
            // The payload is frozen here; edits made while the save is in
            // flight do not reach it
            if let Some(payload) = state.begin_save() {
                info!("dispatching logo save ({} bytes)", payload.len());
                let path = config.out_path.clone();
                save_job = Some(SaveJob::dispatch(payload, move |markup| {
                    write_logo(&path, markup)
                }));
            }
        }

        if let Some(job) = &save_job {
            if let Some(outcome) = job.poll() {
                save_job = None;
                match &outcome {
                    Ok(()) => info!("logo saved"),
                    Err(message) => warn!("logo save failed: {}", message),
                }
                state.complete_save(outcome);
            }
        }

        match state.phase() {
            EditorPhase::Saved => {
                info!("session finished; logo handed to caller");
                break;
            }
            EditorPhase::Cancelled => {
                info!("session cancelled; grid discarded");
                break;
            }
            EditorPhase::Editing | EditorPhase::Saving => {}
        }

        next_frame().await
    }
}
