pub mod buttons;
pub mod palette;

pub use buttons::{render_controls, ControlClicks};
pub use palette::render_palette;
