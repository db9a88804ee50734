pub mod board;
pub mod cursor;
pub mod preview;

pub use board::draw_board;
pub use cursor::draw_hover_highlight;
pub use preview::PreviewPanel;
