pub mod cell;
pub mod color;
pub mod grid;
pub mod svg;

pub use cell::*;
pub use color::*;
pub use grid::*;
