use super::color::Rgba;

/// Logo boards are always 16x16; consumers of the serialized form rely on it
pub const GRID_DIM: usize = 16;

/// The canonical drawing state: a fixed 16x16 matrix of optional colors.
/// `None` is unpainted (transparent by omission in the serialized form).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoGrid {
    cells: [[Option<Rgba>; GRID_DIM]; GRID_DIM],
}

impl LogoGrid {
    pub fn new() -> Self {
        LogoGrid {
            cells: [[None; GRID_DIM]; GRID_DIM],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Rgba> {
        if row >= GRID_DIM || col >= GRID_DIM {
            return None;
        }
        self.cells[row][col]
    }

    /// Single-click semantics: erase when the cell already holds `color`,
    /// paint it otherwise.
    pub fn toggle(&mut self, row: usize, col: usize, color: Rgba) {
        if row >= GRID_DIM || col >= GRID_DIM {
            return;
        }
        let cell = &mut self.cells[row][col];
        *cell = if *cell == Some(color) { None } else { Some(color) };
    }

    /// Drag semantics: unconditional paint, never erases.
    pub fn paint(&mut self, row: usize, col: usize, color: Rgba) {
        if row >= GRID_DIM || col >= GRID_DIM {
            return;
        }
        self.cells[row][col] = Some(color);
    }

    pub fn clear(&mut self) {
        self.cells = [[None; GRID_DIM]; GRID_DIM];
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_none())
    }

    /// Painted cells as `(row, col, color)` in row-major order
    pub fn painted(&self) -> impl Iterator<Item = (usize, usize, Rgba)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|color| (row, col, color)))
        })
    }
}
