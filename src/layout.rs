use crate::Grid;

/// The square region of the viewport the board occupies, in pixels.
///
/// Everything the renderer and the pointer handler need comes from here:
/// where the square sits, how big a cell is, and which cell a pixel lands
/// in. The board itself knows nothing about pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    x: f64,
    y: f64,
    side: f64,
    cell_size: f64,
    cells: u8,
}

impl PlayArea {
    const HEIGHT_FRACTION: f64 = 0.75;

    /// Lay the board out for a viewport: a square spanning three quarters
    /// of the viewport height, centered on both axes. A viewport narrower
    /// than the square lets it overflow horizontally.
    pub fn centered(width: f64, height: f64, grid: Grid) -> PlayArea {
        let side = height * Self::HEIGHT_FRACTION;
        let cells = grid.size();
        PlayArea {
            x: (width - side) / 2.0,
            y: (height - side) / 2.0,
            side,
            cell_size: side / cells as f64,
            cells,
        }
    }

    /// Left edge of the square
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Top edge of the square
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Side length of the square
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Width and height of one cell
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// The (row, col) cell containing the pixel, or None when the pixel
    /// falls outside the square. A cell owns its top and left edge; the
    /// square's bottom and right edge belong to no cell.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(u8, u8)> {
        let col = ((x - self.x) / self.cell_size).floor();
        let row = ((y - self.y) / self.cell_size).floor();
        // Range-check as floats; a negative value cast to u8 would
        // saturate onto the first row or column.
        let cells = self.cells as f64;
        if (0.0..cells).contains(&row) && (0.0..cells).contains(&col) {
            Some((row as u8, col as u8))
        } else {
            None
        }
    }

    /// Top-left pixel of a cell, or None outside the grid
    pub fn cell_origin(&self, row: u8, col: u8) -> Option<(f64, f64)> {
        if row < self.cells && col < self.cells {
            Some((
                self.x + col as f64 * self.cell_size,
                self.y + row as f64 * self.cell_size,
            ))
        } else {
            None
        }
    }
}
