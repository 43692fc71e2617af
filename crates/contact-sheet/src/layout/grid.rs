//! Grid layout calculation
//!
//! This module maps a linear cell index onto a sheet's grid and handles the
//! geometry of that grid on the output page: cell dimensions and spacing.

use super::{GridPosition, LayoutDirection, Rect};

// =============================================================================
// Position Mapping
// =============================================================================

/// Grid dimensions as used for layout: each side at least one cell
pub fn clamp_grid(rows: usize, columns: usize) -> (usize, usize) {
    (rows.max(1), columns.max(1))
}

/// Map a 0-based cell index to its (row, column) in a `rows × columns` grid.
///
/// `Down` fills column-major, `Across` fills row-major. The caller keeps
/// `index` below `rows * columns`.
pub fn grid_position(
    index: usize,
    rows: usize,
    columns: usize,
    direction: LayoutDirection,
) -> GridPosition {
    match direction {
        LayoutDirection::Down => GridPosition::new(index % rows, index / rows),
        LayoutDirection::Across => GridPosition::new(index / columns, index % columns),
    }
}

// =============================================================================
// Sheet Geometry
// =============================================================================

/// Physical layout of the cell grid on one output sheet.
///
/// Units are whatever the sheet size is given in (points for paper sizes,
/// pixels for pair mode). Row 0 is at the top and y grows downward, the
/// same convention as the rendered bitmaps the cells are filled with.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGeometry {
    pub width: f32,
    pub height: f32,
    pub rows: usize,
    pub columns: usize,
    /// Gap between neighbouring cells and around the grid
    pub spacing: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl SheetGeometry {
    /// Create a geometry with `spacing` around and between all cells.
    ///
    /// Cell sizes clamp at zero when the spacing eats the whole sheet.
    pub fn new(width: f32, height: f32, rows: usize, columns: usize, spacing: f32) -> Self {
        let (rows, columns) = clamp_grid(rows, columns);
        let cell_width = ((width - spacing * (columns + 1) as f32) / columns as f32).max(0.0);
        let cell_height = ((height - spacing * (rows + 1) as f32) / rows as f32).max(0.0);

        Self {
            width,
            height,
            rows,
            columns,
            spacing,
            cell_width,
            cell_height,
        }
    }

    /// Two full-bleed slots side by side
    pub fn pair(width: f32, height: f32) -> Self {
        Self::new(width, height, 1, 2, 0.0)
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Calculate the bounds of the cell at the given grid position.
    pub fn cell_bounds(&self, pos: GridPosition) -> Rect {
        let x = self.spacing + pos.col as f32 * (self.cell_width + self.spacing);
        let y = self.spacing + pos.row as f32 * (self.cell_height + self.spacing);
        Rect::new(x, y, self.cell_width, self.cell_height)
    }
}

// =============================================================================
// Tests
// =============================================================================
