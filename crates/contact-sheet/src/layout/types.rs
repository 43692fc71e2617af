//! Layout data types for contact sheets
//!
//! These types describe a layout plan: which source page lands in which
//! grid cell of which output sheet. They carry no geometry beyond the grid
//! position; `SheetGeometry` turns positions into rectangles.

use std::collections::BTreeSet;

/// Order in which a sheet's grid cells are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Column-major: each column fills top to bottom before the next
    Down,
    /// Row-major: each row fills left to right before the next
    #[default]
    Across,
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Handle to a loaded source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// A single page of a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRef {
    pub document: DocumentId,
    /// 1-based page number
    pub page_number: usize,
}

impl PageRef {
    pub fn new(document: DocumentId, page_number: usize) -> Self {
        Self {
            document,
            page_number,
        }
    }
}

/// A page assigned to a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPage {
    pub page: PageRef,
    pub position: GridPosition,
}

/// How a sheet's pages were selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    /// Consecutive pages
    Standard,
    /// Odd pages of a custom-order layout
    Odd,
    /// Even pages of a custom-order layout, rows mirrored
    Even,
    /// Two-n-T left/right pair
    Pair,
}

/// One physical output page
///
/// `placements` is in draw order. A partial sheet simply has fewer
/// placements than cells; there are no placeholder entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// 0-based position of the sheet in the layout
    pub index: usize,
    pub kind: SheetKind,
    pub placements: Vec<PlacedPage>,
}

impl Sheet {
    /// Page numbers in draw order
    pub fn page_numbers(&self) -> Vec<usize> {
        self.placements.iter().map(|p| p.page.page_number).collect()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Which pagination scheme produced a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Consecutive pages in a rows × columns grid
    #[default]
    Standard,
    /// Alternating odd/even sheets for duplex printing
    CustomOrder,
    /// Two pages side by side ("Two-n-T")
    Pair,
}

/// The complete plan for one generate request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    pub mode: LayoutMode,
    /// Grid rows per sheet (1 for pair mode)
    pub rows: usize,
    /// Grid columns per sheet (2 for pair mode)
    pub columns: usize,
    pub sheets: Vec<Sheet>,
}

impl LayoutResult {
    pub fn empty(mode: LayoutMode, rows: usize, columns: usize) -> Self {
        Self {
            mode,
            rows,
            columns,
            sheets: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Page numbers of every sheet, concatenated in sheet order
    pub fn page_numbers(&self) -> Vec<usize> {
        self.sheets.iter().flat_map(|s| s.page_numbers()).collect()
    }

    /// Total number of placed pages
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(Sheet::len).sum()
    }

    /// Check that every page in `1..=page_count` is placed exactly once.
    ///
    /// Only meaningful for single-document layouts.
    pub fn check_coverage(&self, page_count: usize) -> std::result::Result<(), CoverageError> {
        let mut seen = BTreeSet::new();
        for page in self.page_numbers() {
            if page == 0 || page > page_count {
                return Err(CoverageError::OutOfRange { page, page_count });
            }
            if !seen.insert(page) {
                return Err(CoverageError::Duplicate { page });
            }
        }
        if seen.len() != page_count {
            let missing = (1..=page_count).find(|p| !seen.contains(p)).unwrap_or(0);
            return Err(CoverageError::Missing { page: missing });
        }
        Ok(())
    }
}

/// A page-coverage violation found by [`LayoutResult::check_coverage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageError {
    Duplicate { page: usize },
    Missing { page: usize },
    OutOfRange { page: usize, page_count: usize },
}

impl std::fmt::Display for CoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverageError::Duplicate { page } => write!(f, "page {page} placed twice"),
            CoverageError::Missing { page } => write!(f, "page {page} never placed"),
            CoverageError::OutOfRange { page, page_count } => {
                write!(f, "page {page} outside 1..={page_count}")
            }
        }
    }
}

/// A rectangular area (points or pixels, depending on the geometry)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge, y grows downward)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Largest rectangle with the given aspect ratio centered inside this one
    pub fn fit_aspect(&self, content_width: f32, content_height: f32) -> Rect {
        if content_width <= 0.0 || content_height <= 0.0 {
            return *self;
        }
        let scale = (self.width / content_width).min(self.height / content_height);
        let w = content_width * scale;
        let h = content_height * scale;
        Rect::new(
            self.x + (self.width - w) / 2.0,
            self.y + (self.height - h) / 2.0,
            w,
            h,
        )
    }
}
