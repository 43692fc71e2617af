//! Custom order pagination: alternating odd and even sheets
//!
//! The layout is meant for manual duplex printing. Odd pages fill the front
//! sheets in ascending order; even pages fill the back sheets with every
//! row mirrored. For a full pair of sheets, flipping the printed sheet
//! along its vertical axis puts each even page behind its odd partner.
//! On a partial last pair the even pages are packed into the leading
//! cells instead, so that guarantee does not hold there.
//!
//! ## Example (3 × 3, 18 pages)
//!
//! ```text
//! Sheet 1 (odd)        Sheet 2 (even)
//! ┌────┬────┬────┐     ┌────┬────┬────┐
//! │  1 │  3 │  5 │     │  6 │  4 │  2 │
//! ├────┼────┼────┤     ├────┼────┼────┤
//! │  7 │  9 │ 11 │     │ 12 │ 10 │  8 │
//! ├────┼────┼────┤     ├────┼────┼────┤
//! │ 13 │ 15 │ 17 │     │ 18 │ 16 │ 14 │
//! └────┴────┴────┘     └────┴────┴────┘
//! ```

use crate::layout::{
    DocumentId, LayoutDirection, LayoutMode, LayoutResult, PageRef, PlacedPage, Sheet, SheetKind,
    clamp_grid, grid_position,
};

// =============================================================================
// Sheet Counts
// =============================================================================

/// Sheet counts for a custom order layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomOrderPlan {
    pub page_count: usize,
    pub rows: usize,
    pub columns: usize,
    pub pages_per_sheet: usize,
    /// Sheets needed for pages 1, 3, 5, ...
    pub odd_sheet_count: usize,
    /// Sheets needed for pages 2, 4, 6, ...
    pub even_sheet_count: usize,
}

impl CustomOrderPlan {
    pub fn new(page_count: usize, rows: usize, columns: usize) -> Self {
        let (rows, columns) = clamp_grid(rows, columns);
        let pages_per_sheet = rows * columns;

        Self {
            page_count,
            rows,
            columns,
            pages_per_sheet,
            odd_sheet_count: page_count.div_ceil(2).div_ceil(pages_per_sheet),
            even_sheet_count: (page_count / 2).div_ceil(pages_per_sheet),
        }
    }

    /// Number of odd/even sheet pairs (the last pair may lack its even half)
    pub fn max_sheet_count(&self) -> usize {
        self.odd_sheet_count.max(self.even_sheet_count)
    }

    /// Total sheets emitted
    pub fn total_sheets(&self) -> usize {
        self.odd_sheet_count + self.even_sheet_count
    }

    /// Page numbers of odd sheet `sheet_index`, in draw order
    pub fn odd_sheet_pages(&self, sheet_index: usize) -> Vec<usize> {
        let start = sheet_index * self.pages_per_sheet * 2 + 1;
        (0..self.pages_per_sheet)
            .map(|k| start + 2 * k)
            .take_while(|&page| page <= self.page_count)
            .collect()
    }

    /// Page numbers of even sheet `sheet_index`, in draw order
    ///
    /// The even pages fill a grid row by row; each row is then read right
    /// to left. Cells past the last page are skipped, not padded.
    pub fn even_sheet_pages(&self, sheet_index: usize) -> Vec<usize> {
        let base = sheet_index * self.pages_per_sheet * 2 + 2;

        let grid: Vec<Vec<Option<usize>>> = (0..self.rows)
            .map(|row| {
                (0..self.columns)
                    .map(|col| {
                        let page = base + 2 * (row * self.columns + col);
                        (page <= self.page_count).then_some(page)
                    })
                    .collect()
            })
            .collect();

        grid.iter()
            .flat_map(|row| row.iter().rev().flatten().copied())
            .collect()
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Lazily produce the sheets of a custom order layout.
///
/// Sheets alternate odd, even, odd, even... until one parity runs out;
/// the remaining sheets of the other parity follow in order.
pub fn custom_order_sheets(
    document: DocumentId,
    page_count: usize,
    rows: usize,
    columns: usize,
) -> impl Iterator<Item = Sheet> {
    let plan = CustomOrderPlan::new(page_count, rows, columns);

    (0..plan.max_sheet_count())
        .flat_map(move |sheet_index| {
            let odd = (sheet_index < plan.odd_sheet_count)
                .then(|| (SheetKind::Odd, plan.odd_sheet_pages(sheet_index)));
            let even = (sheet_index < plan.even_sheet_count)
                .then(|| (SheetKind::Even, plan.even_sheet_pages(sheet_index)));
            odd.into_iter().chain(even)
        })
        .filter(|(_, pages)| !pages.is_empty())
        .enumerate()
        .map(move |(index, (kind, pages))| {
            log::debug!("custom order sheet {} ({:?}): {:?}", index + 1, kind, pages);
            Sheet {
                index,
                kind,
                placements: place_in_reading_order(document, &pages, plan.rows, plan.columns),
            }
        })
}

/// Build the alternating odd/even layout for `page_count` pages
pub fn paginate_custom_order(
    document: DocumentId,
    page_count: usize,
    rows: usize,
    columns: usize,
) -> LayoutResult {
    let (rows, columns) = clamp_grid(rows, columns);
    LayoutResult {
        mode: LayoutMode::CustomOrder,
        rows,
        columns,
        sheets: custom_order_sheets(document, page_count, rows, columns).collect(),
    }
}

/// The k-th drawn page goes into the k-th cell in reading order
fn place_in_reading_order(
    document: DocumentId,
    pages: &[usize],
    rows: usize,
    columns: usize,
) -> Vec<PlacedPage> {
    pages
        .iter()
        .enumerate()
        .map(|(k, &page_number)| PlacedPage {
            page: PageRef::new(document, page_number),
            position: grid_position(k, rows, columns, LayoutDirection::Across),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
