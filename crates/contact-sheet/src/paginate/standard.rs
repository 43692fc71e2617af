//! Standard grid pagination: consecutive pages, `rows * columns` per sheet

use crate::layout::{
    DocumentId, LayoutDirection, LayoutMode, LayoutResult, PageRef, PlacedPage, Sheet, SheetKind,
    clamp_grid, grid_position,
};

/// Lazily produce the sheets of a standard contact sheet layout.
///
/// Sheet `s` holds pages `s * per_sheet + 1 ..= min((s + 1) * per_sheet, page_count)`
/// in ascending order, placed by `direction`.
pub fn standard_sheets(
    document: DocumentId,
    page_count: usize,
    rows: usize,
    columns: usize,
    direction: LayoutDirection,
) -> impl Iterator<Item = Sheet> {
    let (rows, columns) = clamp_grid(rows, columns);
    let pages_per_sheet = rows * columns;
    let sheet_count = page_count.div_ceil(pages_per_sheet);

    (0..sheet_count).map(move |index| {
        let first = index * pages_per_sheet + 1;
        let last = ((index + 1) * pages_per_sheet).min(page_count);

        let placements = (first..=last)
            .enumerate()
            .map(|(local, page_number)| PlacedPage {
                page: PageRef::new(document, page_number),
                position: grid_position(local, rows, columns, direction),
            })
            .collect();

        log::debug!("standard sheet {}: pages {}..={}", index + 1, first, last);

        Sheet {
            index,
            kind: SheetKind::Standard,
            placements,
        }
    })
}

/// Split `page_count` pages into standard grid sheets
pub fn paginate_standard(
    document: DocumentId,
    page_count: usize,
    rows: usize,
    columns: usize,
    direction: LayoutDirection,
) -> LayoutResult {
    let (rows, columns) = clamp_grid(rows, columns);
    LayoutResult {
        mode: LayoutMode::Standard,
        rows,
        columns,
        sheets: standard_sheets(document, page_count, rows, columns, direction).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridPosition;

    const DOC: DocumentId = DocumentId(0);

    #[test]
    fn test_partial_last_sheet() {
        let result = paginate_standard(DOC, 10, 2, 2, LayoutDirection::Across);

        assert_eq!(result.len(), 3);
        assert_eq!(result.sheets[0].page_numbers(), vec![1, 2, 3, 4]);
        assert_eq!(result.sheets[1].page_numbers(), vec![5, 6, 7, 8]);
        assert_eq!(result.sheets[2].page_numbers(), vec![9, 10]);
    }

    #[test]
    fn test_positions_follow_direction() {
        let down = paginate_standard(DOC, 4, 2, 2, LayoutDirection::Down);
        let positions: Vec<_> = down.sheets[0].placements.iter().map(|p| p.position).collect();
        assert_eq!(
            positions,
            vec![
                GridPosition::new(0, 0),
                GridPosition::new(1, 0),
                GridPosition::new(0, 1),
                GridPosition::new(1, 1),
            ]
        );

        let across = paginate_standard(DOC, 4, 2, 2, LayoutDirection::Across);
        assert_eq!(across.sheets[0].placements[1].position, GridPosition::new(0, 1));
    }

    #[test]
    fn test_local_index_restarts_each_sheet() {
        let result = paginate_standard(DOC, 5, 1, 2, LayoutDirection::Across);
        let first_cells: Vec<_> = result
            .sheets
            .iter()
            .map(|s| s.placements[0].position)
            .collect();
        assert!(first_cells.iter().all(|p| *p == GridPosition::new(0, 0)));
    }

    #[test]
    fn test_degenerate_grid_is_clamped() {
        let result = paginate_standard(DOC, 9, 0, 3, LayoutDirection::Across);
        assert_eq!((result.rows, result.columns), (1, 3));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_zero_pages() {
        let result = paginate_standard(DOC, 0, 3, 3, LayoutDirection::Down);
        assert!(result.is_empty());
    }
}
