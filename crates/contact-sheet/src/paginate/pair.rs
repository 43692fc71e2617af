//! "Two-n-T" pagination: two pages side by side per sheet
//!
//! Input pages may come from several documents; they keep the order in
//! which they were extracted.

use crate::constants::PAIR_SLOTS;
use crate::layout::{GridPosition, LayoutMode, LayoutResult, PageRef, PlacedPage, Sheet, SheetKind};

/// Lazily pair up pages: `pages[2s]` on the left, `pages[2s + 1]` on the right.
///
/// With an odd number of pages the last sheet has only its left slot.
pub fn pair_sheets<I>(pages: I) -> impl Iterator<Item = Sheet>
where
    I: IntoIterator<Item = PageRef>,
{
    let mut pages = pages.into_iter();
    let mut index = 0;

    std::iter::from_fn(move || {
        let placements: Vec<PlacedPage> = pages
            .by_ref()
            .take(PAIR_SLOTS)
            .enumerate()
            .map(|(slot, page)| PlacedPage {
                page,
                position: GridPosition::new(0, slot),
            })
            .collect();
        if placements.is_empty() {
            return None;
        }

        let sheet = Sheet {
            index,
            kind: SheetKind::Pair,
            placements,
        };
        index += 1;
        Some(sheet)
    })
}

/// Split a flat page list into left/right pairs
pub fn paginate_pair(pages: &[PageRef]) -> LayoutResult {
    LayoutResult {
        mode: LayoutMode::Pair,
        rows: 1,
        columns: PAIR_SLOTS,
        sheets: pair_sheets(pages.iter().copied()).collect(),
    }
}
