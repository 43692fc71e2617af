//! Layout engine - picks the paginator for the requested mode
//!
//! The engine holds no state; every call is a pure function of the loaded
//! documents and the options. An empty input produces an empty layout,
//! reporting "nothing to generate" is left to the export step.

use crate::io::{SourceDocument, extract_page_refs};
use crate::layout::{LayoutMode, LayoutResult, Sheet};
use crate::options::ContactSheetOptions;
use crate::paginate::{
    custom_order_sheets, paginate_custom_order, paginate_pair, paginate_standard, pair_sheets,
    standard_sheets,
};

/// Build the complete layout plan.
///
/// Standard and custom order modes lay out the first document only; pair
/// mode takes every page of every document in upload order.
pub fn generate(documents: &[SourceDocument], options: &ContactSheetOptions) -> LayoutResult {
    let (rows, columns) = options.grid();
    let result = match options.mode {
        LayoutMode::Standard => match documents.first() {
            Some(doc) => {
                paginate_standard(doc.id, doc.page_count, rows, columns, options.direction)
            }
            None => LayoutResult::empty(options.mode, rows, columns),
        },
        LayoutMode::CustomOrder => match documents.first() {
            Some(doc) => {
                let result = paginate_custom_order(doc.id, doc.page_count, rows, columns);
                if let Err(e) = result.check_coverage(doc.page_count) {
                    log::warn!("custom order layout for {} is inconsistent: {}", doc.name, e);
                }
                result
            }
            None => LayoutResult::empty(options.mode, rows, columns),
        },
        LayoutMode::Pair => {
            let pages = extract_page_refs(documents);
            let result = paginate_pair(&pages);
            if result.placed_count() != pages.len() {
                log::warn!(
                    "pair layout placed {} of {} pages",
                    result.placed_count(),
                    pages.len()
                );
            }
            result
        }
    };

    log::info!(
        "{:?} layout: {} sheet(s), {} page(s)",
        result.mode,
        result.len(),
        result.placed_count()
    );
    result
}

/// Produce the sheets of the layout one at a time.
///
/// Yields the same sheets as [`generate`], without materializing the plan.
pub fn generate_lazy<'a>(
    documents: &'a [SourceDocument],
    options: &ContactSheetOptions,
) -> Box<dyn Iterator<Item = Sheet> + 'a> {
    let (rows, columns) = options.grid();
    match (options.mode, documents.first()) {
        (LayoutMode::Standard, Some(doc)) => Box::new(standard_sheets(
            doc.id,
            doc.page_count,
            rows,
            columns,
            options.direction,
        )),
        (LayoutMode::CustomOrder, Some(doc)) => Box::new(custom_order_sheets(
            doc.id,
            doc.page_count,
            rows,
            columns,
        )),
        (LayoutMode::Pair, _) => Box::new(pair_sheets(
            documents.iter().flat_map(|doc| doc.page_refs()),
        )),
        (_, None) => Box::new(std::iter::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DocumentId, LayoutDirection};

    fn doc(id: u64, page_count: usize) -> SourceDocument {
        SourceDocument {
            id: DocumentId(id),
            name: format!("doc{id}.pdf"),
            page_count,
            byte_len: 0,
        }
    }

    fn options(mode: LayoutMode) -> ContactSheetOptions {
        ContactSheetOptions {
            mode,
            rows: 3,
            columns: 3,
            direction: LayoutDirection::Down,
            ..Default::default()
        }
    }

    #[test]
    fn test_dispatches_standard() {
        let result = generate(&[doc(0, 10)], &options(LayoutMode::Standard));
        assert_eq!(result.mode, LayoutMode::Standard);
        assert_eq!(result.page_numbers(), (1..=10).collect::<Vec<_>>());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_dispatches_custom_order() {
        let result = generate(&[doc(0, 18)], &options(LayoutMode::CustomOrder));
        assert_eq!(result.mode, LayoutMode::CustomOrder);
        assert_eq!(result.sheets[1].page_numbers(), vec![6, 4, 2, 12, 10, 8, 18, 16, 14]);
    }

    #[test]
    fn test_pair_uses_every_document() {
        let result = generate(&[doc(0, 3), doc(1, 2)], &options(LayoutMode::Pair));
        assert_eq!(result.len(), 3);
        assert_eq!(result.placed_count(), 5);
        assert_eq!(result.sheets[1].placements[1].page.document, DocumentId(1));
    }

    #[test]
    fn test_no_documents_is_empty() {
        for mode in [LayoutMode::Standard, LayoutMode::CustomOrder, LayoutMode::Pair] {
            assert!(generate(&[], &options(mode)).is_empty());
            assert_eq!(generate_lazy(&[], &options(mode)).count(), 0);
        }
    }

    #[test]
    fn test_lazy_matches_generate() {
        let docs = [doc(0, 23), doc(1, 4)];
        for mode in [LayoutMode::Standard, LayoutMode::CustomOrder, LayoutMode::Pair] {
            let eager = generate(&docs, &options(mode));
            let lazy: Vec<Sheet> = generate_lazy(&docs, &options(mode)).collect();
            assert_eq!(eager.sheets, lazy, "{mode:?}");
        }
    }

    #[test]
    fn test_generate_is_idempotent() {
        let docs = [doc(0, 31)];
        for mode in [LayoutMode::Standard, LayoutMode::CustomOrder, LayoutMode::Pair] {
            assert_eq!(generate(&docs, &options(mode)), generate(&docs, &options(mode)));
        }
    }
}
