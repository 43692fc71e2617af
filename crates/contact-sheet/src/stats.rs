use crate::io::SourceDocument;
use crate::layout::LayoutMode;
use crate::options::ContactSheetOptions;
use crate::paginate::CustomOrderPlan;

/// Statistics about a contact sheet layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutStatistics {
    /// Pages that will be placed
    pub source_pages: usize,
    /// Total number of output sheets
    pub output_sheets: usize,
    /// Cells on one sheet
    pub pages_per_sheet: usize,
    /// Cells left empty across all sheets
    pub empty_cells: usize,
    /// Odd-page sheets (custom order only)
    pub odd_sheets: Option<usize>,
    /// Even-page sheets (custom order only)
    pub even_sheets: Option<usize>,
}

/// Calculate statistics for the layout without building it
pub fn calculate_statistics(
    documents: &[SourceDocument],
    options: &ContactSheetOptions,
) -> LayoutStatistics {
    let pages_per_sheet = options.pages_per_sheet();

    match options.mode {
        LayoutMode::Standard => {
            let source_pages = documents.first().map_or(0, |doc| doc.page_count);
            let output_sheets = source_pages.div_ceil(pages_per_sheet);
            LayoutStatistics {
                source_pages,
                output_sheets,
                pages_per_sheet,
                empty_cells: output_sheets * pages_per_sheet - source_pages,
                odd_sheets: None,
                even_sheets: None,
            }
        }
        LayoutMode::CustomOrder => {
            let source_pages = documents.first().map_or(0, |doc| doc.page_count);
            let (rows, columns) = options.grid();
            let plan = CustomOrderPlan::new(source_pages, rows, columns);
            let output_sheets = plan.total_sheets();
            LayoutStatistics {
                source_pages,
                output_sheets,
                pages_per_sheet: plan.pages_per_sheet,
                empty_cells: output_sheets * plan.pages_per_sheet - source_pages,
                odd_sheets: Some(plan.odd_sheet_count),
                even_sheets: Some(plan.even_sheet_count),
            }
        }
        LayoutMode::Pair => {
            let source_pages: usize = documents.iter().map(|doc| doc.page_count).sum();
            let output_sheets = source_pages.div_ceil(pages_per_sheet);
            LayoutStatistics {
                source_pages,
                output_sheets,
                pages_per_sheet,
                empty_cells: output_sheets * pages_per_sheet - source_pages,
                odd_sheets: None,
                even_sheets: None,
            }
        }
    }
}
