mod constants;
pub mod engine;
pub mod export;
pub mod io;
pub mod layout;
mod options;
pub mod paginate;
mod stats;
mod types;

pub use constants::{MAX_UPLOAD_BYTES, mm_to_pt, pt_to_mm};
pub use engine::{generate, generate_lazy};
pub use export::{ExportReport, PageRenderer, SheetWriter, export_layout, sheet_file_name};
pub use io::{SourceDocument, extract_page_refs, load_multiple_pdfs, load_pdf, load_pdf_bytes};
pub use layout::*;
pub use options::*;
pub use stats::{LayoutStatistics, calculate_statistics};
pub use types::*;
