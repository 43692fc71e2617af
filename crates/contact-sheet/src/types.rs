use thiserror::Error;

use crate::constants::mm_to_pt;

#[derive(Error, Debug)]
pub enum ContactSheetError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("File is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Failed to render page {page}: {message}")]
    Render { page: usize, message: String },
    #[error("Export error: {0}")]
    Export(String),
    #[error("No pages to generate")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, ContactSheetError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Output paper sizes accepted for contact sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    Letter,
}

impl PaperSize {
    /// Get base dimensions (always portrait)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Target page size in PDF points
    pub fn dimensions_pt(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_with_orientation(orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }
}
