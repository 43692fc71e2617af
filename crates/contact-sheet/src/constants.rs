//! Shared constants for contact sheet generation
//!
//! Unit conversions and the limits enforced on caller-supplied input.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Points per inch, the reference resolution for render scaling
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Input Limits
// =============================================================================

/// Largest PDF accepted by the loader (100 MB)
pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Grid bounds for rows and columns
pub const MIN_GRID_CELLS: usize = 1;
pub const MAX_GRID_CELLS: usize = 10;

/// Spacing between cells, in points
pub const MAX_SPACING: f32 = 100.0;

/// Render resolution bounds (DPI)
pub const MIN_RESOLUTION_DPI: u32 = 72;
pub const MAX_RESOLUTION_DPI: u32 = 600;

// =============================================================================
// Pair Mode
// =============================================================================

/// Slots on a "Two-n-T" sheet (left, right)
pub const PAIR_SLOTS: usize = 2;

/// Default pair sheet size in pixels (A4 landscape at 300 DPI)
pub const DEFAULT_PAIR_SHEET_PX: (u32, u32) = (3508, 2480);

// =============================================================================
// File Naming
// =============================================================================

pub const STANDARD_FILE_PREFIX: &str = "contact-sheet";
pub const CUSTOM_ORDER_FILE_PREFIX: &str = "custom-order";
pub const PAIR_FILE_PREFIX: &str = "two-n-t";
