use crate::constants::*;
use crate::layout::{LayoutDirection, LayoutMode, clamp_grid};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contact sheet configuration for one generate request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContactSheetOptions {
    pub mode: LayoutMode,

    // Grid (standard and custom order modes)
    pub columns: usize,
    pub rows: usize,
    pub direction: LayoutDirection,

    // Output configuration
    /// Gap between cells in points
    pub spacing: f32,
    pub resolution_dpi: u32,
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    /// Explicit sheet size in pixels for pair mode (width, height)
    pub pair_sheet_px: (u32, u32),
}

impl Default for ContactSheetOptions {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Standard,
            columns: 3,
            rows: 3,
            direction: LayoutDirection::Across,
            spacing: 10.0,
            resolution_dpi: 150,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            pair_sheet_px: DEFAULT_PAIR_SHEET_PX,
        }
    }
}

impl ContactSheetOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ContactSheetError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ContactSheetError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Rows and columns the paginators lay out, each at least 1
    pub fn grid(&self) -> (usize, usize) {
        clamp_grid(self.rows, self.columns)
    }

    /// Pages held by one full sheet
    pub fn pages_per_sheet(&self) -> usize {
        match self.mode {
            LayoutMode::Standard | LayoutMode::CustomOrder => {
                let (rows, columns) = self.grid();
                rows * columns
            }
            LayoutMode::Pair => PAIR_SLOTS,
        }
    }

    /// Scale factor from PDF points to rendered pixels
    pub fn render_scale(&self) -> f32 {
        self.resolution_dpi as f32 / POINTS_PER_INCH
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let grid_range = MIN_GRID_CELLS..=MAX_GRID_CELLS;
        if !grid_range.contains(&self.columns) {
            return Err(ContactSheetError::Config(format!(
                "Columns must be between {} and {}, got {}",
                MIN_GRID_CELLS, MAX_GRID_CELLS, self.columns
            )));
        }
        if !grid_range.contains(&self.rows) {
            return Err(ContactSheetError::Config(format!(
                "Rows must be between {} and {}, got {}",
                MIN_GRID_CELLS, MAX_GRID_CELLS, self.rows
            )));
        }

        if !(0.0..=MAX_SPACING).contains(&self.spacing) {
            return Err(ContactSheetError::Config(format!(
                "Spacing must be between 0 and {}, got {}",
                MAX_SPACING, self.spacing
            )));
        }

        if !(MIN_RESOLUTION_DPI..=MAX_RESOLUTION_DPI).contains(&self.resolution_dpi) {
            return Err(ContactSheetError::Config(format!(
                "Resolution must be between {} and {} DPI, got {}",
                MIN_RESOLUTION_DPI, MAX_RESOLUTION_DPI, self.resolution_dpi
            )));
        }

        let (width_px, height_px) = self.pair_sheet_px;
        if width_px == 0 || height_px == 0 {
            return Err(ContactSheetError::Config(
                "Pair sheet dimensions must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}
