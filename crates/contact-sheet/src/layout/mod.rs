//! Layout types and grid geometry for contact sheets
//!
//! This module handles the shared building blocks of every pagination mode:
//! - Grid position mapping (which cell a linear index lands in)
//! - Sheet geometry (cell rectangles on the output page)
//! - The layout plan types (`PageRef`, `Sheet`, `LayoutResult`)

mod grid;
mod types;

pub use grid::*;
pub use types::*;
