//! Render context for host communication.
//!
//! The `RenderContext` struct is a simple data container with public fields
//! that rendering hosts read after each edit. After calling `apply_edit` on
//! a session, call `sync_to_context` and let the host draw one cell per
//! reference character and push the accepted buffer back into its input
//! surface.
//!
//! Design philosophy: zero abstraction - just data transfer. No callbacks,
//! no traits, no generics. Host code reads fields directly.

use crate::cell::CellState;

/// Snapshot of session state for the rendering host.
///
/// `font_size` and `line_height` are carried through from configuration
/// untouched; the engine itself never reads them.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Accepted buffer to reflect back into the input surface
    pub buffer: String,

    /// Classification of each reference position, in order
    pub cells: Vec<CellState>,

    /// Caret position: number of typed graphemes
    pub caret: usize,

    /// Whether the whole reference is typed correctly
    pub complete: bool,

    /// Font size for the cell renderer (cosmetic pass-through)
    pub font_size: f32,

    /// Line height for the cell renderer (cosmetic pass-through)
    pub line_height: f32,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear buffer and cells, keeping the cosmetic fields.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cells.clear();
        self.caret = 0;
        self.complete = false;
    }

    /// Render-facing class names, one per cell.
    pub fn cell_classes(&self) -> Vec<&'static str> {
        self.cells.iter().map(CellState::as_str).collect()
    }
}
