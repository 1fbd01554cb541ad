//! Typing session management.
//!
//! `TypingSession` combines the session components (reference text, input
//! reconciler, cell classifications) and drives them through the per-edit
//! cycle: reconcile the proposed buffer, reclassify every reference
//! position, store the result. Each edit notification is handled to
//! completion before the next; the session does no background work of its
//! own.

use tracing::trace;

use crate::cell::{CellState, Progress};
use crate::composition::CompositionState;
use crate::context::RenderContext;
use crate::edit::EditEvent;
use crate::matcher;
use crate::reconciler::InputReconciler;
use crate::reference::Reference;
use crate::{utils, Config};

/// One typing session against a fixed reference text.
///
/// The reference is supplied once and never mutated; the buffer is owned by
/// the embedded reconciler and only ever changes through `apply_edit`.
#[derive(Debug, Clone)]
pub struct TypingSession {
    reference: Reference,
    reconciler: InputReconciler,
    cells: Vec<CellState>,
    // Cosmetic pass-through for the rendering host; never read by the engine
    font_size: f32,
    line_height: f32,
}

impl TypingSession {
    /// Create a session with default configuration.
    pub fn new(reference: &str) -> Self {
        Self::with_config(reference, &Config::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(reference: &str, config: &Config) -> Self {
        let reference = Reference::new(reference);
        let cells = vec![CellState::Initial; reference.len()];
        let reconciler = InputReconciler::new(reference.len(), config.allow_backward);
        Self {
            reference,
            reconciler,
            cells,
            font_size: config.font_size,
            line_height: config.line_height,
        }
    }

    /// Handle one edit notification and return the new classification
    /// sequence. The accepted buffer (possibly truncated or held back) is
    /// readable through `buffer()` for the host to reflect into its input
    /// surface.
    pub fn apply_edit(&mut self, event: &EditEvent) -> &[CellState] {
        self.reconciler.apply(&event.value, event.kind);
        self.cells = matcher::classify(
            &self.reference,
            self.reconciler.buffer(),
            self.reconciler.composition(),
        );
        trace!(
            kind = event.kind.as_dom_input_type(),
            buffer = self.reconciler.buffer(),
            composing = self.reconciler.composition().is_composing(),
            "edit applied"
        );
        &self.cells
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// The accepted buffer after the latest edit.
    pub fn buffer(&self) -> &str {
        self.reconciler.buffer()
    }

    /// Classification of every reference position, in order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn composition(&self) -> CompositionState {
        self.reconciler.composition()
    }

    /// Aggregate tally of the current cells.
    pub fn progress(&self) -> Progress {
        Progress::from_cells(&self.cells)
    }

    /// Whether every reference position is typed correctly.
    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    /// Discard all typed input and return every cell to `Initial`.
    pub fn reset(&mut self) {
        self.reconciler.clear();
        self.cells = vec![CellState::Initial; self.reference.len()];
    }

    /// Publish session state into a context for the rendering host.
    pub fn sync_to_context(&self, context: &mut RenderContext) {
        context.buffer.clear();
        context.buffer.push_str(self.reconciler.buffer());
        context.cells.clear();
        context.cells.extend_from_slice(&self.cells);
        context.caret = utils::grapheme_len(self.reconciler.buffer());
        context.complete = self.is_complete();
        context.font_size = self.font_size;
        context.line_height = self.line_height;
    }
}
