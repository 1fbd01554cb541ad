//! Composition tracking for multi-stage text entry.
//!
//! Input methods commit text incrementally: each update replaces the whole
//! trailing uncommitted span with the IME's latest reinterpretation. To
//! isolate that span the engine records the buffer length at the moment
//! composition opened; string diffing alone is ambiguous when characters
//! repeat.

use unicode_segmentation::UnicodeSegmentation;

use crate::utils;

/// Whether an input-method composition is in progress, and where its
/// uncommitted span begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionState {
    /// No composition open
    #[default]
    Idle,
    /// Composition open; `start` is the buffer grapheme length when it opened
    Composing { start: usize },
}

impl CompositionState {
    pub fn is_composing(&self) -> bool {
        matches!(self, CompositionState::Composing { .. })
    }

    /// Grapheme index where the uncommitted span begins, if composing.
    pub fn span_start(&self) -> Option<usize> {
        match self {
            CompositionState::Idle => None,
            CompositionState::Composing { start } => Some(*start),
        }
    }

    /// The start of the all-whitespace placeholder span in `buffer`, if the
    /// entire uncommitted span is whitespace. IMEs often emit an interim
    /// whitespace placeholder before the real characters commit; scoring it
    /// would flash a false error on every composed character. The exception
    /// lifts the moment the span holds any non-whitespace grapheme.
    pub fn placeholder_span(&self, buffer: &str) -> Option<usize> {
        let start = self.span_start()?;
        let mut span = buffer.graphemes(true).skip(start).peekable();
        span.peek()?;
        if span.all(utils::is_whitespace) {
            Some(start)
        } else {
            None
        }
    }
}
