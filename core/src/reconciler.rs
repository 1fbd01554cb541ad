//! Edit reconciliation: bounding and classifying raw buffer updates.
//!
//! The reconciler owns the authoritative buffer for a session. Every edit
//! notification proposes a new buffer value; the reconciler either accepts
//! it (possibly truncated to the reference length), or vetoes it (backward
//! deletion while deletions are disabled). There is no error path: every
//! boundary condition is a policy decision, and the host reflects the
//! accepted value back into its input surface.

use tracing::debug;

use crate::composition::CompositionState;
use crate::edit::EditKind;
use crate::utils;

/// Owns the session buffer and applies the reconciliation rules.
#[derive(Debug, Clone)]
pub struct InputReconciler {
    buffer: String,
    /// Maximum buffer length, in graphemes (the reference length)
    capacity: usize,
    /// Whether backward deletions are honored; fixed for the session
    allow_backward: bool,
    composition: CompositionState,
}

impl InputReconciler {
    /// Create a reconciler for a reference of `capacity` graphemes.
    pub fn new(capacity: usize, allow_backward: bool) -> Self {
        Self {
            buffer: String::new(),
            capacity,
            allow_backward,
            composition: CompositionState::Idle,
        }
    }

    /// The current accepted buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn composition(&self) -> CompositionState {
        self.composition
    }

    pub fn allow_backward(&self) -> bool {
        self.allow_backward
    }

    /// Reset to an empty buffer with no composition open.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.composition = CompositionState::Idle;
    }

    /// Apply one edit notification and return the accepted buffer.
    pub fn apply(&mut self, proposed: &str, kind: EditKind) -> &str {
        let (accepted, composition) = Self::reconcile(
            &self.buffer,
            proposed,
            kind,
            self.allow_backward,
            self.capacity,
            self.composition,
        );
        self.buffer = accepted;
        self.composition = composition;
        &self.buffer
    }

    /// Decide the accepted buffer and composition state for one edit.
    ///
    /// Rules, in order:
    /// 1. A backward deletion is vetoed outright when `allow_backward` is
    ///    false; otherwise the shorter buffer is accepted as-is.
    /// 2. Any other edit is truncated to the first `capacity` graphemes.
    ///    Truncating an already-full buffer is a no-op, so resubmitting the
    ///    same full-length text is idempotent.
    /// 3. A line-break edit is an ordinary insertion whose character is `\n`;
    ///    it takes rules 1-2 like any other insert.
    /// 4. A composition edit opens (or keeps) the composition span; every
    ///    other kind closes it. A composition value that shrinks below the
    ///    span anchor ends the composition.
    pub fn reconcile(
        previous: &str,
        proposed: &str,
        kind: EditKind,
        allow_backward: bool,
        capacity: usize,
        composition: CompositionState,
    ) -> (String, CompositionState) {
        if kind.is_delete() {
            if !allow_backward {
                debug!(kind = kind.as_dom_input_type(), "backward delete vetoed");
                return (previous.to_string(), CompositionState::Idle);
            }
            return (proposed.to_string(), CompositionState::Idle);
        }

        let accepted = utils::truncate_graphemes(proposed, capacity);
        if accepted.len() < proposed.len() {
            debug!(
                kind = kind.as_dom_input_type(),
                capacity, "proposed buffer truncated to reference length"
            );
        }

        let composition = if kind.is_composition() {
            let start = composition
                .span_start()
                .unwrap_or_else(|| utils::grapheme_len(previous));
            if utils::grapheme_len(accepted) < start {
                // IME backtracked past the committed prefix: the span is gone,
                // so the composition is over.
                CompositionState::Idle
            } else {
                CompositionState::Composing { start }
            }
        } else {
            CompositionState::Idle
        };

        (accepted.to_string(), composition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_insert_accepted() {
        let mut reconciler = InputReconciler::new(12, true);
        assert_eq!(reconciler.apply("H", EditKind::InsertText), "H");
        assert_eq!(reconciler.apply("He", EditKind::InsertText), "He");
        assert_eq!(reconciler.composition(), CompositionState::Idle);
    }

    #[test]
    fn test_backward_delete_accepted() {
        let mut reconciler = InputReconciler::new(12, true);
        reconciler.apply("Hel", EditKind::InsertText);
        assert_eq!(reconciler.apply("He", EditKind::DeleteContentBackward), "He");
    }

    #[test]
    fn test_backward_delete_vetoed() {
        let mut reconciler = InputReconciler::new(12, false);
        reconciler.apply("Hel", EditKind::InsertText);
        assert_eq!(
            reconciler.apply("He", EditKind::DeleteContentBackward),
            "Hel"
        );
        // Still vetoed on a retry
        assert_eq!(
            reconciler.apply("He", EditKind::DeleteContentBackward),
            "Hel"
        );
    }

    #[test]
    fn test_overflow_truncated() {
        let mut reconciler = InputReconciler::new(5, true);
        assert_eq!(reconciler.apply("Hello ", EditKind::InsertText), "Hello");
    }

    #[test]
    fn test_full_length_resubmission_is_idempotent() {
        let mut reconciler = InputReconciler::new(5, true);
        assert_eq!(reconciler.apply("Hello", EditKind::InsertText), "Hello");
        assert_eq!(reconciler.apply("Hello", EditKind::InsertText), "Hello");
    }

    #[test]
    fn test_truncation_respects_grapheme_boundaries() {
        let mut reconciler = InputReconciler::new(2, true);
        // A flag emoji is a two-codepoint cluster and must survive whole
        assert_eq!(
            reconciler.apply("a\u{1F1EF}\u{1F1F5}b", EditKind::InsertText),
            "a\u{1F1EF}\u{1F1F5}"
        );
    }

    #[test]
    fn test_line_break_is_ordinary_insert() {
        let mut reconciler = InputReconciler::new(3, true);
        assert_eq!(reconciler.apply("\n", EditKind::InsertLineBreak), "\n");
        assert_eq!(reconciler.composition(), CompositionState::Idle);
        // Bounded like any other insert
        assert_eq!(
            reconciler.apply("ab\n\n", EditKind::InsertLineBreak),
            "ab\n"
        );
    }

    #[test]
    fn test_composition_opens_at_previous_length() {
        let mut reconciler = InputReconciler::new(12, true);
        reconciler.apply("Hel", EditKind::InsertText);
        reconciler.apply("Hel ", EditKind::InsertCompositionText);
        assert_eq!(
            reconciler.composition(),
            CompositionState::Composing { start: 3 }
        );
    }

    #[test]
    fn test_composition_revision_keeps_anchor() {
        let mut reconciler = InputReconciler::new(12, true);
        reconciler.apply(" ", EditKind::InsertCompositionText);
        reconciler.apply("世界", EditKind::InsertCompositionText);
        assert_eq!(
            reconciler.composition(),
            CompositionState::Composing { start: 0 }
        );
        assert_eq!(reconciler.buffer(), "世界");
    }

    #[test]
    fn test_plain_edit_closes_composition() {
        let mut reconciler = InputReconciler::new(12, true);
        reconciler.apply(" ", EditKind::InsertCompositionText);
        reconciler.apply("你", EditKind::InsertText);
        assert_eq!(reconciler.composition(), CompositionState::Idle);
    }

    #[test]
    fn test_backtrack_below_anchor_ends_composition() {
        let mut reconciler = InputReconciler::new(12, true);
        reconciler.apply("Hel", EditKind::InsertText);
        reconciler.apply("Hel世", EditKind::InsertCompositionText);
        // IME revision drops below the three committed graphemes
        reconciler.apply("He", EditKind::InsertCompositionText);
        assert_eq!(reconciler.composition(), CompositionState::Idle);
    }

    #[test]
    fn test_composition_value_is_bounded() {
        let mut reconciler = InputReconciler::new(2, true);
        assert_eq!(
            reconciler.apply("世界你好", EditKind::InsertCompositionText),
            "世界"
        );
        assert_eq!(
            reconciler.composition(),
            CompositionState::Composing { start: 0 }
        );
    }

    #[test]
    fn test_clear() {
        let mut reconciler = InputReconciler::new(12, true);
        reconciler.apply("He", EditKind::InsertText);
        reconciler.apply("He ", EditKind::InsertCompositionText);
        reconciler.clear();
        assert_eq!(reconciler.buffer(), "");
        assert_eq!(reconciler.composition(), CompositionState::Idle);
    }
}
