//! Per-position match scoring of the buffer against the reference.
//!
//! Classification is strictly positional: buffer grapheme `i` is compared
//! against reference grapheme `i`, with no realignment after a mismatch.
//! The whole sequence is recomputed on every edit; for the text sizes a
//! typing drill uses, the O(N) walk is cheaper than tracking deltas.

use unicode_segmentation::UnicodeSegmentation;

use crate::cell::CellState;
use crate::composition::CompositionState;
use crate::reference::Reference;
use crate::utils;

/// Classify every reference position against `buffer`.
///
/// Pure: identical inputs always produce the identical sequence. Positions
/// past the end of the buffer are `Initial`; covered positions are `Success`
/// or `Error` by grapheme equality, except that an all-whitespace composition
/// span leaves its covered positions `Initial` until a real character lands.
pub fn classify(
    reference: &Reference,
    buffer: &str,
    composition: CompositionState,
) -> Vec<CellState> {
    let mut cells = vec![CellState::Initial; reference.len()];
    let placeholder = composition.placeholder_span(buffer);

    for (i, typed) in buffer.graphemes(true).enumerate() {
        if i >= cells.len() {
            break;
        }
        if placeholder.is_some_and(|start| i >= start) {
            continue;
        }
        let expected = reference.grapheme(i).unwrap_or_default();
        cells[i] = if utils::nfc_eq(typed, expected) {
            CellState::Success
        } else {
            CellState::Error
        };
    }

    cells
}
