//! The fixed target text a session is typed against.
//!
//! The reference is segmented into extended grapheme clusters once at
//! construction; all lengths and positions elsewhere in the crate are
//! grapheme indices into it. The text is NFC-normalized so it compares
//! cleanly against buffers regardless of how the host composed its glyphs.

use std::ops::Range;

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Immutable target text with precomputed grapheme boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    text: String,
    // Byte range of each grapheme cluster in `text`
    graphemes: Vec<Range<usize>>,
}

impl Reference {
    /// Build a reference from the target text. Whitespace and line breaks
    /// are kept; they are ordinary characters to be typed.
    pub fn new(text: &str) -> Self {
        let text: String = text.nfc().collect();
        let graphemes = text
            .grapheme_indices(true)
            .map(|(start, g)| start..start + g.len())
            .collect();
        Self { text, graphemes }
    }

    /// Number of grapheme clusters.
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    /// The grapheme cluster at position `index`, if in range.
    pub fn grapheme(&self, index: usize) -> Option<&str> {
        self.graphemes
            .get(index)
            .map(|range| &self.text[range.clone()])
    }

    /// Iterate grapheme clusters in order.
    pub fn graphemes(&self) -> impl Iterator<Item = &str> {
        self.graphemes.iter().map(|range| &self.text[range.clone()])
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
