//! typedrill-core
//!
//! Real-time typing-accuracy engine: given a fixed reference text and a
//! live user input buffer, it maintains per-character match state across
//! plain insertion, backward deletion, line breaks, multi-stage IME
//! composition, and typing past the end of the reference.
//!
//! The engine is deliberately host-agnostic: a front-end (web component,
//! TUI widget, test harness) captures edit notifications from its input
//! surface, feeds them in, and renders the classification sequence it gets
//! back. No rendering, layout, or event capture lives here.
//!
//! Public API:
//! - `TypingSession` - Per-session orchestration: reconcile, classify, publish
//! - `InputReconciler` - Buffer ownership and edit acceptance policy
//! - `classify` - Pure per-position match scoring
//! - `CellState` / `Progress` - Classification results and tallies
//! - `EditEvent` / `EditKind` - Host-captured edit notifications
//! - `RenderContext` - Data container read by the rendering host
//! - `Config` - Session configuration with TOML load/save

use serde::{Deserialize, Serialize};

pub mod cell;
pub use cell::{CellState, Progress};

pub mod edit;
pub use edit::{EditEvent, EditKind};

pub mod reference;
pub use reference::Reference;

pub mod composition;
pub use composition::CompositionState;

pub mod reconciler;
pub use reconciler::InputReconciler;

pub mod matcher;
pub use matcher::classify;

pub mod session;
pub use session::TypingSession;

pub mod context;
pub use context::RenderContext;

/// Session configuration.
///
/// `allow_backward` is the only field the engine consults; `font_size` and
/// `line_height` ride along for the rendering host and are republished
/// untouched through `RenderContext`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Honor backward deletions (false holds the buffer at its pre-deletion
    /// value, for drills that forbid corrections)
    pub allow_backward: bool,

    /// Cell font size in pixels, for the renderer
    pub font_size: f32,

    /// Line height multiplier, for the renderer
    pub line_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_backward: true,
            font_size: 36.0,
            line_height: 1.5,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;
    use unicode_segmentation::UnicodeSegmentation;

    /// Number of extended grapheme clusters in `s`.
    pub fn grapheme_len(s: &str) -> usize {
        s.graphemes(true).count()
    }

    /// The prefix of `s` holding at most `max` grapheme clusters.
    pub fn truncate_graphemes(s: &str, max: usize) -> &str {
        match s.grapheme_indices(true).nth(max) {
            Some((index, _)) => &s[..index],
            None => s,
        }
    }

    /// Whether a grapheme cluster consists solely of whitespace.
    pub fn is_whitespace(grapheme: &str) -> bool {
        !grapheme.is_empty() && grapheme.chars().all(char::is_whitespace)
    }

    /// Grapheme equality under NFC, so composed and decomposed forms of the
    /// same glyph compare equal.
    pub fn nfc_eq(a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        a.nfc().eq(b.nfc())
    }
}
