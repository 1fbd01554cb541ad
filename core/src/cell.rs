//! Per-position match classification.
//!
//! This module provides:
//! - `CellState`: the classification of a single reference position
//! - `Progress`: aggregate counts derived from a cell sequence

use serde::{Deserialize, Serialize};

/// Classification of one reference position against the typed buffer.
///
/// Every position starts `Initial`, becomes `Success` or `Error` once the
/// buffer covers it, and reverts to `Initial` when the buffer shrinks back
/// below it. No state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// Not yet reached by the buffer
    Initial,
    /// Buffer character at this position equals the reference character
    Success,
    /// Buffer character at this position differs from the reference character
    Error,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Initial
    }
}

impl CellState {
    /// Render-facing name, usable directly as a style class.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Initial => "initial",
            CellState::Success => "success",
            CellState::Error => "error",
        }
    }

    /// Whether the position has been reached and scored.
    pub fn is_scored(&self) -> bool {
        !matches!(self, CellState::Initial)
    }
}

/// Aggregate tally over a cell sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Positions scored `Success`
    pub success: usize,
    /// Positions scored `Error`
    pub error: usize,
    /// Total reference positions
    pub total: usize,
}

impl Progress {
    /// Tally a cell sequence.
    pub fn from_cells(cells: &[CellState]) -> Self {
        let mut progress = Progress {
            success: 0,
            error: 0,
            total: cells.len(),
        };
        for cell in cells {
            match cell {
                CellState::Success => progress.success += 1,
                CellState::Error => progress.error += 1,
                CellState::Initial => {}
            }
        }
        progress
    }

    /// Number of positions scored so far.
    pub fn typed(&self) -> usize {
        self.success + self.error
    }

    /// Number of positions not yet reached.
    pub fn remaining(&self) -> usize {
        self.total - self.typed()
    }

    /// Fraction of scored positions that matched. 1.0 before anything is typed.
    pub fn accuracy(&self) -> f32 {
        if self.typed() == 0 {
            return 1.0;
        }
        self.success as f32 / self.typed() as f32
    }

    /// Whether every position matched.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.success == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_names() {
        assert_eq!(CellState::Initial.as_str(), "initial");
        assert_eq!(CellState::Success.as_str(), "success");
        assert_eq!(CellState::Error.as_str(), "error");
    }

    #[test]
    fn test_progress_counts() {
        let cells = [
            CellState::Success,
            CellState::Success,
            CellState::Error,
            CellState::Initial,
        ];
        let progress = Progress::from_cells(&cells);
        assert_eq!(progress.success, 2);
        assert_eq!(progress.error, 1);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.typed(), 3);
        assert_eq!(progress.remaining(), 1);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_accuracy() {
        let empty = Progress::from_cells(&[]);
        assert_eq!(empty.accuracy(), 1.0);
        assert!(!empty.is_complete());

        let cells = [CellState::Success, CellState::Error];
        let progress = Progress::from_cells(&cells);
        assert_eq!(progress.accuracy(), 0.5);
    }

    #[test]
    fn test_progress_complete() {
        let cells = [CellState::Success, CellState::Success];
        assert!(Progress::from_cells(&cells).is_complete());
    }
}
