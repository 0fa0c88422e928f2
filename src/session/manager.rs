/*!
 * Diff session state.
 *
 * A session holds the two current inputs and the last computed result. It is
 * the explicit value a front end keeps between a compare and a reset; nothing
 * here is global.
 */

use log::debug;

use crate::diff::{DiffEntry, DiffSummary, LineBreaks, compare_with};

/// Inputs and last result of one diff view
#[derive(Debug, Clone, Default)]
pub struct DiffSession {
    /// Original text
    left: String,
    /// Changed text
    right: String,
    /// Line break handling for both sides
    line_breaks: LineBreaks,
    /// Result of the last compare, cleared on reset
    last: Option<Vec<DiffEntry>>,
}

impl DiffSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with both inputs filled in
    pub fn with_inputs(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            ..Self::default()
        }
    }

    /// Set line break handling for later compares
    pub fn with_line_breaks(mut self, line_breaks: LineBreaks) -> Self {
        self.line_breaks = line_breaks;
        self
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    /// Replace the original text. The last result is kept until the next compare.
    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    /// Replace the changed text. The last result is kept until the next compare.
    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    /// Compare the current inputs and keep the result
    pub fn compare(&mut self) -> &[DiffEntry] {
        let entries = compare_with(&self.left, &self.right, self.line_breaks);
        debug!("Session compare produced {} entries", entries.len());
        self.last.insert(entries)
    }

    /// Result of the last compare, if one is shown
    pub fn last_result(&self) -> Option<&[DiffEntry]> {
        self.last.as_deref()
    }

    /// Whether a result is currently shown
    pub fn is_shown(&self) -> bool {
        self.last.is_some()
    }

    /// Counts for the last result
    pub fn summary(&self) -> Option<DiffSummary> {
        self.last.as_deref().map(DiffSummary::from_entries)
    }

    /// Clear both inputs and the last result
    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
        self.last = None;
    }
}
