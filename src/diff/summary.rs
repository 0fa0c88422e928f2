/*!
 * Per-kind counts over a comparison result.
 */

use serde::{Deserialize, Serialize};

use super::engine::{DiffEntry, DiffKind};

/// Counts of entries by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    /// Count the entries of a result
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            match entry.kind {
                DiffKind::Added => summary.added += 1,
                DiffKind::Removed => summary.removed += 1,
                DiffKind::Unchanged => summary.unchanged += 1,
            }
            summary
        })
    }

    /// Number of entries counted
    pub fn total(&self) -> usize {
        self.added + self.removed + self.unchanged
    }

    /// Whether any line was added or removed
    pub fn has_differences(&self) -> bool {
        self.added > 0 || self.removed > 0
    }

    /// Count for a single kind
    pub fn count(&self, kind: DiffKind) -> usize {
        match kind {
            DiffKind::Added => self.added,
            DiffKind::Removed => self.removed,
            DiffKind::Unchanged => self.unchanged,
        }
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{} -{} ={}", self.added, self.removed, self.unchanged)
    }
}
