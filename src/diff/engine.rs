/*!
 * Positional line diff.
 *
 * Two texts are split into documents and compared index by index. No edit
 * script is searched for: an inserted line shifts every following line and
 * shows up as a change at each later position.
 */

use log::debug;
use serde::{Deserialize, Serialize};

/// How line breaks are treated when a text is split into lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreaks {
    /// Split on `\n` and keep everything else, `\r` included
    #[default]
    Preserve,
    /// Split on `\n` and drop one trailing `\r` from every line
    Normalize,
}

/// Ordered lines of one input text.
///
/// The empty string has no lines. Any other text has one more line than it
/// has `\n` characters, so a trailing line break produces a trailing empty line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    /// Split a text on `\n`, keeping line content verbatim.
    pub fn parse(text: &'a str) -> Self {
        Self::parse_with(text, LineBreaks::Preserve)
    }

    /// Split a text using the given line break handling.
    pub fn parse_with(text: &'a str, line_breaks: LineBreaks) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let lines = text
            .split('\n')
            .map(|line| match line_breaks {
                LineBreaks::Preserve => line,
                LineBreaks::Normalize => line.strip_suffix('\r').unwrap_or(line),
            })
            .collect();

        Self { lines }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at a 0-based index
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }
}

/// Classification of one output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Unchanged,
    Added,
    Removed,
}

impl DiffKind {
    /// Single-character marker shown in front of a rendered line
    pub fn marker(&self) -> char {
        match self {
            Self::Unchanged => ' ',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }

    /// The kind seen from the other side of the comparison
    pub fn inverse(&self) -> Self {
        match self {
            Self::Unchanged => Self::Unchanged,
            Self::Added => Self::Removed,
            Self::Removed => Self::Added,
        }
    }
}

impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// One classified, positioned line of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    /// Classification
    pub kind: DiffKind,
    /// Line text, possibly empty
    pub content: String,
    /// 1-based position in the longer document
    pub position: usize,
}

impl DiffEntry {
    pub fn new(kind: DiffKind, content: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            position,
        }
    }

    pub fn unchanged(content: impl Into<String>, position: usize) -> Self {
        Self::new(DiffKind::Unchanged, content, position)
    }

    pub fn added(content: impl Into<String>, position: usize) -> Self {
        Self::new(DiffKind::Added, content, position)
    }

    pub fn removed(content: impl Into<String>, position: usize) -> Self {
        Self::new(DiffKind::Removed, content, position)
    }

    /// Whether this entry represents a change
    pub fn is_change(&self) -> bool {
        self.kind != DiffKind::Unchanged
    }
}

/// Compare two texts line by line.
///
/// Never fails; two empty texts give an empty result.
pub fn compare(left: &str, right: &str) -> Vec<DiffEntry> {
    compare_with(left, right, LineBreaks::Preserve)
}

/// Compare two texts with explicit line break handling.
pub fn compare_with(left: &str, right: &str, line_breaks: LineBreaks) -> Vec<DiffEntry> {
    let left = Document::parse_with(left, line_breaks);
    let right = Document::parse_with(right, line_breaks);
    compare_documents(&left, &right)
}

/// Compare two already split documents.
pub fn compare_documents(left: &Document<'_>, right: &Document<'_>) -> Vec<DiffEntry> {
    let count = left.len().max(right.len());
    let mut entries = Vec::with_capacity(count);

    for index in 0..count {
        let position = index + 1;

        match (left.line(index), right.line(index)) {
            (None, Some(added)) => entries.push(DiffEntry::added(added, position)),
            (Some(removed), None) => entries.push(DiffEntry::removed(removed, position)),
            (Some(old), Some(new)) if old != new => {
                // An empty side of a substitution is not reported
                if !old.is_empty() {
                    entries.push(DiffEntry::removed(old, position));
                }
                if !new.is_empty() {
                    entries.push(DiffEntry::added(new, position));
                }
            }
            (Some(same), Some(_)) => entries.push(DiffEntry::unchanged(same, position)),
            (None, None) => unreachable!("index is below the longer document's length"),
        }
    }

    debug!(
        "Compared {} against {} lines: {} entries",
        left.len(),
        right.len(),
        entries.len()
    );

    entries
}
