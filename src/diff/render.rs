/*!
 * Plain-text rendering of comparison results.
 *
 * Each entry becomes one row: its position, a marker (`+`, `-` or blank) and
 * its content. Rows can be coloured with ANSI escapes for terminals.
 */

use super::engine::{DiffEntry, DiffKind};
use super::summary::DiffSummary;

/// Shown instead of rows when there is nothing to display
pub const NO_DIFFERENCES_MESSAGE: &str = "No differences found.";

const ANSI_GREEN: &str = "\x1B[32m";
const ANSI_RED: &str = "\x1B[31m";
const ANSI_RESET: &str = "\x1B[0m";

/// Options controlling how rows are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix each row with its position
    pub line_numbers: bool,
    /// Colour added and removed rows
    pub color: bool,
    /// Skip unchanged rows
    pub only_changes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            color: false,
            only_changes: false,
        }
    }
}

/// Width of the position column for a result
fn position_width(entries: &[DiffEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.position)
        .max()
        .unwrap_or(0)
        .to_string()
        .len()
}

fn render_row(entry: &DiffEntry, options: &RenderOptions, width: usize) -> String {
    let row = if options.line_numbers {
        format!(
            "{:>width$} {} {}",
            entry.position,
            entry.kind.marker(),
            entry.content,
            width = width
        )
    } else {
        format!("{} {}", entry.kind.marker(), entry.content)
    };

    if !options.color {
        return row;
    }

    match entry.kind {
        DiffKind::Added => format!("{}{}{}", ANSI_GREEN, row, ANSI_RESET),
        DiffKind::Removed => format!("{}{}{}", ANSI_RED, row, ANSI_RESET),
        DiffKind::Unchanged => row,
    }
}

/// Render a single entry.
pub fn render_entry(entry: &DiffEntry, options: &RenderOptions) -> String {
    render_row(entry, options, entry.position.to_string().len())
}

/// Render a whole result, one row per line.
///
/// Returns [`NO_DIFFERENCES_MESSAGE`] when the result is empty, or when only
/// changes are requested and there are none.
pub fn render(entries: &[DiffEntry], options: &RenderOptions) -> String {
    let width = position_width(entries);

    let rows: Vec<String> = entries
        .iter()
        .filter(|e| !options.only_changes || e.is_change())
        .map(|e| render_row(e, options, width))
        .collect();

    if rows.is_empty() {
        return NO_DIFFERENCES_MESSAGE.to_string();
    }

    rows.join("\n")
}

/// Render the per-kind counts line
pub fn render_summary(summary: &DiffSummary) -> String {
    format!(
        "{} added, {} removed, {} unchanged",
        summary.added, summary.removed, summary.unchanged
    )
}
