/*!
 * Tests for rendering and summary statistics
 */

use linecmp::diff::{NO_DIFFERENCES_MESSAGE, render, render_summary};
use linecmp::{DiffSummary, RenderOptions, compare};

/// Counts are a reduction over the entries
#[test]
fn test_summary_withSubstitutionAndAppend_shouldCountEachKind() {
    let entries = compare("a\nb", "a\nc\nd");
    let summary = DiffSummary::from_entries(&entries);

    assert_eq!(
        summary,
        DiffSummary {
            added: 2,
            removed: 1,
            unchanged: 1,
        }
    );
    assert_eq!(summary.total(), entries.len());
}

/// Identical texts have no differences but still count unchanged lines
#[test]
fn test_summary_withIdenticalTexts_shouldHaveNoDifferences() {
    let summary = DiffSummary::from_entries(&compare("x\ny", "x\ny"));

    assert!(!summary.has_differences());
    assert_eq!(summary.unchanged, 2);
}

/// Rows carry position, marker and content
#[test]
fn test_render_withDefaultOptions_shouldPrintEveryRow() {
    let output = render(&compare("keep\nold", "keep\nnew\nextra"), &RenderOptions::default());

    assert_eq!(output, "1   keep\n2 - old\n2 + new\n3 + extra");
}

/// Empty lines render with a trailing space after the marker
#[test]
fn test_render_withEmptyLineRemoved_shouldKeepMarker() {
    let output = render(&compare("a\n", "a"), &RenderOptions::default());

    assert_eq!(output, "1   a\n2 - ");
}

/// Empty results show the neutral message
#[test]
fn test_render_withEmptyResult_shouldShowNeutralMessage() {
    assert_eq!(render(&compare("", ""), &RenderOptions::default()), NO_DIFFERENCES_MESSAGE);
}

/// Summary line lists all three counts
#[test]
fn test_renderSummary_shouldListAllCounts() {
    let summary = DiffSummary::from_entries(&compare("a", "b"));

    assert_eq!(render_summary(&summary), "1 added, 1 removed, 0 unchanged");
}
