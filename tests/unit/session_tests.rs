/*!
 * Tests for diff session state
 */

use linecmp::{DiffKind, DiffSession};

/// A new session shows nothing
#[test]
fn test_newSession_shouldHaveNoResult() {
    let session = DiffSession::new();

    assert!(!session.is_shown());
    assert!(session.last_result().is_none());
    assert_eq!(session.left(), "");
}

/// Compare fills the last result and reset clears everything
#[test]
fn test_session_compareThenReset_shouldClearState() {
    let mut session = DiffSession::new();
    session.set_left("a\nb");
    session.set_right("a\nb\nc");

    let kinds: Vec<DiffKind> = session.compare().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![DiffKind::Unchanged, DiffKind::Unchanged, DiffKind::Added]);
    assert_eq!(session.summary().map(|s| s.added), Some(1));

    session.reset();

    assert!(!session.is_shown());
    assert_eq!(session.left(), "");
    assert_eq!(session.right(), "");
}

/// Comparing empty inputs shows an empty result rather than none
#[test]
fn test_session_withEmptyInputs_shouldShowEmptyResult() {
    let mut session = DiffSession::new();

    assert!(session.compare().is_empty());
    assert!(session.is_shown());
    assert_eq!(session.summary().map(|s| s.total()), Some(0));
}
