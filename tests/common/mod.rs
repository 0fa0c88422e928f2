/*!
 * Common test utilities for the linecmp test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use linecmp::{DiffEntry, DiffKind};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample texts exercising appended, substituted and blank lines
pub fn sample_texts() -> Vec<&'static str> {
    vec![
        "",
        "a",
        "a\nb\nc",
        "a\nx\nc",
        "a\n\nc",
        "a\nb\nc\n",
        "line one\nline two\nline three\nline four",
        "\n\n",
        "naïve café\n日本語\nemoji 🎉",
    ]
}

/// Number of lines a text splits into
pub fn line_count(text: &str) -> usize {
    if text.is_empty() { 0 } else { text.split('\n').count() }
}

/// Entries as (position, content, kind) tuples for compact assertions
pub fn tuples(entries: &[DiffEntry]) -> Vec<(usize, &str, DiffKind)> {
    entries
        .iter()
        .map(|e| (e.position, e.content.as_str(), e.kind))
        .collect()
}
