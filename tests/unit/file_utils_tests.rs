/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use linecmp::InputError;
use linecmp::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "left.txt", "content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Reading a text file keeps its content verbatim
#[test]
fn test_read_text_file_withTextFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "left.txt", "a\r\nb\n")?;

    assert_eq!(FileManager::read_text_file(&test_file)?, "a\r\nb\n");

    Ok(())
}

/// Missing files are reported as not found
#[test]
fn test_read_text_file_withMissingFile_shouldReturnNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.txt");

    let result = FileManager::read_text_file(&missing);
    assert!(matches!(result, Err(InputError::NotFound(path)) if path == missing));

    Ok(())
}

/// Binary content is rejected
#[test]
fn test_read_text_from_withInvalidUtf8_shouldReturnNotText() {
    let bytes: &[u8] = &[0x66, 0x6f, 0xff, 0xfe];

    let result = FileManager::read_text_from(bytes);
    assert!(matches!(result, Err(InputError::NotText(_))));
}

/// Writing creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("diff.txt");

    FileManager::write_to_file(&target, "1 + a")?;

    assert!(FileManager::dir_exists(temp_dir.path().join("out")));
    assert_eq!(std::fs::read_to_string(&target)?, "1 + a");

    Ok(())
}
