use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::InputError;

// @module: File utilities for diff inputs and outputs

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a text input file, rejecting missing files and non UTF-8 content
    pub fn read_text_file<P: AsRef<Path>>(path: P) -> std::result::Result<String, InputError> {
        let path = path.as_ref();

        if !Self::file_exists(path) {
            return Err(InputError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|e| InputError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::decode_text(bytes)
    }

    /// Read all of a reader as text
    pub fn read_text_from<R: Read>(mut reader: R) -> std::result::Result<String, InputError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| InputError::Unreadable {
                path: "<stdin>".into(),
                message: e.to_string(),
            })?;

        Self::decode_text(bytes)
    }

    fn decode_text(bytes: Vec<u8>) -> std::result::Result<String, InputError> {
        String::from_utf8(bytes).map_err(|e| InputError::NotText(e.utf8_error().to_string()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
