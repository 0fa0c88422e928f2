/*!
 * # linecmp - positional line diff
 *
 * A Rust library and command-line tool that compares two texts line by line.
 *
 * ## Features
 *
 * - Index-aligned comparison: line `i` of one text is compared with line `i`
 *   of the other, in a single pass
 * - Classified output entries (unchanged, added, removed) with 1-based
 *   positions
 * - Per-kind counts
 * - Plain-text rendering with `+` / `-` markers and optional colours, or JSON
 * - A session value holding the current inputs and the last result
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `diff`: The comparison engine and its helpers:
 *   - `diff::engine`: Document splitting and the positional diff
 *   - `diff::summary`: Counts per kind
 *   - `diff::render`: Row rendering
 * - `session`: Inputs and last result with compare and reset
 * - `app_config`: Configuration management
 * - `app_controller`: Input resolution, comparison and output
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod diff;
pub mod errors;
pub mod file_utils;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, DiffReport, InputSource, exit_status};
pub use diff::{
    DiffEntry, DiffKind, DiffSummary, Document, LineBreaks, RenderOptions, compare, compare_with,
};
pub use errors::{AppError, ConfigError, InputError};
pub use session::DiffSession;
