/*!
 * Line diff engine and its result helpers.
 *
 * - `engine`: splits texts into documents and compares them position by position
 * - `summary`: counts entries by kind
 * - `render`: turns entries into marked, optionally coloured rows
 */

pub mod engine;
pub mod render;
pub mod summary;

pub use engine::{
    DiffEntry, DiffKind, Document, LineBreaks, compare, compare_documents, compare_with,
};
pub use render::{NO_DIFFERENCES_MESSAGE, RenderOptions, render, render_entry, render_summary};
pub use summary::DiffSummary;
