use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::app_config::{Config, OutputFormat};
use crate::diff::{DiffEntry, DiffSummary, render, render_summary};
use crate::errors::InputError;
use crate::file_utils::FileManager;
use crate::session::DiffSession;

// @module: Application controller for text comparison

/// Exit status when the texts are identical
pub const EXIT_IDENTICAL: u8 = 0;

/// Exit status when the texts differ
pub const EXIT_DIFFERENT: u8 = 1;

/// Exit status when the comparison could not run
pub const EXIT_FAILURE: u8 = 2;

/// Where one side of a comparison comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read a file
    File(PathBuf),
    /// Read standard input
    Stdin,
    /// Use the text as given
    Text(String),
}

impl InputSource {
    /// Interpret a command line argument, `-` meaning standard input
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Assign inline texts and positional arguments to the two sides.
    ///
    /// An inline text takes its side first; positional arguments then fill
    /// the remaining sides in order, left before right.
    pub fn assign<S: AsRef<str>>(
        left_text: Option<&str>,
        right_text: Option<&str>,
        positionals: &[S],
    ) -> std::result::Result<(Self, Self), InputError> {
        let inline = usize::from(left_text.is_some()) + usize::from(right_text.is_some());
        let given = inline + positionals.len();
        if given > 2 {
            return Err(InputError::TooManyInputs(given));
        }

        let mut positional = positionals.iter().map(|arg| Self::from_arg(arg.as_ref()));
        let mut side = |text: Option<&str>, name: &'static str| match text {
            Some(text) => Ok(Self::Text(text.to_string())),
            None => positional.next().ok_or(InputError::MissingInput(name)),
        };

        let left = side(left_text, "Left")?;
        let right = side(right_text, "Right")?;
        Ok((left, right))
    }

    // @returns: Short description for log messages
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("{:?}", path),
            Self::Stdin => "<stdin>".to_string(),
            Self::Text(text) => format!("<inline text, {} bytes>", text.len()),
        }
    }
}

/// Result of one comparison with its counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    pub entries: Vec<DiffEntry>,
    pub summary: DiffSummary,
}

impl DiffReport {
    pub fn new(entries: Vec<DiffEntry>) -> Self {
        let summary = DiffSummary::from_entries(&entries);
        Self { entries, summary }
    }

    /// Whether any line was added or removed
    pub fn has_differences(&self) -> bool {
        self.summary.has_differences()
    }
}

/// Process exit status for a comparison outcome: identical, different or failed
pub fn exit_status<E>(outcome: &std::result::Result<DiffReport, E>) -> u8 {
    match outcome {
        Ok(report) if report.has_differences() => EXIT_DIFFERENT,
        Ok(_) => EXIT_IDENTICAL,
        Err(_) => EXIT_FAILURE,
    }
}

/// Main application controller for comparing two texts
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve both sides, reading standard input at most once
    pub fn resolve_inputs<R: Read>(
        &self,
        left: &InputSource,
        right: &InputSource,
        stdin: R,
    ) -> std::result::Result<(String, String), InputError> {
        if *left == InputSource::Stdin && *right == InputSource::Stdin {
            return Err(InputError::StdinUsedTwice);
        }

        let mut stdin = Some(stdin);
        let mut resolve = |source: &InputSource| -> std::result::Result<String, InputError> {
            match source {
                InputSource::File(path) => FileManager::read_text_file(path),
                InputSource::Text(text) => Ok(text.clone()),
                InputSource::Stdin => match stdin.take() {
                    Some(reader) => FileManager::read_text_from(reader),
                    None => Err(InputError::StdinUsedTwice),
                },
            }
        };

        let left_text = resolve(left)?;
        let right_text = resolve(right)?;
        Ok((left_text, right_text))
    }

    /// Compare two texts with the configured line break handling
    pub fn compare(&self, left: String, right: String) -> DiffReport {
        let mut session =
            DiffSession::with_inputs(left, right).with_line_breaks(self.config.diff.line_breaks);
        DiffReport::new(session.compare().to_vec())
    }

    /// Render a report in the configured output format.
    ///
    /// JSON output ignores the text-only settings (colour, line numbers,
    /// only changes, summary line).
    pub fn render_report(&self, report: &DiffReport, is_terminal: bool) -> Result<String> {
        let output = &self.config.output;

        match output.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize diff report to JSON"),
            OutputFormat::Text => {
                let mut text = render(&report.entries, &output.render_options(is_terminal));
                if output.show_summary && !report.entries.is_empty() {
                    text.push_str("\n\n");
                    text.push_str(&render_summary(&report.summary));
                }
                Ok(text)
            }
        }
    }

    /// Run a comparison, reading standard input if a side asks for it
    pub fn run<W: Write>(
        &self,
        left: &InputSource,
        right: &InputSource,
        out: &mut W,
        is_terminal: bool,
    ) -> Result<DiffReport> {
        self.run_with_stdin(left, right, std::io::stdin().lock(), out, is_terminal)
    }

    /// Run a comparison with an explicit reader standing in for standard input
    pub fn run_with_stdin<R: Read, W: Write>(
        &self,
        left: &InputSource,
        right: &InputSource,
        stdin: R,
        out: &mut W,
        is_terminal: bool,
    ) -> Result<DiffReport> {
        info!("Comparing {} with {}", left.describe(), right.describe());

        let (left_text, right_text) = self.resolve_inputs(left, right, stdin)?;
        let report = self.compare(left_text, right_text);

        let rendered = self.render_report(&report, is_terminal)?;
        writeln!(out, "{}", rendered).context("Failed to write diff output")?;
        out.flush().context("Failed to flush diff output")?;

        debug!(
            "Comparison finished: {} added, {} removed, {} unchanged",
            report.summary.added, report.summary.removed, report.summary.unchanged
        );

        Ok(report)
    }
}
