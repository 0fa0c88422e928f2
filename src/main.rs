// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error, warn};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use linecmp::app_config::{self, ColorMode, Config, OutputFormat};
use linecmp::app_controller::{EXIT_FAILURE, exit_status};
use linecmp::file_utils::FileManager;
use linecmp::{Controller, DiffReport, InputSource, LineBreaks};

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI Wrapper for ColorMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliColorMode {
    Auto,
    Always,
    Never,
}

impl From<CliColorMode> for ColorMode {
    fn from(cli_mode: CliColorMode) -> Self {
        match cli_mode {
            CliColorMode::Auto => ColorMode::Auto,
            CliColorMode::Always => ColorMode::Always,
            CliColorMode::Never => ColorMode::Never,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two texts line by line (default command)
    Compare(CompareArgs),

    /// Generate shell completions for linecmp
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
struct CompareArgs {
    /// Original then changed text file, '-' for standard input
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Use this text as the original; positional inputs then fill the other side
    #[arg(long)]
    left_text: Option<String>,

    /// Use this text as the changed side; positional inputs then fill the other side
    #[arg(long)]
    right_text: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<CliOutputFormat>,

    /// When to colour added and removed rows
    #[arg(long, value_enum)]
    color: Option<CliColorMode>,

    /// Only print added and removed rows
    #[arg(long)]
    only_changes: bool,

    /// Do not prefix rows with their position
    #[arg(long)]
    no_line_numbers: bool,

    /// Print per-kind counts after the rows
    #[arg(long, conflicts_with = "no_summary")]
    summary: bool,

    /// Do not print per-kind counts
    #[arg(long)]
    no_summary: bool,

    /// Drop a trailing carriage return from every line before comparing
    #[arg(long)]
    normalize_line_endings: bool,

    /// Write the result to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Write a default configuration file if none exists
    #[arg(long)]
    init_config: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// linecmp - positional line diff
///
/// Compares two texts line by line and marks every line as unchanged,
/// added or removed.
#[derive(Parser, Debug)]
#[command(name = "linecmp")]
#[command(version)]
#[command(about = "Line-by-line text comparison")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "linecmp compares two texts position by position and marks every line.

EXAMPLES:
    linecmp old.txt new.txt                     # Compare two files
    linecmp --only-changes old.txt new.txt      # Hide unchanged lines
    cat new.txt | linecmp old.txt -             # Read one side from standard input
    linecmp --left-text 'a' --right-text 'b'    # Compare inline text
    linecmp --format json old.txt new.txt       # Machine-readable output
    linecmp completions bash > linecmp.bash     # Generate bash completions

EXIT STATUS:
    0 when the texts are identical, 1 when they differ, 2 on error.

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a different
    config file with --config-path. Use --init-config to write a default one.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    compare: CompareArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "\x1B[1;31m"),
            Level::Warn => ("🚧", "\x1B[1;33m"),
            Level::Info => (" ", "\x1B[1;32m"),
            Level::Debug => ("🔍", "\x1B[1;36m"),
            Level::Trace => ("📋", "\x1B[1;35m"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Start at trace so the level set later through log::set_max_level is never capped
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::from(EXIT_FAILURE);
    }
    log::set_max_level(LevelFilter::Info);

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "linecmp", &mut std::io::stdout());
            return ExitCode::SUCCESS;
        }
        Some(Commands::Compare(args)) => run_compare(args),
        // Default behavior - use top-level args
        None => run_compare(cli.compare),
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }

    ExitCode::from(exit_status(&result))
}

/// Load the config file, or defaults when it does not exist
fn load_config(options: &CompareArgs) -> Result<Config> {
    let config_path = Path::new(&options.config_path);

    if config_path.exists() {
        return Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file: {}", options.config_path));
    }

    let config = Config::default();
    if options.init_config {
        warn!("Config file not found at '{}', creating default config.", options.config_path);
        config.save(config_path)?;
    } else {
        debug!("Config file not found at '{}', using defaults.", options.config_path);
    }

    Ok(config)
}

/// Override config values with command line options
fn apply_overrides(config: &mut Config, options: &CompareArgs) {
    if let Some(format) = &options.format {
        config.output.format = format.clone().into();
    }
    if let Some(color) = &options.color {
        config.output.color = color.clone().into();
    }
    if options.only_changes {
        config.output.only_changes = true;
    }
    if options.no_line_numbers {
        config.output.line_numbers = false;
    }
    if options.summary {
        config.output.show_summary = true;
    }
    if options.no_summary {
        config.output.show_summary = false;
    }
    if options.normalize_line_endings {
        config.diff.line_breaks = LineBreaks::Normalize;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}

/// Run a comparison and return its report
fn run_compare(options: CompareArgs) -> Result<DiffReport> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = load_config(&options)?;
    apply_overrides(&mut config, &options);
    log::set_max_level(config.log_level.to_level_filter());

    let (left, right) = InputSource::assign(
        options.left_text.as_deref(),
        options.right_text.as_deref(),
        &options.inputs,
    )?;

    let controller = Controller::with_config(config);

    let report = match &options.output {
        Some(path) => {
            let mut buffer = Vec::new();
            let report = controller.run(&left, &right, &mut buffer, false)?;
            let rendered =
                String::from_utf8(buffer).context("Rendered output is not valid UTF-8")?;
            FileManager::write_to_file(path, &rendered)?;
            debug!("Wrote comparison to {:?}", path);
            report
        }
        None => {
            let stdout = std::io::stdout();
            let is_terminal = stdout.is_terminal();
            let mut out = stdout.lock();
            controller.run(&left, &right, &mut out, is_terminal)?
        }
    };

    Ok(report)
}
