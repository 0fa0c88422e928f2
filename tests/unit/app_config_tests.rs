/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use linecmp::LineBreaks;
use linecmp::app_config::{ColorMode, Config, LogLevel, OutputFormat};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.output.line_numbers);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(!config.output.only_changes);
    assert!(config.output.show_summary);
    assert_eq!(config.diff.line_breaks, LineBreaks::Preserve);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// JSON output with forced colour is an accepted combination
#[test]
fn test_from_file_withJsonAndAlwaysColor_shouldLoad() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "output": { "format": "json", "color": "always" } }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.color, ColorMode::Always);

    Ok(())
}

/// Missing fields fall back to defaults
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{
            "output": { "format": "json", "only_changes": true },
            "diff": { "line_breaks": "normalize" }
        }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.only_changes);
    assert!(config.output.line_numbers);
    assert_eq!(config.diff.line_breaks, LineBreaks::Normalize);
    assert_eq!(config.log_level, LogLevel::Info);

    Ok(())
}

/// Invalid JSON is reported as a parse error
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let error = Config::from_file(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));

    Ok(())
}

/// Saved configuration loads back unchanged
#[test]
fn test_save_thenLoad_shouldKeepValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("conf.json");

    let mut config = Config::default();
    config.output.color = ColorMode::Never;
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.output.color, ColorMode::Never);
    assert_eq!(loaded.log_level, LogLevel::Debug);

    Ok(())
}

/// Render options follow the colour mode and terminal state
#[test]
fn test_render_options_withAutoColor_shouldFollowTerminal() {
    let config = Config::default();

    assert!(config.output.render_options(true).color);
    assert!(!config.output.render_options(false).color);
}
