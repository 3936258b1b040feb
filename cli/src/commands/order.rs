use crate::OutputFormat;
use crate::output::{json, text};
use anyhow::{Context, Result};
use mode_order::{ParseConfig, open_report};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

pub fn run(
    path: &Path,
    format: OutputFormat,
    validate: bool,
    verbose: bool,
    marker: Option<String>,
    config_path: Option<String>,
) -> Result<ExitCode> {
    let config = build_config(config_path.as_deref(), marker, validate)?;

    let report = open_report(path, &config)
        .with_context(|| format!("Failed to analyze report: {}", path.display()))?;
    debug!(
        n = report.n(),
        permutation = ?report.is_permutation(),
        "derived mode order"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => text::write_text_report(&mut handle, &report, verbose)?,
        OutputFormat::Json => json::write_json_report(&mut handle, &report)?,
    }
    handle.flush()?;

    // A non-permutation is only a warning.
    Ok(ExitCode::SUCCESS)
}

fn build_config(
    config_path: Option<&str>,
    marker: Option<String>,
    validate: bool,
) -> Result<ParseConfig> {
    let mut config = match config_path {
        Some(p) => {
            let raw = fs::read_to_string(p)
                .with_context(|| format!("Failed to read config file: {}", p))?;
            serde_json::from_str::<ParseConfig>(&raw)
                .with_context(|| format!("Failed to parse config file: {}", p))?
        }
        None => ParseConfig::default(),
    };

    if let Some(marker) = marker {
        config.marker = marker;
    }
    if !validate {
        config.validate_permutation = false;
    }

    config.validate().context("Invalid parse configuration")?;
    Ok(config)
}
