//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Reads the dump
//! 2. Splits and parses blocks
//! 3. Groups identical stacks
//! 4. Writes the report

use super::models::SummarizeArgs;
use crate::aggregator::{digest_text, Digest};
use crate::output::{write_json_report, write_text_report, ReportFormat};
use crate::parser::read_input;
use crate::utils::config::STDIN_PATH;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input cannot be read
/// * Report cannot be written
pub fn execute_summarize<W: Write>(args: &SummarizeArgs, writer: &mut W) -> Result<Digest> {
    let start_time = Instant::now();

    let text = read_input(args.input.as_deref()).context("Failed to read stack dump")?;

    debug!("Grammar: {:?}", args.grammar);
    let digest = digest_text(&text, &args.grammar);

    info!(
        "Parsed {} of {} blocks into {} groups in {:.2?}",
        digest.parsed_count(),
        digest.total_blocks,
        digest.groups.len(),
        start_time.elapsed()
    );

    let options = args.report_options();
    let written = match args.format {
        ReportFormat::Text => write_text_report(writer, &digest, &options),
        ReportFormat::Json => write_json_report(writer, &digest, &options),
    };
    written.context("Failed to write report")?;

    Ok(digest)
}

/// Validate command arguments
///
/// **Public** - called before execution
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if let Some(path) = &args.input {
        if path.as_os_str() != STDIN_PATH && !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
    }

    if let Some(entry_point) = &args.grammar.entry_point {
        if entry_point.trim().is_empty() {
            anyhow::bail!("Entry point line cannot be empty");
        }
        if entry_point.trim() != entry_point {
            anyhow::bail!("Entry point line must not have surrounding whitespace");
        }
    }

    Ok(())
}
