//! JSON report writer.
//!
//! Produces a versioned document with the same groups, filter and
//! ordering as the text report.

use super::options::{select_groups, ReportOptions};
use super::text::base_name;
use crate::aggregator::{Digest, Group};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Top-level JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// ISO 8601 timestamp when the report was generated
    pub generated_at: String,

    pub total_blocks: usize,
    pub error_count: usize,
    pub groups: Vec<JsonGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonGroup {
    pub count: usize,
    pub min_waiting: u64,
    pub max_waiting: u64,
    pub statuses: Vec<String>,
    pub frames: Vec<JsonFrame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFrame {
    pub function: String,
    /// Base name of the source file
    pub file: String,
    pub line: u64,
}

impl From<&Group> for JsonGroup {
    fn from(group: &Group) -> Self {
        Self {
            count: group.count,
            min_waiting: group.min_waiting,
            max_waiting: group.max_waiting,
            statuses: group.statuses.clone(),
            frames: group
                .representative
                .frames()
                .iter()
                .map(|f| JsonFrame {
                    function: f.function.clone(),
                    file: base_name(&f.path).to_string(),
                    line: f.line,
                })
                .collect(),
        }
    }
}

/// Build the JSON report for a digest
pub fn build_json_report(digest: &Digest, options: &ReportOptions) -> JsonReport {
    JsonReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        total_blocks: digest.total_blocks,
        error_count: digest.error_count,
        groups: select_groups(&digest.groups, options)
            .into_iter()
            .map(JsonGroup::from)
            .collect(),
    }
}

/// Write the JSON report (pretty printed, trailing newline)
pub fn write_json_report<W: Write>(
    writer: &mut W,
    digest: &Digest,
    options: &ReportOptions,
) -> Result<(), OutputError> {
    let report = build_json_report(digest, options);
    debug!("Writing JSON report with {} groups", report.groups.len());

    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
