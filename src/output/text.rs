//! Plain text report.
//!
//! Format per group:
//!
//! ```text
//! count:2 waiting:3-7 status:chan receive
//! worker.go:42  main.worker
//! main.go:17    main.start
//!
//! ```

use super::options::{select_groups, ReportOptions};
use crate::aggregator::{Digest, Group};
use crate::utils::config::COLUMN_PADDING;
use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Render the whole report as lines (without trailing newlines)
///
/// **Public** - used by `write_text_report` and tests
pub fn render_report(digest: &Digest, options: &ReportOptions) -> Vec<String> {
    let selected = select_groups(&digest.groups, options);
    debug!(
        "Rendering {} of {} groups (min count {})",
        selected.len(),
        digest.groups.len(),
        options.min_count
    );

    let mut lines = Vec::new();
    for group in selected {
        lines.extend(render_group(group));
        lines.push(String::new());
    }

    if options.print_errors {
        lines.push(format!("errors:{}", digest.error_count));
    }

    lines
}

/// Write the text report
pub fn write_text_report<W: Write>(
    writer: &mut W,
    digest: &Digest,
    options: &ReportOptions,
) -> Result<(), OutputError> {
    for line in render_report(digest, options) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Summary line followed by one aligned line per frame
fn render_group(group: &Group) -> Vec<String> {
    let mut lines = vec![summary_line(group)];

    let rows: Vec<(String, &str)> = group
        .representative
        .frames()
        .iter()
        .map(|f| (format!("{}:{}", base_name(&f.path), f.line), f.function.as_str()))
        .collect();

    lines.extend(align_columns(&rows));
    lines
}

pub fn summary_line(group: &Group) -> String {
    format!(
        "count:{} waiting:{}-{} status:{}",
        group.count,
        group.min_waiting,
        group.max_waiting,
        group.statuses.join(", ")
    )
}

/// Pad the first column to the widest cell plus `COLUMN_PADDING`
pub fn align_columns<L: AsRef<str>, R: AsRef<str>>(rows: &[(L, R)]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|(left, _)| left.as_ref().chars().count())
        .max()
        .unwrap_or(0)
        + COLUMN_PADDING;

    rows.iter()
        .map(|(left, right)| format!("{:<width$}{}", left.as_ref(), right.as_ref(), width = width))
        .collect()
}

/// Last path component, or the whole path when there is none
pub fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
