//! Report writers.
//!
//! This module handles rendering digests in various formats:
//! - Aligned plain text
//! - JSON documents

pub mod json;
pub mod options;
pub mod text;

// Re-export main functions
pub use json::{build_json_report, write_json_report, JsonReport};
pub use options::{select_groups, GroupOrder, ReportFormat, ReportOptions};
pub use text::{render_report, write_text_report};
