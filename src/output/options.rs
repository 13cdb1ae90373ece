//! Report options shared by all output formats.

use crate::aggregator::Group;

/// Order in which groups are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GroupOrder {
    /// Ascending grouping key
    #[default]
    Key,
    /// Largest groups first, ties in key order
    Count,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Aligned plain text
    #[default]
    Text,
    /// JSON document
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Skip groups with fewer members than this
    pub min_count: usize,

    /// Append the parse failure count to the report
    pub print_errors: bool,

    pub order: GroupOrder,
}

/// Apply the minimum-count filter and the requested ordering
///
/// Input groups are expected in ascending key order.
pub fn select_groups<'g>(groups: &'g [Group], options: &ReportOptions) -> Vec<&'g Group> {
    let mut selected: Vec<&Group> = groups
        .iter()
        .filter(|g| g.count >= options.min_count)
        .collect();

    if options.order == GroupOrder::Count {
        selected.sort_by(|a, b| b.count.cmp(&a.count));
    }

    selected
}
