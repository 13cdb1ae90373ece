//! Group parsed records that share a grouping key.
//!
//! Records are sorted by key, then split into maximal runs of equal key.
//! Each run becomes one `Group` carrying its count, wait-time range and
//! the distinct statuses seen.

use crate::parser::schema::StackRecord;
use log::debug;
use std::collections::BTreeSet;

/// All records sharing one grouping key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Shared grouping key
    pub key: String,

    /// Number of goroutines in this group (always > 0)
    pub count: usize,

    /// Shortest wait in minutes
    pub min_waiting: u64,

    /// Longest wait in minutes
    pub max_waiting: u64,

    /// Distinct statuses, sorted
    pub statuses: Vec<String>,

    /// First member after sorting; its frames are shown in the report
    pub representative: StackRecord,
}

/// Sort records by grouping key and collapse equal keys into groups
///
/// **Public** - main entry point for aggregation
///
/// Groups come back in ascending key order. The sort is stable, so the
/// representative of each group is its earliest member in input order.
pub fn group_records(mut records: Vec<StackRecord>) -> Vec<Group> {
    debug!("Grouping {} records", records.len());

    records.sort_by(|a, b| a.grouping_key().cmp(b.grouping_key()));

    let groups: Vec<Group> = records
        .chunk_by(|a, b| a.grouping_key() == b.grouping_key())
        .filter_map(build_group)
        .collect();

    debug!("Built {} distinct groups", groups.len());

    groups
}

/// Summarize one run of equal-key records
///
/// **Private** - returns `None` only for an empty run
fn build_group(run: &[StackRecord]) -> Option<Group> {
    let first = run.first()?;

    let min_waiting = run.iter().map(|r| r.waiting_minutes).min().unwrap_or(0);
    let max_waiting = run.iter().map(|r| r.waiting_minutes).max().unwrap_or(0);

    let statuses: BTreeSet<&str> = run.iter().map(|r| r.status()).collect();

    Some(Group {
        key: first.grouping_key().to_string(),
        count: run.len(),
        min_waiting,
        max_waiting,
        statuses: statuses.into_iter().map(str::to_string).collect(),
        representative: first.clone(),
    })
}
