//! Parse a batch of blocks and group the survivors.
//!
//! A block that fails to parse is logged and counted, never fatal.

use super::grouping::{group_records, Group};
use crate::parser::block::parse_block;
use crate::parser::grammar::GrammarOptions;
use crate::parser::input::split_blocks;
use log::{debug, warn};

/// Result of digesting one dump
#[derive(Debug, Clone, Default)]
pub struct Digest {
    /// Groups in ascending key order
    pub groups: Vec<Group>,

    /// Blocks that failed to parse
    pub error_count: usize,

    /// Blocks submitted, parsed or not
    pub total_blocks: usize,
}

impl Digest {
    /// Goroutines that parsed successfully
    pub fn parsed_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

/// Split dump text into blocks and digest them
///
/// **Public** - main entry point for the parse/group pipeline
pub fn digest_text(text: &str, options: &GrammarOptions) -> Digest {
    digest_blocks(&split_blocks(text), options)
}

/// Parse each block, count failures, and group the parsed records
pub fn digest_blocks<S: AsRef<str>>(blocks: &[Vec<S>], options: &GrammarOptions) -> Digest {
    let mut records = Vec::with_capacity(blocks.len());
    let mut error_count = 0;

    for (index, block) in blocks.iter().enumerate() {
        match parse_block(block, options) {
            Ok(record) => records.push(record),
            Err(e) => {
                debug!("Skipping block {}: {}", index, e);
                error_count += 1;
            }
        }
    }

    if error_count > 0 {
        warn!("{} of {} blocks failed to parse", error_count, blocks.len());
    }

    Digest {
        groups: group_records(records),
        error_count,
        total_blocks: blocks.len(),
    }
}
