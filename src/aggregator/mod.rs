//! Aggregation of parsed stack records.
//!
//! This module turns parsed records into:
//! - A canonical grouping key per record
//! - Groups of records sharing that key, with count and wait-time range
//! - A digest of a whole dump, including the parse failure count

pub mod canonical;
pub mod digest;
pub mod grouping;

// Re-export main types and functions
pub use canonical::grouping_key;
pub use digest::{digest_blocks, digest_text, Digest};
pub use grouping::{group_records, Group};
