//! Goroutine dump parsing.
//!
//! This module handles:
//! - Reading the raw dump and splitting it into blocks
//! - Matching each line against the dump grammar
//! - Building typed stack records

pub mod block;
pub mod grammar;
pub mod input;
pub mod schema;

// Re-export main types
pub use block::parse_block;
pub use grammar::{GrammarOptions, OffsetRadix};
pub use input::{read_input, split_blocks};
pub use schema::{CreatedBy, Frame, StackRecord};
