//! gostack-digest
//!
//! Groups goroutine stack dumps by call pattern so a hang with thousands
//! of goroutines reduces to a handful of distinct stacks.
//!
//! This crate provides the core implementation for the
//! `gostack-digest` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! curl -s localhost:6060/debug/pprof/goroutine?debug=2 | gostack-digest -c 5 -e
//! ```
//!
//! ## Library use
//!
//! ```
//! use gostack_digest::aggregator::digest_text;
//! use gostack_digest::parser::GrammarOptions;
//!
//! let dump = "goroutine 1 [running]:\nmain.main()\n\t/app/main.go:9 +0x1d\n";
//! let digest = digest_text(dump, &GrammarOptions::default());
//! assert_eq!(digest.groups.len(), 1);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
