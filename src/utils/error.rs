//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Line grammars a dump block is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `goroutine <id> [<status>(, <n> minutes)?]:`
    Header,
    /// `<entry point>` or `created by <creator> in goroutine <id>`
    CreatedBy,
    /// `<path>:<line>( +<offset>)?`
    Location,
    /// `<function>(<args>)`
    Call,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grammar::Header => "goroutine <id> [<status>(, <n> minutes)?]:",
            Grammar::CreatedBy => "<entry point> | created by <creator> in goroutine <id>",
            Grammar::Location => "<path>:<line>( +<offset>)?",
            Grammar::Call => "<function>(<args>)",
        };
        f.write_str(s)
    }
}

/// Errors that can occur while parsing a single dump block
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("not enough lines: found {found}, need at least {min}")]
    TooFewLines { found: usize, min: usize },

    #[error("no match: {line:?} (expected {expected})")]
    NoMatch { line: String, expected: Grammar },

    #[error("odd number of frame lines ({count}): call and location lines must come in pairs")]
    UnpairedFrameLines { count: usize },

    #[error("invalid {field} {value:?} in {line:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        line: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors that can occur while reading the raw dump
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while writing the report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
