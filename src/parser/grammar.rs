//! Line grammars for goroutine dump blocks.
//!
//! Each matcher takes one trimmed line and returns either the extracted
//! fields or a `ParseError` naming the line and the grammar it failed.
//! Numeric fields are converted here too, so a successful match is fully typed.

use crate::utils::config::DEFAULT_ENTRY_POINT;
use crate::utils::error::{Grammar, ParseError};
use regex::Regex;
use std::sync::LazyLock;

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^goroutine (\d+) \[([^,\]]+)(?:, (\d+) minutes)?\]:$")
        .expect("Invalid regex pattern")
});

static CREATED_BY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^created by (.+) in goroutine (\d+)$").expect("Invalid regex pattern")
});

static HEX_LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+):(\d+)(?: \+0x([0-9a-f]+))?$").expect("Invalid regex pattern")
});

static INFERRED_LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+):(\d+)(?: \+([0-9A-Za-z_]+))?$").expect("Invalid regex pattern")
});

static CALL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\((.*)\)$").expect("Invalid regex pattern"));

/// How the optional ` +<offset>` suffix of a location line is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OffsetRadix {
    /// ` +0x` followed by lowercase hex digits
    #[default]
    Hex,
    /// Base inferred from the prefix like Go's `ParseUint(s, 0, 64)`:
    /// `0x` hex, `0o` or a bare leading `0` octal, `0b` binary, otherwise decimal
    Inferred,
}

/// Grammar variants accepted by the block parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarOptions {
    pub offset_radix: OffsetRadix,

    /// Literal created-by line for the entry point goroutine (`None` disables it)
    pub entry_point: Option<String>,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            offset_radix: OffsetRadix::Hex,
            entry_point: Some(DEFAULT_ENTRY_POINT.to_string()),
        }
    }
}

/// Fields of a `goroutine N [status]:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u64,
    pub status: String,
    pub waiting_minutes: u64,
}

/// Fields of a created-by line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Creator {
    EntryPoint,
    Function { name: String, goroutine: u64 },
}

/// Fields of a `path:line +offset` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub line: u64,
    pub offset: Option<u64>,
}

/// Fields of a `function(args)` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub function: String,
    pub args: String,
}

pub fn match_header(line: &str) -> Result<Header, ParseError> {
    let caps = captures(&HEADER_PATTERN, line, Grammar::Header)?;

    let waiting_minutes = match caps.get(3) {
        Some(m) => parse_decimal("waiting minutes", m.as_str(), line)?,
        None => 0,
    };

    Ok(Header {
        id: parse_decimal("goroutine id", &caps[1], line)?,
        status: caps[2].to_string(),
        waiting_minutes,
    })
}

pub fn match_created_by(line: &str, options: &GrammarOptions) -> Result<Creator, ParseError> {
    if options.entry_point.as_deref() == Some(line) {
        return Ok(Creator::EntryPoint);
    }

    let caps = captures(&CREATED_BY_PATTERN, line, Grammar::CreatedBy)?;
    Ok(Creator::Function {
        name: caps[1].to_string(),
        goroutine: parse_decimal("creator goroutine id", &caps[2], line)?,
    })
}

pub fn match_location(line: &str, radix: OffsetRadix) -> Result<Location, ParseError> {
    let pattern = match radix {
        OffsetRadix::Hex => &HEX_LOCATION_PATTERN,
        OffsetRadix::Inferred => &INFERRED_LOCATION_PATTERN,
    };
    let caps = captures(pattern, line, Grammar::Location)?;

    let offset = match caps.get(3) {
        Some(m) => Some(parse_offset(m.as_str(), radix, line)?),
        None => None,
    };

    Ok(Location {
        path: caps[1].to_string(),
        line: parse_decimal("line number", &caps[2], line)?,
        offset,
    })
}

pub fn match_call(line: &str) -> Result<Call, ParseError> {
    let caps = captures(&CALL_PATTERN, line, Grammar::Call)?;
    Ok(Call {
        function: caps[1].to_string(),
        args: caps[2].to_string(),
    })
}

fn captures<'l>(
    pattern: &Regex,
    line: &'l str,
    expected: Grammar,
) -> Result<regex::Captures<'l>, ParseError> {
    pattern.captures(line).ok_or_else(|| ParseError::NoMatch {
        line: line.to_string(),
        expected,
    })
}

fn parse_decimal(field: &'static str, value: &str, line: &str) -> Result<u64, ParseError> {
    parse_radix(field, value, 10, line)
}

/// Parse an offset token; for `Hex` the `0x` prefix is already stripped by the pattern
fn parse_offset(token: &str, radix: OffsetRadix, line: &str) -> Result<u64, ParseError> {
    match radix {
        OffsetRadix::Hex => parse_radix("offset", token, 16, line),
        OffsetRadix::Inferred => {
            let (digits, base) = split_base_prefix(token);
            let misplaced_underscore = (base == 10 && digits.starts_with('_'))
                || digits.ends_with('_')
                || digits.contains("__");
            if misplaced_underscore {
                // underscores only go between digits or after a base prefix
                return parse_radix("offset", token, base, line);
            }
            parse_radix("offset", &digits.replace('_', ""), base, line)
        }
    }
}

/// Split a Go integer literal into its digits and base
fn split_base_prefix(token: &str) -> (&str, u32) {
    let bytes = token.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (token, 10);
    }
    match bytes[1] {
        b'x' | b'X' => (&token[2..], 16),
        b'o' | b'O' => (&token[2..], 8),
        b'b' | b'B' => (&token[2..], 2),
        _ => (&token[1..], 8),
    }
}

fn parse_radix(field: &'static str, value: &str, base: u32, line: &str) -> Result<u64, ParseError> {
    u64::from_str_radix(value, base).map_err(|source| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
        line: line.to_string(),
        source,
    })
}
