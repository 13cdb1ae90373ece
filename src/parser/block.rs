//! Parse one goroutine dump block into a `StackRecord`.
//!
//! A block looks like:
//!
//! ```text
//! goroutine 18 [chan receive, 5 minutes]:
//! main.worker(0xc000012345)
//! /src/app/worker.go:42 +0x65
//! created by main.start in goroutine 1
//! /src/app/main.go:17 +0x1d
//! ```
//!
//! Interior lines come in call/location pairs, one pair per frame.

use super::grammar::{match_call, match_created_by, match_header, match_location, Creator, GrammarOptions};
use super::schema::{CreatedBy, Frame, StackRecord};
use crate::utils::config::MIN_BLOCK_LINES;
use crate::utils::error::ParseError;

/// Parse trimmed, non-empty block lines into a record
///
/// **Public** - main entry point for block parsing
///
/// # Errors
/// * `ParseError::TooFewLines` - fewer than three lines
/// * `ParseError::NoMatch` - a line does not match its expected grammar
/// * `ParseError::UnpairedFrameLines` - interior lines do not form call/location pairs
/// * `ParseError::InvalidNumber` - a numeric field does not fit in a `u64`
pub fn parse_block<S: AsRef<str>>(
    lines: &[S],
    options: &GrammarOptions,
) -> Result<StackRecord, ParseError> {
    let n = lines.len();
    if n < MIN_BLOCK_LINES {
        return Err(ParseError::TooFewLines {
            found: n,
            min: MIN_BLOCK_LINES,
        });
    }

    let header = match_header(lines[0].as_ref())?;
    let creator = match_created_by(lines[n - 2].as_ref(), options)?;
    let created_at = match_location(lines[n - 1].as_ref(), options.offset_radix)?;

    let created_by = match creator {
        Creator::EntryPoint => CreatedBy {
            function: None,
            goroutine: None,
            path: created_at.path,
            line: created_at.line,
            offset: created_at.offset,
        },
        Creator::Function { name, goroutine } => CreatedBy {
            function: Some(name),
            goroutine: Some(goroutine),
            path: created_at.path,
            line: created_at.line,
            offset: created_at.offset,
        },
    };

    let interior = &lines[1..n - 2];
    if interior.len() % 2 != 0 {
        return Err(ParseError::UnpairedFrameLines {
            count: interior.len(),
        });
    }

    let frames = interior
        .chunks_exact(2)
        .map(|pair| parse_frame(pair[0].as_ref(), pair[1].as_ref(), options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StackRecord::new(
        header.id,
        header.status,
        header.waiting_minutes,
        frames,
        created_by,
    ))
}

fn parse_frame(call_line: &str, location_line: &str, options: &GrammarOptions) -> Result<Frame, ParseError> {
    let call = match_call(call_line)?;
    let location = match_location(location_line, options.offset_radix)?;

    Ok(Frame {
        function: call.function,
        args: call.args,
        path: location.path,
        line: location.line,
        offset: location.offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Grammar;

    const BLOCK: &[&str] = &[
        "goroutine 1 [chan receive, 5 minutes]:",
        "main.foo(0x1)",
        "/a/b.go:10 +0x5",
        "created by main.bar in goroutine 0",
        "/a/c.go:20 +0x1",
    ];

    #[test]
    fn test_parse_block() {
        let record = parse_block(BLOCK, &GrammarOptions::default()).unwrap();

        assert_eq!(record.thread_id, 1);
        assert_eq!(record.status(), "chan receive");
        assert_eq!(record.waiting_minutes, 5);
        assert_eq!(record.frames().len(), 1);
        assert_eq!(record.frames()[0].function, "main.foo");
        assert_eq!(record.frames()[0].args, "0x1");
        assert_eq!(record.frames()[0].path, "/a/b.go");
        assert_eq!(record.frames()[0].line, 10);
        assert_eq!(record.frames()[0].offset, Some(5));
        assert_eq!(record.created_by.function.as_deref(), Some("main.bar"));
        assert_eq!(record.created_by.goroutine, Some(0));
        assert_eq!(record.created_by.line, 20);
    }

    #[test]
    fn test_parse_block_is_deterministic() {
        let options = GrammarOptions::default();
        let a = parse_block(BLOCK, &options).unwrap();
        let b = parse_block(BLOCK, &options).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.grouping_key(), b.grouping_key());
    }

    #[test]
    fn test_minimal_block_has_no_frames() {
        let lines = ["goroutine 1 [running]:", "main.main()", "/app/main.go:9 +0x1d"];
        let record = parse_block(&lines, &GrammarOptions::default()).unwrap();

        assert!(record.frames().is_empty());
        assert_eq!(record.created_by.function, None);
        assert_eq!(record.created_by.display_name(), "-");
    }

    #[test]
    fn test_too_few_lines() {
        let lines = ["goroutine 1 [running]:", "main.main()"];
        let err = parse_block(&lines, &GrammarOptions::default()).unwrap_err();
        assert_eq!(err, ParseError::TooFewLines { found: 2, min: 3 });
    }

    #[test]
    fn test_odd_interior_lines() {
        let lines = [
            "goroutine 1 [running]:",
            "main.foo()",
            "/a/b.go:10 +0x5",
            "main.bar()",
            "created by main.baz in goroutine 1",
            "/a/c.go:20 +0x1",
        ];
        let err = parse_block(&lines, &GrammarOptions::default()).unwrap_err();
        assert_eq!(err, ParseError::UnpairedFrameLines { count: 3 });
    }

    #[test]
    fn test_bad_created_by_line() {
        let lines = [
            "goroutine 1 [running]:",
            "main.foo()",
            "/a/b.go:10 +0x5",
            "spawned by main.baz",
            "/a/c.go:20 +0x1",
        ];
        let err = parse_block(&lines, &GrammarOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::NoMatch {
                expected: Grammar::CreatedBy,
                ..
            }
        ));
    }

    #[test]
    fn test_swapped_frame_lines() {
        let lines = [
            "goroutine 1 [running]:",
            "/a/b.go:10 +0x5",
            "main.foo()",
            "created by main.baz in goroutine 1",
            "/a/c.go:20 +0x1",
        ];
        let err = parse_block(&lines, &GrammarOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::NoMatch {
                expected: Grammar::Call,
                ..
            }
        ));
    }
}
