//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Created-by line that marks the process entry point goroutine
pub const DEFAULT_ENTRY_POINT: &str = "main.main()";

/// Separator between grouping key components.
// Input lines are split on newlines, so no status or function name can contain one.
pub const KEY_SEPARATOR: char = '\n';

/// Smallest legal block: header, created-by line, created-by location
pub const MIN_BLOCK_LINES: usize = 3;

// Column alignment for frame lines (matches a tab writer with padding 2)
pub const COLUMN_PADDING: usize = 2;

/// Input path that means "read from stdin"
pub const STDIN_PATH: &str = "-";
