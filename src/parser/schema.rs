//! Parsed representations of a goroutine dump block.

use crate::aggregator::canonical::grouping_key;

/// One call-stack entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Function name, including package and receiver qualifiers
    pub function: String,

    /// Raw argument list between the parentheses
    pub args: String,

    /// Source file path
    pub path: String,

    /// Source line
    pub line: u64,

    /// Program counter offset, if reported
    pub offset: Option<u64>,
}

/// Where a goroutine was spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBy {
    /// Creator function, or `None` for the process entry point
    pub function: Option<String>,

    /// Goroutine that ran the creator, if reported
    pub goroutine: Option<u64>,

    pub path: String,
    pub line: u64,
    pub offset: Option<u64>,
}

impl CreatedBy {
    /// Display name for the creator (`-` for the entry point)
    pub fn display_name(&self) -> &str {
        self.function.as_deref().unwrap_or("-")
    }
}

/// One parsed goroutine
///
/// The grouping key is computed on construction from the status and
/// frames, which are read-only after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRecord {
    pub thread_id: u64,
    status: String,
    pub waiting_minutes: u64,

    /// Call chain, outermost (suspension point) first
    frames: Vec<Frame>,
    pub created_by: CreatedBy,

    key: String,
}

impl StackRecord {
    pub fn new(
        thread_id: u64,
        status: String,
        waiting_minutes: u64,
        frames: Vec<Frame>,
        created_by: CreatedBy,
    ) -> Self {
        let key = grouping_key(&status, &frames);
        Self {
            thread_id,
            status,
            waiting_minutes,
            frames,
            created_by,
            key,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Call chain, outermost (suspension point) first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Canonical identity of this stack (status and function names only)
    pub fn grouping_key(&self) -> &str {
        &self.key
    }
}
