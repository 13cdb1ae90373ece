//! Canonical grouping key for a stack.
//!
//! Key format: `status\nfn1\nfn2\n...\n`
//!
//! Only the status and the ordered function names take part. Goroutine ids,
//! wait times, arguments, paths, lines and offsets vary between otherwise
//! identical stacks and are left out.

use crate::parser::schema::Frame;
use crate::utils::config::KEY_SEPARATOR;

/// Build the grouping key from a status and its call chain
///
/// **Public** - called once per record by `StackRecord::new`
pub fn grouping_key(status: &str, frames: &[Frame]) -> String {
    let len = status.len() + frames.iter().map(|f| f.function.len() + 1).sum::<usize>() + 1;
    let mut key = String::with_capacity(len);

    key.push_str(status);
    key.push(KEY_SEPARATOR);
    for frame in frames {
        key.push_str(&frame.function);
        key.push(KEY_SEPARATOR);
    }

    key
}
