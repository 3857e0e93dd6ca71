//! Before/after counts for a human reviewer.
//!
//! The entry count is a heuristic. It matches lines shaped like a key that
//! opens an object at end of line (`  key: {`) or holds an empty object
//! (`  key: {},`). Inline nested objects are not counted, and deeper nested
//! objects that open at end of line are.
//!
//! Block line counts are the lines a replaced region spans after the line
//! it starts on. With the `lines` strategy that is the body, closing brace
//! and blank separator below the declaration line; with the `pattern`
//! strategy it is the body lines only.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::locate::{Boundaries, LineSpan};

static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]+\w+: \{(?:\},?)?\r?$").expect("Invalid entry regex")
});

/// Count lines that look like a dictionary key opening a block.
///
/// # Example
/// ```
/// use splice_blocks::count_entries;
///
/// assert_eq!(count_entries("{\n  a: {\n    name: 'A',\n  },\n  b: {},\n}"), 2);
/// ```
pub fn count_entries(text: &str) -> usize {
    ENTRY_REGEX.find_iter(text).count()
}

/// Size figures for one full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub entries: usize,
    pub bytes: usize,
    pub lines: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            entries: count_entries(text),
            bytes: text.len(),
            lines: text.lines().count(),
        }
    }
}

/// Comparison of the target text before and after splicing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub old: TextStats,
    pub new: TextStats,
    /// Lines of the target that were replaced.
    pub replaced: LineSpan,
    pub old_block_lines: usize,
    pub new_block_lines: usize,
    /// The spliced text is byte-identical to the original.
    pub unchanged: bool,
}

impl Report {
    /// Compare `old_text` with `new_text`, where `new_text` holds
    /// `replacement` at `boundaries.start`.
    ///
    /// # Errors
    /// Returns `Error::InvalidBoundaries` if `boundaries` does not fit
    /// `old_text` or the replaced region does not fit `new_text`.
    pub fn compare(
        old_text: &str,
        new_text: &str,
        boundaries: Boundaries,
        replacement: &str,
    ) -> Result<Self> {
        boundaries.validate(old_text)?;
        let inserted = Boundaries::new(boundaries.start, boundaries.start + replacement.len());
        inserted.validate(new_text)?;

        let replaced = boundaries.line_span(old_text);
        let new_span = inserted.line_span(new_text);
        Ok(Self {
            old: TextStats::of(old_text),
            new: TextStats::of(new_text),
            replaced,
            old_block_lines: replaced.last.saturating_sub(replaced.first),
            new_block_lines: new_span.last.saturating_sub(new_span.first),
            unchanged: old_text == new_text,
        })
    }

    /// Signed change in entry count.
    pub fn entry_delta(&self) -> i64 {
        self.new.entries as i64 - self.old.entries as i64
    }

    /// True when splicing left the text byte-identical.
    pub fn is_unchanged(&self) -> bool {
        self.unchanged
    }
}
