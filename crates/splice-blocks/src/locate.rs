//! Boundary location in the target text.
//!
//! Two strategies are supported:
//!
//! - [`LocateStrategy::Pattern`]: the region starts right after the start
//!   marker and ends where `\n};` (followed by the end marker on a later
//!   line) begins. The declaration line and closing brace stay in place and
//!   only the inner content is replaced.
//! - [`LocateStrategy::Lines`]: the region starts at the first line
//!   beginning with the start marker and ends at the first line beginning
//!   with the end marker. The declaration, closing brace and blank
//!   separator are rewritten along with the content.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CONTENT_PATH, Error, Result};

/// How the [`Locator`] scans the target text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocateStrategy {
    /// Byte-offset scan; only the inner content is replaced.
    #[default]
    Pattern,
    /// Line-prefix scan; whole lines are replaced.
    Lines,
}

impl fmt::Display for LocateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => write!(f, "pattern"),
            Self::Lines => write!(f, "lines"),
        }
    }
}

impl FromStr for LocateStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pattern" => Ok(Self::Pattern),
            "lines" => Ok(Self::Lines),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'pattern' or 'lines')"
            )),
        }
    }
}

/// Half-open byte range `start..end` of the target text to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Boundaries {
    pub start: usize,
    pub end: usize,
}

impl Boundaries {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that the range is ordered, fits `text` and lands on UTF-8
    /// character boundaries.
    ///
    /// # Errors
    /// Returns `Error::InvalidBoundaries` otherwise.
    pub fn validate(&self, text: &str) -> Result<()> {
        let Self { start, end } = *self;
        if start > end
            || end > text.len()
            || !text.is_char_boundary(start)
            || !text.is_char_boundary(end)
        {
            return Err(Error::InvalidBoundaries {
                start,
                end,
                len: text.len(),
            });
        }
        Ok(())
    }

    /// The 1-based lines of `text` touched by this range.
    ///
    /// A range ending exactly at a line start does not include that line.
    /// Callers validate the range first.
    pub(crate) fn line_span(&self, text: &str) -> LineSpan {
        let first = text[..self.start].matches('\n').count() + 1;
        let before_end = &text[..self.end];
        let mut last = before_end.matches('\n').count();
        if !before_end.is_empty() && !before_end.ends_with('\n') {
            last += 1;
        }
        LineSpan { first, last }
    }
}

/// Inclusive, 1-based line range. `last < first` means no whole line was
/// covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    pub first: usize,
    pub last: usize,
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.first, self.last)
    }
}

/// Finds the region of the target text that the new block replaces.
#[derive(Debug, Clone)]
pub struct Locator {
    start_marker: String,
    end_marker: String,
    strategy: LocateStrategy,
    closing: Regex,
}

impl Locator {
    /// Build a locator from literal start and end markers.
    pub fn new(start_marker: &str, end_marker: &str, strategy: LocateStrategy) -> Result<Self> {
        let closing = Regex::new(&format!(r"\n\}};\s*\n\s*{}", regex::escape(end_marker)))?;
        Ok(Self {
            start_marker: start_marker.to_string(),
            end_marker: end_marker.to_string(),
            strategy,
            closing,
        })
    }

    /// Build a locator for the declaration `const <name> = {`.
    pub fn for_block(name: &str, end_marker: &str, strategy: LocateStrategy) -> Result<Self> {
        Self::new(&format!("const {name} = {{"), end_marker, strategy)
    }

    pub fn start_marker(&self) -> &str {
        &self.start_marker
    }

    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }

    pub fn strategy(&self) -> LocateStrategy {
        self.strategy
    }

    /// Locate the replacement region. The first occurrence of each marker
    /// wins.
    ///
    /// # Errors
    /// Returns `Error::BoundaryNotFound` if either marker is missing or the
    /// end lies before the start.
    pub fn locate(&self, text: &str) -> Result<Boundaries> {
        let (start, end) = match self.strategy {
            LocateStrategy::Pattern => (
                text.find(&self.start_marker)
                    .map(|idx| idx + self.start_marker.len()),
                self.closing.find(text).map(|m| m.start()),
            ),
            LocateStrategy::Lines => (
                line_starting_with(text, &self.start_marker),
                line_starting_with(text, &self.end_marker),
            ),
        };

        let boundaries = match (start, end) {
            (Some(start), Some(end)) if self.in_order(start, end) => Boundaries::new(start, end),
            _ => {
                return Err(Error::BoundaryNotFound {
                    path: PathBuf::from(CONTENT_PATH),
                    start,
                    end,
                });
            }
        };

        debug!(
            strategy = %self.strategy,
            start = boundaries.start,
            end = boundaries.end,
            "located block boundaries"
        );
        Ok(boundaries)
    }

    /// Frame extracted inner content so it fits the located region.
    pub fn replacement(&self, inner: &str) -> String {
        match self.strategy {
            LocateStrategy::Pattern => inner.to_string(),
            LocateStrategy::Lines => format!("{}{}\n}};\n\n", self.start_marker, inner),
        }
    }

    fn in_order(&self, start: usize, end: usize) -> bool {
        match self.strategy {
            LocateStrategy::Pattern => start <= end,
            LocateStrategy::Lines => start < end,
        }
    }
}

/// Byte offset of the first line that begins with `prefix`.
fn line_starting_with(text: &str, prefix: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with(prefix) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}
