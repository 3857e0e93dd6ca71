//! Extraction of a named object literal from source text.
//!
//! A block looks like:
//! ```text
//! const TECH_DEFINITIONS_EXPANDED = {
//!   a: {},
//! };
//! ```
//! and its inner content is everything after the opening `{` up to, but
//! not including, the first `\n};` that follows.

use std::path::PathBuf;

use regex::Regex;
use tracing::debug;

use crate::error::{CONTENT_PATH, Error, Result};

/// Extracts the inner content of one named block.
#[derive(Debug, Clone)]
pub struct Extractor {
    name: String,
    pattern: Regex,
}

impl Extractor {
    /// Build an extractor for `const <name> = {`.
    pub fn new(name: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"(?s)\bconst {} = \{{(.*?)\n\}};",
            regex::escape(name)
        ))?;
        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    /// The block name this extractor looks for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the inner content of the first matching block.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if the text holds no well-formed block
    /// with this name.
    ///
    /// # Example
    /// ```
    /// use splice_blocks::Extractor;
    ///
    /// let source = "const TECH = {\n  a: {},\n};\n";
    /// let inner = Extractor::new("TECH").unwrap().extract(source).unwrap();
    /// assert_eq!(inner, "\n  a: {},");
    /// ```
    pub fn extract<'a>(&self, text: &'a str) -> Result<&'a str> {
        let inner = self
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| Error::NotFound {
                name: self.name.clone(),
                path: PathBuf::from(CONTENT_PATH),
            })?;
        debug!(
            name = %self.name,
            start = inner.start(),
            end = inner.end(),
            "extracted block"
        );
        Ok(inner.as_str())
    }
}

/// Convenience wrapper around [`Extractor::extract`].
pub fn extract_block<'a>(text: &'a str, name: &str) -> Result<&'a str> {
    Extractor::new(name)?.extract(text)
}
