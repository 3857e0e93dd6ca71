//! Splicing replacement content into a located region.

use crate::error::Result;
use crate::locate::Boundaries;

/// Build `text[..start] + replacement + text[end..]`.
///
/// Everything outside the range is copied byte-for-byte and the
/// replacement is inserted verbatim.
///
/// # Errors
/// Returns `Error::InvalidBoundaries` if the range is reversed, runs past
/// the end of `text`, or splits a UTF-8 character.
///
/// # Example
/// ```
/// use splice_blocks::{Boundaries, splice};
///
/// let result = splice("a{old}b", Boundaries::new(2, 5), "new").unwrap();
/// assert_eq!(result, "a{new}b");
/// ```
pub fn splice(text: &str, boundaries: Boundaries, replacement: &str) -> Result<String> {
    boundaries.validate(text)?;
    let Boundaries { start, end } = boundaries;

    let mut result = String::with_capacity(text.len() - (end - start) + replacement.len());
    result.push_str(&text[..start]);
    result.push_str(replacement);
    result.push_str(&text[end..]);
    Ok(result)
}
