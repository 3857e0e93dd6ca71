//! Block extraction, location and splicing for techsplice.
//!
//! Every function here works on in-memory text; reading and writing files
//! is left to `splice-fs`. A run moves through four stages:
//!
//! 1. [`extract`] pulls the inner content of a named object literal
//!    (`const NAME = { ... \n};`) out of the source text.
//! 2. [`locate`] finds the half-open byte range of the target text that the
//!    new content replaces.
//! 3. [`splice`] joins the untouched prefix, the replacement and the
//!    untouched suffix.
//! 4. [`report`] counts entries, bytes and lines before and after.
//!
//! The embedded data is never parsed. Blocks are opaque text.

pub mod error;
pub mod extract;
pub mod locate;
pub mod report;
pub mod splice;

pub use error::{Error, Result};
pub use extract::{Extractor, extract_block};
pub use locate::{Boundaries, LineSpan, LocateStrategy, Locator};
pub use report::{Report, TextStats, count_entries};
pub use splice::splice;
