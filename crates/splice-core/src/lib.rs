//! Job configuration and the integration pipeline for techsplice
//!
//! `splice-core` wires the text operations from `splice-blocks` to the
//! file access in `splice-fs`:
//!
//! ```text
//!                 splice-cli
//!                     |
//!                splice-core
//!                     |
//!          +----------+----------+
//!          |                     |
//!      splice-fs           splice-blocks
//! ```
//!
//! A run reads the source and target files, extracts the named block from
//! the source, locates the region to replace in the target, splices, builds
//! a [`Report`](splice_blocks::Report) and then writes according to the
//! [`Mode`]. Nothing is written unless every earlier stage succeeded.

pub mod config;
pub mod error;
pub mod mode;
pub mod pipeline;

pub use config::JobConfig;
pub use error::{Error, Result};
pub use mode::Mode;
pub use pipeline::{Outcome, Pipeline, Plan};
