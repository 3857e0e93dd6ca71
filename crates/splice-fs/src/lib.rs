//! Filesystem access for techsplice
//!
//! Provides normalized paths, whole-file reads, atomic writes and
//! format-agnostic loading of job configuration files.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
