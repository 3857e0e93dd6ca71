//! Shared test utilities for the techsplice workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`](project::TestProject) builder for a
//!   temporary source/target layout
//! - [`scenario`]: the canonical source, target and expected texts

pub mod project;
pub mod scenario;
