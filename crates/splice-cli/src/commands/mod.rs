//! Command implementations for splice-cli

pub mod integrate;

pub use integrate::{JobOverrides, run_integrate};
