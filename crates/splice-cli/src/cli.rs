//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use splice_blocks::LocateStrategy;
use splice_core::Mode;

/// techsplice - Merge an expanded tech tree block into the application file
#[derive(Parser, Debug)]
#[command(name = "techsplice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Job configuration file (TOML, JSON or YAML)
    #[arg(short, long, global = true, env = "TECHSPLICE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Source file holding the expanded block
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Target file whose block is replaced
    #[arg(long, global = true)]
    pub target: Option<String>,

    /// How block boundaries are located in the target (pattern or lines)
    #[arg(long, global = true)]
    pub strategy: Option<LocateStrategy>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run (defaults to `review`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Write the merged file next to the target as `<target>.new`
    Review,

    /// Replace the target file in place
    Apply,

    /// Report what would change without writing anything
    Check,
}

impl Commands {
    pub fn mode(self) -> Mode {
        match self {
            Self::Review => Mode::Review,
            Self::Apply => Mode::Direct,
            Self::Check => Mode::Check,
        }
    }
}
