//! Job configuration
//!
//! A job names the two files, the block to take from the source, the block
//! to replace in the target and the marker that follows it. Every field has
//! a default, so a run with no configuration file at all works on the
//! standard project layout.

use serde::{Deserialize, Serialize};
use splice_blocks::LocateStrategy;
use splice_fs::{ConfigStore, NormalizedPath};

use crate::{Error, Mode, Result};

pub const DEFAULT_SOURCE: &str = "tech-tree-expanded.js";
pub const DEFAULT_TARGET: &str = "public/js/app.js";
pub const DEFAULT_SOURCE_BLOCK: &str = "TECH_DEFINITIONS_EXPANDED";
pub const DEFAULT_TARGET_BLOCK: &str = "TECH_DEFINITIONS";
pub const DEFAULT_END_MARKER: &str = "// Initialize tech state";
pub const DEFAULT_REVIEW_SUFFIX: &str = "new";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    /// File holding the new block, relative to the working directory.
    pub source: String,
    /// File whose block is replaced, relative to the working directory.
    pub target: String,
    /// Name in `const <source_block> = {` inside the source.
    pub source_block: String,
    /// Name in `const <target_block> = {` inside the target.
    pub target_block: String,
    /// Literal text that follows the target block.
    pub end_marker: String,
    /// Suffix appended to the target name in review mode.
    pub review_suffix: String,
    /// Pins the locate strategy regardless of mode.
    pub strategy: Option<LocateStrategy>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.into(),
            target: DEFAULT_TARGET.into(),
            source_block: DEFAULT_SOURCE_BLOCK.into(),
            target_block: DEFAULT_TARGET_BLOCK.into(),
            end_marker: DEFAULT_END_MARKER.into(),
            review_suffix: DEFAULT_REVIEW_SUFFIX.into(),
            strategy: None,
        }
    }
}

impl JobConfig {
    /// Load a job from a TOML, JSON or YAML file and validate it.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let config: Self = ConfigStore::new().load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could never locate a block.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("source", &self.source),
            ("target", &self.target),
            ("source_block", &self.source_block),
            ("target_block", &self.target_block),
            ("end_marker", &self.end_marker),
            ("review_suffix", &self.review_suffix),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::invalid_config(format!("`{field}` must not be empty")));
        }
        if self.source == self.target {
            return Err(Error::invalid_config(
                "`source` and `target` must be different files",
            ));
        }
        if self.review_suffix.contains(['/', '\\']) {
            return Err(Error::invalid_config(
                "`review_suffix` must not contain path separators",
            ));
        }
        Ok(())
    }

    /// The configured strategy, or the mode's default.
    pub fn strategy_for(&self, mode: Mode) -> LocateStrategy {
        self.strategy.unwrap_or_else(|| mode.default_strategy())
    }
}
