//! Write policy for a run

use std::fmt;

use serde::Serialize;
use splice_blocks::LocateStrategy;

/// What a run does with the spliced text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Write `<target>.<suffix>` next to the target for manual promotion.
    Review,
    /// Atomically replace the target in place.
    Direct,
    /// Report only; write nothing.
    Check,
}

impl Mode {
    /// Strategy used when the configuration does not pin one.
    pub fn default_strategy(self) -> LocateStrategy {
        match self {
            Self::Review | Self::Check => LocateStrategy::Pattern,
            Self::Direct => LocateStrategy::Lines,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Review => write!(f, "review"),
            Self::Direct => write!(f, "direct"),
            Self::Check => write!(f, "check"),
        }
    }
}
