//! The integration pipeline: extract, locate, splice, report, write.

use serde::Serialize;
use splice_blocks::{Boundaries, Extractor, LocateStrategy, Locator, Report, splice};
use splice_fs::{NormalizedPath, io};
use tracing::{debug, info};

use crate::{JobConfig, Mode, Result};

/// Everything computed before a write. Holding a `Plan` means every check
/// passed.
#[derive(Debug, Clone)]
pub struct Plan {
    pub source: NormalizedPath,
    pub target: NormalizedPath,
    pub strategy: LocateStrategy,
    pub boundaries: Boundaries,
    pub original: String,
    pub result: String,
    pub report: Report,
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub mode: Mode,
    pub strategy: LocateStrategy,
    pub source: NormalizedPath,
    pub target: NormalizedPath,
    /// File that received the spliced text, if any.
    pub written: Option<NormalizedPath>,
    pub report: Report,
}

/// Runs one job against files under `root`.
#[derive(Debug, Clone)]
pub struct Pipeline {
    root: NormalizedPath,
    config: JobConfig,
}

impl Pipeline {
    pub fn new(root: impl Into<NormalizedPath>, config: JobConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: root.into(),
            config,
        })
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    pub fn source_path(&self) -> NormalizedPath {
        self.root.join(&self.config.source)
    }

    pub fn target_path(&self) -> NormalizedPath {
        self.root.join(&self.config.target)
    }

    /// Path review mode writes to.
    pub fn review_path(&self) -> NormalizedPath {
        self.target_path().with_suffix(&self.config.review_suffix)
    }

    /// Read both files and compute the spliced text without writing.
    pub fn plan(&self, strategy: LocateStrategy) -> Result<Plan> {
        let source = self.source_path();
        let target = self.target_path();

        let source_text = io::read_text(&source)?;
        let inner = Extractor::new(&self.config.source_block)?
            .extract(&source_text)
            .map_err(|e| e.at(source.to_native()))?;

        let original = io::read_text(&target)?;
        let locator = Locator::for_block(&self.config.target_block, &self.config.end_marker, strategy)?;
        let boundaries = locator
            .locate(&original)
            .map_err(|e| e.at(target.to_native()))?;

        let replacement = locator.replacement(inner);
        let result = splice(&original, boundaries, &replacement)?;
        let report = Report::compare(&original, &result, boundaries, &replacement)?;
        debug!(
            old_bytes = report.old.bytes,
            new_bytes = report.new.bytes,
            old_entries = report.old.entries,
            new_entries = report.new.entries,
            "spliced target"
        );

        Ok(Plan {
            source,
            target,
            strategy,
            boundaries,
            original,
            result,
            report,
        })
    }

    /// Plan, then write according to `mode`.
    pub fn run(&self, mode: Mode) -> Result<Outcome> {
        let strategy = self.config.strategy_for(mode);
        let plan = self.plan(strategy)?;

        let written = match mode {
            Mode::Review => {
                let path = io::write_review(&plan.target, &self.config.review_suffix, &plan.result)?;
                info!(path = %path, "wrote review file");
                Some(path)
            }
            Mode::Direct => {
                io::write_text(&plan.target, &plan.result)?;
                info!(path = %plan.target, "replaced target in place");
                Some(plan.target.clone())
            }
            Mode::Check => None,
        };

        Ok(Outcome {
            mode,
            strategy,
            source: plan.source,
            target: plan.target,
            written,
            report: plan.report,
        })
    }
}
