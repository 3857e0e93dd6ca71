//! Review, apply and check commands
//!
//! All three run the same pipeline; they differ only in what is written.

use std::path::{Path, PathBuf};

use colored::Colorize;
use splice_blocks::LocateStrategy;
use splice_core::{JobConfig, Mode, Outcome, Pipeline};
use splice_fs::NormalizedPath;
use tracing::debug;

use crate::error::Result;

/// Command-line values that override the job configuration.
#[derive(Debug, Clone, Default)]
pub struct JobOverrides {
    pub config: Option<PathBuf>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub strategy: Option<LocateStrategy>,
}

/// Build the job: defaults, then the config file if given, then flags.
pub fn resolve_job(cwd: &Path, overrides: &JobOverrides) -> Result<JobConfig> {
    let mut config = match &overrides.config {
        Some(path) => {
            let path = NormalizedPath::new(cwd.join(path));
            debug!(path = %path, "loading job configuration");
            JobConfig::load(&path)?
        }
        None => JobConfig::default(),
    };

    if let Some(source) = &overrides.source {
        config.source = source.clone();
    }
    if let Some(target) = &overrides.target {
        config.target = target.clone();
    }
    if overrides.strategy.is_some() {
        config.strategy = overrides.strategy;
    }

    Ok(config)
}

/// Run the pipeline in `mode` against files under `cwd`.
pub fn run_integrate(cwd: &Path, mode: Mode, overrides: &JobOverrides, json: bool) -> Result<()> {
    let config = resolve_job(cwd, overrides)?;
    let pipeline = Pipeline::new(cwd, config)?;
    let outcome = pipeline.run(mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, pipeline.config());
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome, config: &JobConfig) {
    let report = &outcome.report;
    let target = NormalizedPath::new(&config.target);

    println!(
        "{} {} ({}, {})",
        "Integrate".blue().bold(),
        target.as_str().yellow(),
        outcome.mode.to_string().cyan(),
        outcome.strategy.to_string().cyan()
    );
    println!();
    println!("  Replacing lines {}", report.replaced);
    println!("  Old tech tree: {} lines", report.old_block_lines);
    println!("  New tech tree: {} lines", report.new_block_lines);
    println!("  Old tech count: {}", report.old.entries);
    println!(
        "  New tech count: {} ({})",
        report.new.entries,
        format_delta(report.entry_delta())
    );
    println!("  Old file size: {} bytes", report.old.bytes);
    println!("  New file size: {} bytes", report.new.bytes);
    println!();

    match outcome.mode {
        Mode::Review => {
            let review = target.with_suffix(&config.review_suffix);
            println!("{} Created {}", "OK".green().bold(), review.as_str());
            println!(
                "Review the file, then run: {}",
                format!("mv {} {}", review, target).cyan()
            );
        }
        Mode::Direct => {
            println!(
                "{} Integration complete: {}",
                "OK".green().bold(),
                target.as_str()
            );
        }
        Mode::Check => {
            if report.is_unchanged() {
                println!("{} Target already matches the source block.", "OK".green().bold());
            } else {
                println!(
                    "Run {} or {} to write the result.",
                    "techsplice review".cyan(),
                    "techsplice apply".cyan()
                );
            }
        }
    }
}

fn format_delta(delta: i64) -> String {
    match delta {
        0 => "unchanged".to_string(),
        d if d > 0 => format!("+{d}").green().to_string(),
        d => d.to_string().red().to_string(),
    }
}
