//! Plan executor module.
//!
//! Applies a rename plan in order:
//! - mkdir: create the season directory when grouping
//! - rename: move the file to its canonical name
//!
//! Execution is fail-fast. The first filesystem error aborts the remaining
//! entries and nothing is rolled back.

use crate::models::plan::{RenameEntry, RenamePlan};
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;

/// Executor configuration.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Whether to draw a progress bar.
    pub show_progress: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

/// Plan executor.
#[derive(Debug, Default)]
pub struct Executor {
    config: ExecutorConfig,
}

impl Executor {
    /// Create a new executor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new executor with custom configuration.
    pub fn with_config(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Execute a plan and return the number of files renamed.
    pub fn execute(&self, plan: &RenamePlan) -> Result<usize> {
        if plan.is_empty() {
            tracing::info!("Nothing to rename");
            return Ok(0);
        }

        let pb = if self.config.show_progress {
            let pb = ProgressBar::new(plan.len() as u64);
            if let Ok(style) =
                ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                pb.set_style(style.progress_chars("=>-"));
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut renamed = 0;
        for (idx, entry) in plan.entries.iter().enumerate() {
            pb.set_message(entry.new_name());
            tracing::debug!(
                "Execute [{}/{}]: {} -> {}",
                idx + 1,
                plan.len(),
                entry.old_path.display(),
                entry.new_path.display()
            );

            match self.execute_entry(entry) {
                Ok(true) => renamed += 1,
                Ok(false) => {}
                Err(e) => {
                    pb.abandon_with_message("Aborted");
                    tracing::error!(
                        "Rename failed after {} files: {} - {}",
                        renamed,
                        entry.old_path.display(),
                        e
                    );
                    return Err(e);
                }
            }
            pb.inc(1);
        }

        pb.finish_with_message("Done!");
        tracing::info!("Renamed {} files", renamed);

        Ok(renamed)
    }

    /// Apply one entry. Returns whether a rename happened.
    fn execute_entry(&self, entry: &RenameEntry) -> Result<bool> {
        if let Some(season_dir) = &entry.season_dir {
            if !season_dir.exists() {
                fs::create_dir(season_dir)?;
                tracing::info!("Created {}", season_dir.display());
            }
        }

        if entry.old_path == entry.new_path {
            return Ok(false);
        }

        // The target may have appeared since the plan was built.
        if entry.new_path.exists() {
            return Err(crate::Error::FileAlreadyExists(
                entry.new_path.display().to_string(),
            ));
        }

        fs::rename(&entry.old_path, &entry.new_path)?;
        Ok(true)
    }
}
