//! Rename plan data model.

use super::episode::Episode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Plan file format version.
pub const PLAN_VERSION: &str = "1.0";

/// A filename paired with the episode it was matched to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub filename: String,
    pub episode: Episode,
}

/// Rename plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenamePlan {
    /// Plan version.
    pub version: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Show directory the plan was built for.
    pub show_dir: PathBuf,
    /// Whether files are grouped into season directories.
    pub group_seasons: bool,
    /// Renames to perform, in sorted filename order.
    pub entries: Vec<RenameEntry>,
    /// Candidates dropped while building the plan.
    #[serde(default)]
    pub skipped: Vec<SkippedRename>,
}

/// A single rename decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    /// Season directory to create first, when grouping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_dir: Option<PathBuf>,
    /// Current file path.
    pub old_path: PathBuf,
    /// Target file path.
    pub new_path: PathBuf,
}

/// A candidate rename the plan builder dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRename {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub reason: SkipReason,
}

/// Why a candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The file already has its canonical name.
    NoOp,
    /// Something already exists at the target path.
    TargetExists,
    /// An earlier entry in the plan already renames to this target.
    DuplicateTarget,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoOp => write!(f, "already named"),
            SkipReason::TargetExists => write!(f, "target exists"),
            SkipReason::DuplicateTarget => write!(f, "duplicate target"),
        }
    }
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl RenameEntry {
    /// File name of the current path.
    pub fn old_name(&self) -> String {
        file_name_of(&self.old_path)
    }

    /// File name of the target path.
    pub fn new_name(&self) -> String {
        file_name_of(&self.new_path)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
