//! Rename plan generation module.
//!
//! Coordinates the planning process:
//! 1. Scan the show directory for allowed files
//! 2. Sort filenames numerically
//! 3. Match filenames against episodes
//! 4. Generate episode and season names
//! 5. Build old path -> new path entries, skipping no-ops and collisions

use crate::core::matcher::map_files_to_episodes;
use crate::core::scanner::{extension_of, scan_directory};
use crate::core::sorter::natural_sort;
use crate::generators::{filename as gen_filename, folder as gen_folder};
use crate::models::config::MatchPolicy;
use crate::models::episode::Episode;
use crate::models::plan::{MatchEntry, RenameEntry, RenamePlan, SkipReason, SkippedRename, PLAN_VERSION};
use crate::Result;
use chrono::Utc;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Build a rename plan from matched files.
///
/// Only matched filenames take part. A candidate is skipped when it would not
/// change the path, when something already exists at the target, or when an
/// earlier entry already claimed the same target. Existence checks are
/// read-only.
pub fn build_rename_plan(
    show_dir: &Path,
    matches: &[MatchEntry],
    group_seasons: bool,
) -> Result<RenamePlan> {
    let episodes: Vec<Episode> = matches.iter().map(|m| m.episode.clone()).collect();
    let episode_names = gen_filename::generate_episode_names(&episodes);
    let season_names = if group_seasons {
        gen_folder::generate_season_names(&episodes)?
    } else {
        Vec::new()
    };

    let mut plan = RenamePlan {
        version: PLAN_VERSION.to_string(),
        created_at: Utc::now().to_rfc3339(),
        show_dir: show_dir.to_path_buf(),
        group_seasons,
        entries: Vec::new(),
        skipped: Vec::new(),
    };
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for (i, entry) in matches.iter().enumerate() {
        let season_dir = season_names.get(i).map(|name| show_dir.join(name));
        let old_path = show_dir.join(&entry.filename);
        let new_name = format!(
            "{}{}",
            episode_names[i],
            extension_of(&entry.filename).unwrap_or_default()
        );
        let new_path = season_dir.as_deref().unwrap_or(show_dir).join(new_name);

        let reason = if old_path == new_path {
            Some(SkipReason::NoOp)
        } else if new_path.exists() {
            Some(SkipReason::TargetExists)
        } else if claimed.contains(&new_path) {
            Some(SkipReason::DuplicateTarget)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                tracing::debug!(
                    "Skipping {} -> {} ({})",
                    old_path.display(),
                    new_path.display(),
                    reason
                );
                plan.skipped.push(SkippedRename {
                    old_path,
                    new_path,
                    reason,
                });
            }
            None => {
                claimed.insert(new_path.clone());
                plan.entries.push(RenameEntry {
                    season_dir,
                    old_path,
                    new_path,
                });
            }
        }
    }

    tracing::info!(
        "Planned {} renames ({} skipped)",
        plan.entries.len(),
        plan.skipped.len()
    );

    Ok(plan)
}

/// Scan, sort and match the show directory, then build the rename plan.
///
/// Returns `Error::NoMatchingFiles` when no file in the directory has an
/// allowed extension.
pub fn generate_rename_plan(
    episodes: &[Episode],
    show_dir: &Path,
    file_extensions: Option<&[String]>,
    group_seasons: bool,
    policy: MatchPolicy,
) -> Result<RenamePlan> {
    let filenames = scan_directory(show_dir, file_extensions)?;
    if filenames.is_empty() {
        return Err(crate::Error::NoMatchingFiles {
            dir: show_dir.display().to_string(),
            extensions: file_extensions.map(|e| e.join(" | ")).unwrap_or_default(),
        });
    }

    let filenames = natural_sort(filenames);
    let matches = map_files_to_episodes(&filenames, episodes, policy)?;
    tracing::info!(
        "Matched {} of {} files against {} episodes",
        matches.len(),
        filenames.len(),
        episodes.len()
    );

    build_rename_plan(show_dir, &matches, group_seasons)
}

/// Save a plan to a JSON file.
pub fn save_plan(plan: &RenamePlan, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;

    tracing::info!("Plan saved to {:?}", path);
    Ok(())
}

/// Load a plan from a JSON file.
pub fn load_plan(path: &Path) -> Result<RenamePlan> {
    let content = fs::read_to_string(path)?;
    let plan: RenamePlan = serde_json::from_str(&content)?;
    if plan.version != PLAN_VERSION {
        return Err(crate::Error::InvalidPlanFile(format!(
            "unsupported version {} in {}",
            plan.version,
            path.display()
        )));
    }
    Ok(plan)
}

/// Default plan output path inside the show directory.
pub fn default_plan_path(show_dir: &Path) -> PathBuf {
    let filename = format!("rename_plan_{}.json", Utc::now().format("%Y%m%d_%H%M%S"));
    show_dir.join(filename)
}
