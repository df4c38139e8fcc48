//! Integration tests for plan file I/O.
//!
//! Tests cover:
//! - Plan save/load
//! - Version validation
//! - Parent directory creation

use media_file_organizer::core::planner::{load_plan, save_plan};
use media_file_organizer::models::plan::{
    RenameEntry, RenamePlan, SkipReason, SkippedRename, PLAN_VERSION,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_plan() -> RenamePlan {
    RenamePlan {
        version: PLAN_VERSION.to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        show_dir: PathBuf::from("/shows/demo"),
        group_seasons: true,
        entries: vec![RenameEntry {
            season_dir: Some(PathBuf::from("/shows/demo/Season 01 (2019)")),
            old_path: PathBuf::from("/shows/demo/a.mkv"),
            new_path: PathBuf::from("/shows/demo/Season 01 (2019)/S01 E01 - Pilot.mkv"),
        }],
        skipped: vec![SkippedRename {
            old_path: PathBuf::from("/shows/demo/b.mkv"),
            new_path: PathBuf::from("/shows/demo/Season 01 (2019)/S01 E01 - Pilot.mkv"),
            reason: SkipReason::DuplicateTarget,
        }],
    }
}

#[test]
fn test_save_and_load_plan() {
    let plan = sample_plan();
    let temp_dir = TempDir::new().unwrap();
    let plan_path = temp_dir.path().join("plan.json");

    save_plan(&plan, &plan_path).unwrap();
    assert!(plan_path.exists());

    let loaded = load_plan(&plan_path).unwrap();
    assert_eq!(loaded.show_dir, plan.show_dir);
    assert!(loaded.group_seasons);
    assert_eq!(loaded.entries, plan.entries);
    assert_eq!(loaded.skipped, plan.skipped);
}

#[test]
fn test_saved_plan_uses_snake_case_reasons() {
    let temp_dir = TempDir::new().unwrap();
    let plan_path = temp_dir.path().join("plan.json");

    save_plan(&sample_plan(), &plan_path).unwrap();
    let content = fs::read_to_string(&plan_path).unwrap();

    assert!(content.contains("\"duplicate_target\""));
}

#[test]
fn test_load_plan_rejects_unknown_version() {
    let mut plan = sample_plan();
    plan.version = "9.9".to_string();

    let temp_dir = TempDir::new().unwrap();
    let plan_path = temp_dir.path().join("plan.json");
    save_plan(&plan, &plan_path).unwrap();

    assert!(matches!(
        load_plan(&plan_path),
        Err(media_file_organizer::Error::InvalidPlanFile(_))
    ));
}

#[test]
fn test_load_nonexistent_plan() {
    let result = load_plan(&PathBuf::from("/nonexistent/plan.json"));
    assert!(result.is_err());
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir
        .path()
        .join("deeply")
        .join("nested")
        .join("plan.json");

    save_plan(&sample_plan(), &nested_path).unwrap();

    assert!(nested_path.exists());
}
