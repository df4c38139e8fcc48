//! End-to-end tests for planning and executing renames.
//!
//! Tests cover:
//! - Flat and season-grouped renames
//! - Match policies on ambiguous filenames
//! - Collision and no-op skipping
//! - Plan ordering

use media_file_organizer::core::executor::{Executor, ExecutorConfig};
use media_file_organizer::core::organizer::Organizer;
use media_file_organizer::core::planner::generate_rename_plan;
use media_file_organizer::models::config::{Config, MatchPolicy};
use media_file_organizer::models::episode::Episode;
use media_file_organizer::models::plan::SkipReason;
use std::fs;
use tempfile::TempDir;

fn episodes() -> Vec<Episode> {
    vec![
        Episode::new(1, 1, "Pilot", "2019-03-01"),
        Episode::new(1, 2, "Next", "2019-03-08"),
    ]
}

fn allow(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|e| e.to_string()).collect()
}

fn executor() -> Executor {
    Executor::with_config(ExecutorConfig {
        show_progress: false,
    })
}

fn show_dir(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for file in files {
        fs::write(temp_dir.path().join(file), file).unwrap();
    }
    temp_dir
}

#[test]
fn test_rename_two_episodes_best_match() {
    let temp_dir = show_dir(&["show.s01e01.mkv", "show.s01e02.mkv"]);
    let dir = temp_dir.path();

    let plan = generate_rename_plan(
        &episodes(),
        dir,
        Some(&allow(&[".mkv"])),
        false,
        MatchPolicy::Best,
    )
    .unwrap();

    assert_eq!(plan.len(), 2);
    assert_eq!(plan.entries[0].new_path, dir.join("S01 E01 - Pilot.mkv"));
    assert_eq!(plan.entries[1].new_path, dir.join("S01 E02 - Next.mkv"));

    let renamed = executor().execute(&plan).unwrap();

    assert_eq!(renamed, 2);
    assert_eq!(
        fs::read_to_string(dir.join("S01 E01 - Pilot.mkv")).unwrap(),
        "show.s01e01.mkv"
    );
    assert_eq!(
        fs::read_to_string(dir.join("S01 E02 - Next.mkv")).unwrap(),
        "show.s01e02.mkv"
    );
    assert!(!dir.join("show.s01e01.mkv").exists());
}

#[test]
fn test_last_match_policy_keeps_plan_collision_free() {
    // "s01" matches every season 1 episode, so the last one wins for both files.
    let temp_dir = show_dir(&["show.s01e01.mkv", "show.s01e02.mkv"]);
    let dir = temp_dir.path();

    let plan = generate_rename_plan(
        &episodes(),
        dir,
        Some(&allow(&[".mkv"])),
        false,
        MatchPolicy::Last,
    )
    .unwrap();

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.entries[0].old_path, dir.join("show.s01e01.mkv"));
    assert_eq!(plan.entries[0].new_path, dir.join("S01 E02 - Next.mkv"));
    assert_eq!(plan.skipped[0].reason, SkipReason::DuplicateTarget);

    assert_eq!(executor().execute(&plan).unwrap(), 1);
    assert!(dir.join("show.s01e02.mkv").exists());
}

#[test]
fn test_grouped_rename_creates_season_directory() {
    let temp_dir = show_dir(&["Pilot.mp4", "Next.mp4"]);
    let dir = temp_dir.path();

    let plan = generate_rename_plan(
        &episodes(),
        dir,
        Some(&allow(&[".mp4"])),
        true,
        MatchPolicy::Last,
    )
    .unwrap();
    let season_dir = dir.join("Season 01 (2019)");

    assert_eq!(plan.len(), 2);
    assert!(plan.entries.iter().all(|e| e.season_dir.as_ref() == Some(&season_dir)));
    assert!(!season_dir.exists());

    assert_eq!(executor().execute(&plan).unwrap(), 2);
    assert!(season_dir.is_dir());
    assert!(season_dir.join("S01 E01 - Pilot.mp4").exists());
    assert!(season_dir.join("S01 E02 - Next.mp4").exists());
}

#[test]
fn test_existing_target_is_never_planned() {
    let temp_dir = show_dir(&["Pilot.mkv", "S01 E01 - Pilot.mkv"]);
    let dir = temp_dir.path();
    let episodes = vec![Episode::new(1, 1, "Pilot", "2019-03-01")];

    let plan = generate_rename_plan(
        &episodes,
        dir,
        Some(&allow(&[".mkv"])),
        false,
        MatchPolicy::Last,
    )
    .unwrap();

    assert!(plan.is_empty());
    for entry in &plan.entries {
        assert_ne!(entry.old_path, entry.new_path);
        assert!(!entry.new_path.exists());
    }
    assert_eq!(plan.skipped.len(), 2);
    assert!(plan
        .skipped
        .iter()
        .any(|s| s.reason == SkipReason::NoOp));
    assert!(plan
        .skipped
        .iter()
        .any(|s| s.reason == SkipReason::TargetExists));
    assert_eq!(executor().execute(&plan).unwrap(), 0);
}

#[test]
fn test_unmatched_files_are_dropped() {
    let temp_dir = show_dir(&["holiday.mkv", "Pilot.mkv"]);
    let dir = temp_dir.path();

    let plan = generate_rename_plan(
        &episodes(),
        dir,
        Some(&allow(&[".mkv"])),
        false,
        MatchPolicy::Last,
    )
    .unwrap();

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.entries[0].old_path, dir.join("Pilot.mkv"));
}

#[test]
fn test_plan_follows_numeric_file_order() {
    let temp_dir = show_dir(&["part10 Ten.mkv", "part2 Two.mkv"]);
    let dir = temp_dir.path();
    let episodes = vec![
        Episode::new(3, 10, "Ten", "2021-05-01"),
        Episode::new(3, 2, "Two", "2021-01-01"),
    ];

    let plan = generate_rename_plan(
        &episodes,
        dir,
        Some(&allow(&[".mkv"])),
        false,
        MatchPolicy::Last,
    )
    .unwrap();

    assert_eq!(plan.entries[0].old_path, dir.join("part2 Two.mkv"));
    assert_eq!(plan.entries[0].new_name(), "S03 E02 - Two.mkv");
    assert_eq!(plan.entries[1].new_name(), "S03 E10 - Ten.mkv");
}

#[test]
fn test_no_allowed_files_is_an_error() {
    let temp_dir = show_dir(&["notes.txt"]);

    let result = generate_rename_plan(
        &episodes(),
        temp_dir.path(),
        Some(&allow(&[".mkv"])),
        false,
        MatchPolicy::Last,
    );

    assert!(matches!(
        result,
        Err(media_file_organizer::Error::NoMatchingFiles { .. })
    ));
}

#[test]
fn test_organizer_plan_uses_config() {
    let temp_dir = show_dir(&["show.s01e01.avi", "show.s01e02.mkv"]);
    let dir = temp_dir.path();
    let config = Config {
        file_extensions: allow(&[".avi"]),
        match_policy: MatchPolicy::Best,
        ..Config::default()
    };

    let organizer = Organizer::new(config);
    let plan = organizer.plan(&episodes(), dir, false).unwrap();

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.entries[0].new_path, dir.join("S01 E01 - Pilot.avi"));
}
