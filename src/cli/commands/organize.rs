//! Organize command implementation.
//!
//! Coordinates episode lookup, plan generation, plan display and execution.

use super::execute::apply_plan;
use crate::core::organizer::Organizer;
use crate::core::planner;
use crate::models::plan::RenamePlan;
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Options for one organize run.
#[derive(Debug, Clone)]
pub struct OrganizeOptions<'a> {
    pub dir: &'a Path,
    pub title: &'a str,
    pub season: Option<u32>,
    pub group_seasons: bool,
    pub dry_run: bool,
    pub assume_yes: bool,
    pub output: Option<&'a Path>,
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run the organize flow.
pub async fn organize(organizer: &Organizer, opts: &OrganizeOptions<'_>) -> Result<()> {
    println!("  {} {}", "Directory:".bold(), opts.dir.display());
    println!("  {} {}", "Title:".bold(), opts.title);
    println!(
        "  {} {}",
        "Season:".bold(),
        opts.season.map(|s| s.to_string()).unwrap_or_else(|| "all".to_string())
    );
    println!("  {} {}", "Group seasons:".bold(), opts.group_seasons);
    println!("  {} {}", "Match policy:".bold(), organizer.config().match_policy);
    println!();

    let pb = spinner("Generating rename map...");
    let result = organizer
        .organize(opts.dir, opts.title, opts.season, opts.group_seasons)
        .await;
    pb.finish_and_clear();

    let plan = match result {
        Ok(Some(plan)) => plan,
        Ok(None) => {
            eprintln!(
                "{}",
                crate::Error::NoEpisodes(opts.title.to_string()).to_string().red()
            );
            return Ok(());
        }
        Err(e @ crate::Error::NoMatchingFiles { .. }) => {
            eprintln!("{}", e.to_string().red());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("{}", "Rename map:".bold().green());
    print_plan_table(&plan);

    if let Some(output) = opts.output {
        planner::save_plan(&plan, output)?;
        println!("{} {}", "Plan saved to:".bold().green(), output.display());
    }

    if opts.dry_run {
        println!("{}", "Dry run, no files renamed.".yellow());
        return Ok(());
    }

    apply_plan(&plan, opts.assume_yes)
}

/// Render the plan as table rows, header first.
pub fn format_plan_table(plan: &RenamePlan) -> Vec<String> {
    let mut rows: Vec<Vec<String>> = Vec::new();

    let mut header = vec!["oldName".to_string(), "newName".to_string()];
    if plan.group_seasons {
        header.insert(0, "seasonDir".to_string());
    }
    rows.push(header);

    for entry in &plan.entries {
        let mut row = vec![entry.old_name(), entry.new_name()];
        if plan.group_seasons {
            let season_dir = entry
                .season_dir
                .as_ref()
                .and_then(|d| d.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            row.insert(0, season_dir);
        }
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Print the plan table and any skipped candidates.
pub fn print_plan_table(plan: &RenamePlan) {
    let lines = format_plan_table(plan);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            println!("  {}", line.bold());
        } else {
            println!("  {}", line);
        }
    }

    if !plan.skipped.is_empty() {
        println!();
        println!("{}", "Skipped:".bold().yellow());
        for skipped in &plan.skipped {
            println!(
                "  {} ({})",
                skipped.old_path.display().to_string().yellow(),
                skipped.reason
            );
        }
    }
    println!();
}
