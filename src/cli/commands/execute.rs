//! Execute command implementation.
//!
//! Asks for confirmation and applies a rename plan, either freshly built or
//! loaded from a plan file.

use crate::core::executor::Executor;
use crate::core::planner;
use crate::models::plan::RenamePlan;
use crate::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::Path;

/// Ask whether to proceed. Only an explicit yes counts.
pub fn confirm(assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }

    match Confirm::new()
        .with_prompt("Would you like to proceed?")
        .default(false)
        .interact()
    {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("Confirmation prompt failed: {}", e);
            false
        }
    }
}

/// Confirm and execute a plan, printing the renamed-file count.
pub fn apply_plan(plan: &RenamePlan, assume_yes: bool) -> Result<()> {
    if plan.is_empty() {
        println!("{}", "Nothing to rename.".yellow());
        return Ok(());
    }

    if !confirm(assume_yes) {
        println!("{}", "Aborted, no files renamed.".yellow());
        return Ok(());
    }

    let renamed = Executor::new().execute(plan)?;
    println!("{} {}", "Files-renamed count:".bold(), renamed);
    println!("{}", "*** Done ***".bold().green());

    Ok(())
}

/// Execute a saved plan file.
pub fn execute_plan_file(plan_file: &Path, assume_yes: bool) -> Result<()> {
    if !plan_file.exists() {
        return Err(crate::Error::PathNotFound(plan_file.display().to_string()));
    }

    println!("[INFO] Loading plan: {}", plan_file.display());
    let plan = planner::load_plan(plan_file)?;

    println!("  {} {}", "Directory:".bold(), plan.show_dir.display());
    println!("  {} {}", "Group seasons:".bold(), plan.group_seasons);
    println!("  {} {}", "Entries:".bold(), plan.len());
    println!();

    super::organize::print_plan_table(&plan);
    apply_plan(&plan, assume_yes)
}
