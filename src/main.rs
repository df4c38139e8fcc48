//! Media File Organizer CLI
//!
//! A command-line tool that renames TV episode files using TVmaze metadata.

use clap::Parser;
use media_file_organizer::cli::{
    args::Cli,
    commands::{execute, organize},
};
use media_file_organizer::core::organizer::Organizer;
use media_file_organizer::models::config;
use media_file_organizer::preflight;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Saved plans need no lookup
    if let Some(plan_file) = &cli.plan {
        execute::execute_plan_file(plan_file, cli.yes)?;
        return Ok(());
    }

    let (Some(dir), Some(title)) = (cli.dir.as_deref(), cli.title.as_deref()) else {
        anyhow::bail!("--dir and --title are required");
    };

    let mut config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };
    if let Some(policy) = cli.match_policy {
        config.match_policy = policy;
    }

    let organizer = Organizer::new(config);

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        run_preflight_checks(&organizer, dir, title).await?;
    }

    let options = organize::OrganizeOptions {
        dir,
        title,
        season: cli.season,
        group_seasons: cli.group,
        dry_run: cli.dry_run,
        assume_yes: cli.yes,
        output: cli.output.as_deref(),
    };
    organize::organize(&organizer, &options).await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_file_organizer=debug")
    } else {
        EnvFilter::new("media_file_organizer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(organizer: &Organizer, dir: &Path, title: &str) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(dir, organizer.client(), title).await;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
