//! Command line argument definitions.

use crate::models::config::MatchPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Media File Organizer - Rename TV episode files from TVmaze metadata
#[derive(Parser, Debug)]
#[command(name = "mfo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the episode files
    #[arg(short, long, value_name = "DIR", required_unless_present = "plan")]
    pub dir: Option<PathBuf>,

    /// Show title to look up
    #[arg(short, long, value_name = "TITLE", required_unless_present = "plan")]
    pub title: Option<String>,

    /// Only use episodes from this season
    #[arg(short, long, value_name = "SEASON")]
    pub season: Option<u32>,

    /// Move files into per-season directories
    #[arg(short, long)]
    pub group: bool,

    /// Rename without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Only print the rename plan
    #[arg(long)]
    pub dry_run: bool,

    /// Save the rename plan as JSON
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Execute a previously saved plan file instead of building one
    #[arg(long, value_name = "PLAN_FILE", conflicts_with_all = ["dir", "title", "dry_run", "output"])]
    pub plan: Option<PathBuf>,

    /// How to pick between several matching episodes
    #[arg(long, value_enum, value_name = "POLICY")]
    pub match_policy: Option<MatchPolicy>,

    /// Path to a config.toml
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long)]
    pub skip_preflight: bool,
}
