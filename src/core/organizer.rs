//! Organizer facade.
//!
//! Holds the immutable configuration and the episode source, and wires the
//! fetch and planning steps together.

use crate::core::planner::generate_rename_plan;
use crate::models::config::Config;
use crate::models::episode::Episode;
use crate::models::plan::RenamePlan;
use crate::services::tvmaze::TvMazeClient;
use crate::Result;
use std::path::Path;

/// Episode organizer.
pub struct Organizer {
    config: Config,
    client: TvMazeClient,
}

impl Organizer {
    /// Create an organizer from a configuration value.
    pub fn new(config: Config) -> Self {
        let client = TvMazeClient::new(config.api.clone());
        Self { config, client }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &TvMazeClient {
        &self.client
    }

    /// Fetch episodes for a show title. `None` when the lookup failed.
    pub async fn fetch_episodes(&self, title: &str, season: Option<u32>) -> Option<Vec<Episode>> {
        self.client.fetch_episodes(title, season).await
    }

    /// Build a rename plan for `dir` from an episode list.
    pub fn plan(&self, episodes: &[Episode], dir: &Path, group_seasons: bool) -> Result<RenamePlan> {
        generate_rename_plan(
            episodes,
            dir,
            Some(&self.config.file_extensions),
            group_seasons,
            self.config.match_policy,
        )
    }

    /// Fetch episode data and build the rename plan.
    ///
    /// Returns `Ok(None)` when no episode data could be found for `title`.
    pub async fn organize(
        &self,
        dir: &Path,
        title: &str,
        season: Option<u32>,
        group_seasons: bool,
    ) -> Result<Option<RenamePlan>> {
        let episodes = match self.fetch_episodes(title, season).await {
            Some(episodes) if !episodes.is_empty() => episodes,
            _ => return Ok(None),
        };

        self.plan(&episodes, dir, group_seasons).map(Some)
    }
}
