//! TVmaze API client.
//!
//! Lookup failures (network errors, error statuses, unknown shows) are logged
//! and collapsed into `None`; callers treat that as "no episode data".

use crate::models::config::{ApiConfig, Endpoint};
use crate::models::episode::{Episode, EpisodeImage};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// TVmaze API client.
pub struct TvMazeClient {
    api: ApiConfig,
    client: reqwest::Client,
}

/// Show summary as returned by the single search endpoint.
#[derive(Debug, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    pub premiered: Option<String>,
}

/// Fuzzy search hit.
#[derive(Debug, Deserialize)]
pub struct ShowSearchItem {
    pub score: f64,
    pub show: Show,
}

/// Episode as returned by the API. Specials carry no number.
#[derive(Debug, Deserialize)]
pub struct TvMazeEpisode {
    pub name: String,
    pub season: u32,
    pub number: Option<u32>,
    #[serde(default)]
    pub airdate: Option<String>,
    #[serde(default)]
    pub image: Option<EpisodeImage>,
}

impl TvMazeClient {
    /// Create a new client.
    pub fn new(api: ApiConfig) -> Self {
        let client = reqwest::Client::new();
        Self { api, client }
    }

    /// GET an endpoint and decode its JSON body.
    async fn fetch_data<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Option<T> {
        let url = self.api.url(endpoint);
        tracing::debug!("GET {}", url);

        match self.get_json(&url).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!("Request to {} failed: {}", url, e);
                None
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> reqwest::Result<T> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Search shows by title.
    pub async fn search_shows(&self, title: &str) -> Option<Vec<ShowSearchItem>> {
        self.fetch_data(Endpoint::ShowByTitle(title)).await
    }

    /// Resolve a title to exactly one show.
    pub async fn find_show(&self, title: &str) -> Option<Show> {
        self.fetch_data(Endpoint::ShowByTitleExactMatch(title)).await
    }

    /// Fetch the episode list of a show, optionally restricted to one season.
    pub async fn fetch_episodes(&self, title: &str, season: Option<u32>) -> Option<Vec<Episode>> {
        let show = self.find_show(title).await?;
        tracing::info!("Resolved '{}' to show {} ({})", title, show.name, show.id);

        let episodes: Vec<TvMazeEpisode> = self
            .fetch_data(Endpoint::EpisodesByShowId(show.id))
            .await?;

        Some(into_episodes(episodes, season))
    }
}

/// Convert API episodes, dropping unnumbered specials and other seasons.
pub fn into_episodes(episodes: Vec<TvMazeEpisode>, season: Option<u32>) -> Vec<Episode> {
    episodes
        .into_iter()
        .filter(|e| season.map_or(true, |s| e.season == s))
        .filter_map(|e| match e.number {
            Some(number) => Some(Episode {
                name: e.name,
                season: e.season,
                number,
                airdate: e.airdate.unwrap_or_default(),
                image: e.image,
            }),
            None => {
                tracing::debug!("Skipping unnumbered episode '{}'", e.name);
                None
            }
        })
        .collect()
}
