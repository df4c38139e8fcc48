//! Configuration model.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default TVmaze API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "MFO_API_BASE_URL";

/// Application configuration.
///
/// Built once at startup and handed to the organizer by value; nothing in
/// the engine reads configuration from ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show database API configuration.
    pub api: ApiConfig,
    /// Extensions (with leading dot) eligible for renaming.
    pub file_extensions: Vec<String>,
    /// How the matcher resolves a filename matching several episodes.
    pub match_policy: MatchPolicy,
}

/// Show database API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API base URL.
    pub base_url: String,
}

/// Resolution rule for a filename that matches more than one episode.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// The last matching episode in list order wins.
    #[default]
    Last,
    /// The first matching episode in list order wins.
    First,
    /// The episode matching the most of season, number and title wins.
    /// Ties go to the later episode.
    Best,
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Last => write!(f, "last"),
            MatchPolicy::First => write!(f, "first"),
            MatchPolicy::Best => write!(f, "best"),
        }
    }
}

/// Named API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ShowByTitle(&'a str),
    ShowByTitleExactMatch(&'a str),
    ShowById(u64),
    SeasonsByShowId(u64),
    EpisodesByShowId(u64),
    EpisodesBySeasonId(u64),
    ImagesByShowId(u64),
}

impl Endpoint<'_> {
    /// Path (and query) of the endpoint relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::ShowByTitle(title) => {
                format!("/search/shows?q={}", urlencoding::encode(title))
            }
            Endpoint::ShowByTitleExactMatch(title) => {
                format!("/singlesearch/shows?q={}", urlencoding::encode(title))
            }
            Endpoint::ShowById(id) => format!("/shows/{}", id),
            Endpoint::SeasonsByShowId(id) => format!("/shows/{}/seasons", id),
            Endpoint::EpisodesByShowId(id) => format!("/shows/{}/episodes", id),
            Endpoint::EpisodesBySeasonId(id) => format!("/seasons/{}/episodes", id),
            Endpoint::ImagesByShowId(id) => format!("/shows/{}/images", id),
        }
    }
}

impl ApiConfig {
    /// Full URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint<'_>) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            file_extensions: [".avi", ".flv", ".mkv", ".mp4", ".mov", ".txt"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            match_policy: MatchPolicy::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Config {
    /// Check that every configured extension has the `.ext` form.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(crate::Error::Config("api.base_url is empty".to_string()));
        }
        for ext in &self.file_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(crate::Error::Config(format!(
                    "file extension '{}' must look like '.ext'",
                    ext
                )));
            }
        }
        Ok(())
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_file_organizer")
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from an explicit file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from the default location.
///
/// Falls back to defaults when the file is missing or invalid.
pub fn load_config() -> Config {
    let config_path = default_config_path();

    if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => return config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
            }
        }
    }

    Config::default()
}
