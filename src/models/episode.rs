//! Episode data model.

use serde::{Deserialize, Serialize};

/// A single episode record from the show database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title.
    pub name: String,
    /// Season number.
    pub season: u32,
    /// Episode number within the season.
    pub number: u32,
    /// Air date (`YYYY-MM-DD`).
    pub airdate: String,
    /// Episode still images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EpisodeImage>,
}

/// Image URLs attached to an episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeImage {
    pub medium: String,
    pub original: String,
}

impl Episode {
    /// Create an episode without images.
    pub fn new(season: u32, number: u32, name: impl Into<String>, airdate: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            season,
            number,
            airdate: airdate.into(),
            image: None,
        }
    }
}

/// A directory listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name without directory.
    pub name: String,
    /// Whether the entry is a regular file.
    pub is_file: bool,
}

impl FileEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: true,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: false,
        }
    }
}
