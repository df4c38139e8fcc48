//! Error types for the media file organizer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media file organizer.
#[derive(Error, Debug)]
pub enum Error {
    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("File already exists: {0}")]
    FileAlreadyExists(String),

    // Episode data errors
    #[error("Invalid airdate '{airdate}' for episode '{episode}'")]
    InvalidAirdate { episode: String, airdate: String },

    #[error("Season {0} has no episodes")]
    EmptySeason(u32),

    #[error("Invalid episode pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // Planning errors
    #[error("No episode data found for '{0}'")]
    NoEpisodes(String),

    #[error("Directory {dir} does not contain any ({extensions}) files")]
    NoMatchingFiles { dir: String, extensions: String },

    #[error("Invalid plan file: {0}")]
    InvalidPlanFile(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
