//! Media File Organizer Library
//!
//! Matches episode files in a show directory against TVmaze episode metadata
//! and builds a rename plan that gives every file a canonical
//! `S01 E01 - Title` name, optionally grouped into season directories.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
