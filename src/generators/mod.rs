//! Name generators for episode files and season folders.

pub mod filename;
pub mod folder;
