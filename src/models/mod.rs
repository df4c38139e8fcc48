//! Data models.

pub mod config;
pub mod episode;
pub mod plan;
