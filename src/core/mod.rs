//! Core business logic modules.

pub mod executor;
pub mod matcher;
pub mod organizer;
pub mod planner;
pub mod scanner;
pub mod sorter;
