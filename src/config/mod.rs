//! Configuration management for the ranker
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{
    parse_roster_list, validate_config, AppConfig, RosterSettings, ServiceSettings,
    StorageSettings,
};
pub use rating::RatingConfig;
