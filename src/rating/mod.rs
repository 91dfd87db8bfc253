//! Elo rating calculation and rating persistence
//!
//! This module provides the pairwise Elo update, the calculator trait the
//! session depends on, and the stores that keep ratings between runs.

pub mod calculator;
pub mod elo;
pub mod storage;

// Re-export commonly used types
pub use calculator::RatingCalculator;
pub use elo::{expected_score, update_elo, EloRatingCalculator};
pub use storage::{
    default_ratings, load_ratings, InMemoryRatingStore, JsonFileRatingStore, RatingStore,
    DEFAULT_DATA_FILE,
};
