//! QB Ranker - pairwise Elo ranking of a fixed roster
//!
//! This crate walks a user through every pair of players exactly once, in
//! shuffled order, updating Elo ratings after each choice. It supports
//! skipping, undoing and resetting, persists ratings after every change, and
//! exports the standings as CSV.

pub mod config;
pub mod console;
pub mod error;
pub mod ranking;
pub mod rating;
pub mod roster;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RankerError, Result};
pub use types::*;

// Re-export key components
pub use rating::{EloRatingCalculator, JsonFileRatingStore, RatingCalculator, RatingStore};
pub use roster::Roster;
pub use session::RankingSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
