//! Rating calculator trait
//!
//! The session only talks to this trait, so the update formula can be swapped
//! without touching pairing or undo logic.

use crate::types::Side;

/// Trait for calculating rating changes after a pairwise decision
pub trait RatingCalculator: Send + Sync {
    /// Return the updated `(left, right)` ratings after `winner` was preferred.
    ///
    /// Must be pure: the same inputs always give the same outputs.
    fn rate_pair(&self, left: f64, right: f64, winner: Side) -> (f64, f64);

    /// Probability that `left` is preferred over `right`
    fn expected_score(&self, left: f64, right: f64) -> f64;

    /// Rating assigned to players with no history
    fn initial_rating(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}
