//! Elo rating implementation
//!
//! Thin layer over the `skillratings` Elo module. The expected score for the
//! left player is `1 / (1 + 10^((right - left) / 400))`, the right player gets
//! the complement, and each side moves by `K * (actual - expected)`. Ratings are
//! never clamped, so long losing streaks can push a player below zero.

use crate::config::RatingConfig;
use crate::rating::calculator::RatingCalculator;
use crate::types::Side;
use skillratings::elo::{elo, EloConfig, EloRating};
use skillratings::Outcomes;

/// Pure two-player Elo update.
///
/// Returns the new `(left, right)` ratings. The points gained by one side
/// always equal the points lost by the other.
pub fn update_elo(left: f64, right: f64, winner: Side, k_factor: f64) -> (f64, f64) {
    let outcome = match winner {
        Side::Left => Outcomes::WIN,
        Side::Right => Outcomes::LOSS,
    };

    let (new_left, new_right) = elo(
        &EloRating { rating: left },
        &EloRating { rating: right },
        &outcome,
        &EloConfig { k: k_factor },
    );

    (new_left.rating, new_right.rating)
}

/// Expected score of `left` against `right`
pub fn expected_score(left: f64, right: f64) -> f64 {
    let (expected_left, _expected_right) =
        skillratings::elo::expected_score(&EloRating { rating: left }, &EloRating { rating: right });
    expected_left
}

/// Elo rating calculator implementation
#[derive(Debug, Clone)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn k_factor(&self) -> f64 {
        self.config.k_factor
    }
}

impl Default for EloRatingCalculator {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
        }
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn rate_pair(&self, left: f64, right: f64, winner: Side) -> (f64, f64) {
        update_elo(left, right, winner, self.config.k_factor)
    }

    fn expected_score(&self, left: f64, right: f64) -> f64 {
        expected_score(left, right)
    }

    fn initial_rating(&self) -> f64 {
        self.config.default_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }
}
