//! Rating system configuration

use crate::error::{RankerError, Result};
use serde::{Deserialize, Serialize};

/// Elo parameters. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating every player starts from (and returns to on reset)
    pub default_rating: f64,
    /// Maximum points exchanged per comparison
    pub k_factor: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_rating: 1500.0,
            k_factor: 32.0,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RankerError::ConfigurationError {
                message: format!("K-factor must be positive, got {}", self.k_factor),
            }
            .into());
        }

        if !self.default_rating.is_finite() {
            return Err(RankerError::ConfigurationError {
                message: "Default rating must be a finite number".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
