//! Common types used throughout the ranker

use std::collections::BTreeMap;
use uuid::Uuid;

/// Unique name of a ranked player
pub type PlayerName = String;

/// Identifier for a ranking session, regenerated on every reset
pub type SessionId = Uuid;

/// Full mapping of player name to rating.
///
/// Ordered by name so that ties in the standings and the persisted file come
/// out in a stable order.
pub type RatingTable = BTreeMap<PlayerName, f64>;

/// Which side of a pair the user preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// An unordered matchup between two distinct players.
///
/// The left/right orientation is whatever order the pair was generated in and
/// only serves to make "choose left" and "choose right" meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    pub left: PlayerName,
    pub right: PlayerName,
}

impl Pair {
    pub fn new(left: impl Into<PlayerName>, right: impl Into<PlayerName>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Player sitting on the given side
    pub fn player(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.left, self.right)
    }
}

/// Rating change information for a single decided pair
#[derive(Debug, Clone, PartialEq)]
pub struct RatingChange {
    pub pair: Pair,
    pub winner: Side,
    pub left_before: f64,
    pub left_after: f64,
    pub right_before: f64,
    pub right_after: f64,
}

impl RatingChange {
    pub fn winner_name(&self) -> &str {
        self.pair.player(self.winner)
    }

    pub fn loser_name(&self) -> &str {
        self.pair.player(self.winner.opposite())
    }

    /// Points gained by the winner (equal to the points lost by the loser)
    pub fn points_exchanged(&self) -> f64 {
        match self.winner {
            Side::Left => self.left_after - self.left_before,
            Side::Right => self.right_after - self.right_before,
        }
    }
}

/// One row of the standings: a player and their rating rounded for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub player: PlayerName,
    pub rating: i64,
}
