//! The fixed list of players being ranked

use crate::error::{RankerError, Result};
use crate::types::PlayerName;
use std::collections::HashSet;

/// Quarterbacks ranked when no roster is configured
pub const DEFAULT_ROSTER: [&str; 32] = [
    "Jordan Love",
    "Caleb Williams",
    "JJ McCarthy",
    "Jared Goff",
    "Dak Prescott",
    "Jaxon Dart",
    "Jalen Hurts",
    "Jayden Daniels",
    "Matt Stafford",
    "Sam Darnold",
    "Kyler Murray",
    "Brock Purdy",
    "Tyler Shough",
    "Baker Mayfield",
    "Bryce Young",
    "Michael Penix",
    "Josh Allen",
    "Tua Tagovailoa",
    "Drake Maye",
    "Justin Fields",
    "Cam Ward",
    "Trevor Lawrence",
    "CJ Stroud",
    "Daniel Jones",
    "Shedeur Sanders",
    "Lamar Jackson",
    "Aaron Rodgers",
    "Joe Burrow",
    "Justin Herbert",
    "Geno Smith",
    "Bo Nix",
    "Patrick Mahomes",
];

/// Validated, ordered list of unique player names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerName>,
}

impl Roster {
    /// Build a roster, rejecting blank and duplicate names.
    ///
    /// Names are trimmed. An empty roster is allowed; it simply has no pairs.
    pub fn new<I, S>(players: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for player in players {
            let name = player.into().trim().to_string();
            if name.is_empty() {
                return Err(RankerError::InvalidRoster {
                    reason: "player names cannot be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(name.clone()) {
                return Err(RankerError::InvalidRoster {
                    reason: format!("duplicate player '{}'", name),
                }
                .into());
            }
            names.push(name);
        }

        Ok(Self { players: names })
    }

    pub fn players(&self) -> &[PlayerName] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    /// Number of unordered pairs: N * (N - 1) / 2
    pub fn pair_count(&self) -> usize {
        let n = self.players.len();
        n * n.saturating_sub(1) / 2
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            players: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
        }
    }
}
