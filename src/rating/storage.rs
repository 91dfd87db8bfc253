//! Rating storage interface and implementations
//!
//! The store holds one flat `name -> rating` mapping. It is read whole at
//! startup and overwritten whole after every change; there is no locking and
//! the last writer wins.

use crate::error::{RankerError, Result};
use crate::roster::Roster;
use crate::types::RatingTable;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use tracing::{debug, info, warn};

/// File the ratings are kept in when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "nfl_qb_rankings.json";

/// Trait for rating storage operations
#[cfg_attr(test, mockall::automock)]
pub trait RatingStore: Send + Sync {
    /// Read the stored mapping. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> Result<Option<RatingTable>>;

    /// Replace the stored mapping with `ratings`
    fn save(&self, ratings: &RatingTable) -> Result<()>;

    /// Human readable location, used in log lines
    fn describe(&self) -> String;
}

/// Fresh mapping with every roster player at `default_rating`
pub fn default_ratings(roster: &Roster, default_rating: f64) -> RatingTable {
    roster
        .players()
        .iter()
        .map(|player| (player.clone(), default_rating))
        .collect()
}

/// Trim stored names the same way roster names are trimmed.
///
/// An exact key wins over a padded duplicate of the same name. Names that are
/// blank once trimmed are dropped.
fn normalize_names(stored: RatingTable) -> RatingTable {
    let (exact, padded): (Vec<_>, Vec<_>) = stored
        .into_iter()
        .partition(|(name, _)| name.trim() == name.as_str());

    let mut ratings = RatingTable::new();
    for (name, rating) in exact.into_iter().chain(padded) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            warn!("Ignoring stored rating {} with a blank name", rating);
            continue;
        }
        ratings.entry(trimmed.to_string()).or_insert(rating);
    }
    ratings
}

/// Load ratings for `roster`, falling back to defaults when the store is empty
/// or unreadable.
///
/// Roster players missing from the stored mapping are added at
/// `default_rating`. Stored names that are not on the roster are kept.
pub fn load_ratings(store: &dyn RatingStore, roster: &Roster, default_rating: f64) -> RatingTable {
    let mut ratings = match store.read() {
        Ok(Some(stored)) => {
            let ratings = normalize_names(stored);
            info!(
                "Loaded {} ratings from {}",
                ratings.len(),
                store.describe()
            );
            ratings
        }
        Ok(None) => {
            info!(
                "No stored ratings at {}, starting everyone at {}",
                store.describe(),
                default_rating
            );
            RatingTable::new()
        }
        Err(e) => {
            warn!(
                "Could not read ratings from {} ({}), starting everyone at {}",
                store.describe(),
                e,
                default_rating
            );
            RatingTable::new()
        }
    };

    for player in roster.players() {
        ratings.entry(player.clone()).or_insert_with(|| {
            debug!("Adding missing player '{}' at {}", player, default_rating);
            default_rating
        });
    }

    for player in ratings.keys().filter(|name| !roster.contains(name.as_str())) {
        debug!("Keeping stored rating for '{}', who is not on the roster", player);
    }

    ratings
}

/// JSON file rating store
#[derive(Debug, Clone)]
pub struct JsonFileRatingStore {
    path: PathBuf,
}

impl JsonFileRatingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonFileRatingStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl RatingStore for JsonFileRatingStore {
    fn read(&self) -> Result<Option<RatingTable>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RankerError::StorageFailed {
                    message: format!("failed to read {}: {}", self.path.display(), e),
                }
                .into())
            }
        };

        let ratings: RatingTable =
            serde_json::from_str(&contents).map_err(|e| RankerError::StorageFailed {
                message: format!("corrupt ratings file {}: {}", self.path.display(), e),
            })?;

        Ok(Some(ratings))
    }

    fn save(&self, ratings: &RatingTable) -> Result<()> {
        let json = serde_json::to_string_pretty(ratings)?;
        let temp_path = self.temp_path();

        // Write beside the target and rename so readers never see half a file
        std::fs::write(&temp_path, json).map_err(|e| RankerError::StorageFailed {
            message: format!("failed to write {}: {}", temp_path.display(), e),
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| RankerError::StorageFailed {
            message: format!("failed to replace {}: {}", self.path.display(), e),
        })?;

        debug!("Saved {} ratings to {}", ratings.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory rating store that records every save
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    ratings: RwLock<Option<RatingTable>>,
    save_calls: RwLock<Vec<RatingTable>>,
    fail_saves: AtomicBool,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `ratings`
    pub fn with_ratings(ratings: RatingTable) -> Self {
        Self {
            ratings: RwLock::new(Some(ratings)),
            ..Self::default()
        }
    }

    /// Every mapping passed to `save`, oldest first
    pub fn save_calls(&self) -> Vec<RatingTable> {
        self.save_calls
            .read()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Currently stored mapping
    pub fn stored(&self) -> Option<RatingTable> {
        self.ratings.read().ok().and_then(|r| r.clone())
    }

    /// Make subsequent saves fail, to exercise the write-failure path
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl RatingStore for InMemoryRatingStore {
    fn read(&self) -> Result<Option<RatingTable>> {
        let ratings = self
            .ratings
            .read()
            .map_err(|_| RankerError::StorageFailed {
                message: "Failed to acquire ratings read lock".to_string(),
            })?;

        Ok(ratings.clone())
    }

    fn save(&self, ratings: &RatingTable) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RankerError::StorageFailed {
                message: "in-memory store is configured to fail".to_string(),
            }
            .into());
        }

        if let Ok(mut calls) = self.save_calls.write() {
            calls.push(ratings.clone());
        }

        let mut stored = self
            .ratings
            .write()
            .map_err(|_| RankerError::StorageFailed {
                message: "Failed to acquire ratings write lock".to_string(),
            })?;

        *stored = Some(ratings.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
