//! Ranking session: walks the shuffled pairing sequence once, applying Elo
//! updates for each decision.
//!
//! Every mutating action (choose, undo, reset) rewrites the whole rating store.
//! A failed write is reported back in the [`ActionReport`] and logged, but the
//! in-memory session keeps going.

use crate::error::{RankerError, Result};
use crate::rating::storage::{default_ratings, load_ratings};
use crate::rating::{RatingCalculator, RatingStore};
use crate::roster::Roster;
use crate::session::history::{History, HistoryEntry};
use crate::session::pairing::shuffled_pairs;
use crate::session::state::SessionState;
use crate::types::{Pair, PlayerName, RatingChange, RatingTable, SessionId, Side};
use crate::utils::{current_timestamp, generate_session_id};
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Progress through the pairing sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Fraction of pairs consumed, 1.0 for an empty sequence
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.completed, self.total)
    }
}

/// Why an action had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// No pair left to decide or skip
    SessionComplete,
    /// Undo requested with an empty history
    NothingToUndo,
}

/// What an action did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Decided(RatingChange),
    Skipped(Pair),
    Undone { pair: Pair },
    Reset { session_id: SessionId },
    Ignored(IgnoredReason),
}

/// Result of writing the ratings after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    /// The action did not change ratings
    NotNeeded,
    Saved,
    /// The write failed; the session state is still updated
    Failed(String),
}

/// Report handed back for every user action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub outcome: ActionOutcome,
    pub persist: PersistStatus,
}

impl ActionReport {
    fn unpersisted(outcome: ActionOutcome) -> Self {
        Self {
            outcome,
            persist: PersistStatus::NotNeeded,
        }
    }

    /// Warning to surface to the user when the ratings could not be saved
    pub fn persist_warning(&self) -> Option<&str> {
        match &self.persist {
            PersistStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn was_ignored(&self) -> bool {
        matches!(self.outcome, ActionOutcome::Ignored(_))
    }
}

/// A single user's pass over every pair of a roster
pub struct RankingSession {
    id: SessionId,
    roster: Roster,
    calculator: Arc<dyn RatingCalculator>,
    store: Arc<dyn RatingStore>,
    rng: StdRng,
    ratings: RatingTable,
    pairs: Vec<Pair>,
    state: SessionState,
    history: History,
}

impl RankingSession {
    /// Start a session, loading ratings from `store` (or defaults) and
    /// shuffling the full pairing sequence with `rng`.
    pub fn new(
        roster: Roster,
        calculator: Arc<dyn RatingCalculator>,
        store: Arc<dyn RatingStore>,
        mut rng: StdRng,
    ) -> Self {
        let ratings = load_ratings(store.as_ref(), &roster, calculator.initial_rating());
        let pairs = shuffled_pairs(&roster, &mut rng);
        let state = SessionState::starting(pairs.len());
        let id = generate_session_id();

        info!(
            "Started session {} with {} players and {} pairs",
            id,
            roster.len(),
            pairs.len()
        );

        Self {
            id,
            roster,
            calculator,
            store,
            rng,
            ratings,
            pairs,
            state,
            history: History::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ratings(&self) -> &RatingTable {
        &self.ratings
    }

    pub fn rating(&self, player: &str) -> Option<f64> {
        self.ratings.get(player).copied()
    }

    /// Rating every player returns to on reset
    pub fn initial_rating(&self) -> f64 {
        self.calculator.initial_rating()
    }

    /// The full pairing sequence, fixed until the next reset
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Pair waiting for a decision, `None` once complete
    pub fn current_pair(&self) -> Option<&Pair> {
        match self.state {
            SessionState::InProgress { index } => self.pairs.get(index),
            SessionState::Complete => None,
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.state.completed(self.pairs.len()),
            total: self.pairs.len(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Pair decided by the most recent undoable decision
    pub fn last_decided_pair(&self) -> Option<&Pair> {
        self.history.peek().map(|entry| &entry.pair)
    }

    /// Probability the left player of the current pair is preferred
    pub fn current_expected_score(&self) -> Option<f64> {
        let pair = self.current_pair()?;
        let left = self.rating(&pair.left)?;
        let right = self.rating(&pair.right)?;
        Some(self.calculator.expected_score(left, right))
    }

    /// Record that `winner` was preferred in the current pair and move on
    pub fn choose(&mut self, winner: Side) -> Result<ActionReport> {
        let pair = match self.current_pair() {
            Some(pair) => pair.clone(),
            None => {
                debug!("Ignoring {} choice, session {} is complete", winner, self.id);
                return Ok(ActionReport::unpersisted(ActionOutcome::Ignored(
                    IgnoredReason::SessionComplete,
                )));
            }
        };

        let left_before = self.rating_or_err(&pair.left)?;
        let right_before = self.rating_or_err(&pair.right)?;
        let (left_after, right_after) =
            self.calculator.rate_pair(left_before, right_before, winner);

        self.history.push(HistoryEntry {
            ratings: self.ratings.clone(),
            pair: pair.clone(),
            taken_at: current_timestamp(),
        });
        self.ratings.insert(pair.left.clone(), left_after);
        self.ratings.insert(pair.right.clone(), right_after);

        let persist = self.persist();
        self.state = self.state.advanced(self.pairs.len());

        let change = RatingChange {
            pair,
            winner,
            left_before,
            left_after,
            right_before,
            right_after,
        };
        debug!(
            "{} beat {} ({:+.1} points), progress {}",
            change.winner_name(),
            change.loser_name(),
            change.points_exchanged(),
            self.progress()
        );

        Ok(ActionReport {
            outcome: ActionOutcome::Decided(change),
            persist,
        })
    }

    /// Move past the current pair without rating it.
    ///
    /// Skips are not recorded in history, so a later undo rolls back the most
    /// recent decision while the skipped pair stays consumed.
    pub fn skip(&mut self) -> ActionReport {
        let pair = match self.current_pair() {
            Some(pair) => pair.clone(),
            None => {
                debug!("Ignoring skip, session {} is complete", self.id);
                return ActionReport::unpersisted(ActionOutcome::Ignored(
                    IgnoredReason::SessionComplete,
                ));
            }
        };

        self.state = self.state.advanced(self.pairs.len());
        debug!("Skipped {}, progress {}", pair, self.progress());

        ActionReport::unpersisted(ActionOutcome::Skipped(pair))
    }

    /// Restore the ratings from before the most recent decision and step the
    /// index back by one. Allowed from `Complete`, which re-opens the session.
    pub fn undo(&mut self) -> ActionReport {
        let Some(entry) = self.history.pop() else {
            debug!("Nothing to undo in session {}", self.id);
            return ActionReport::unpersisted(ActionOutcome::Ignored(IgnoredReason::NothingToUndo));
        };

        self.ratings = entry.ratings;
        self.state = self.state.rewound(self.pairs.len());
        let persist = self.persist();

        debug!(
            "Undid decision on {} (taken {}), progress {}",
            entry.pair,
            entry.taken_at.format("%H:%M:%S"),
            self.progress()
        );

        ActionReport {
            outcome: ActionOutcome::Undone { pair: entry.pair },
            persist,
        }
    }

    /// Put every player back at the initial rating and start over with a
    /// freshly shuffled pairing sequence
    pub fn reset(&mut self) -> ActionReport {
        self.id = generate_session_id();
        self.ratings = default_ratings(&self.roster, self.calculator.initial_rating());
        self.pairs = shuffled_pairs(&self.roster, &mut self.rng);
        self.state = SessionState::starting(self.pairs.len());
        self.history.clear();
        let persist = self.persist();

        info!(
            "Reset rankings, new session {} with {} pairs",
            self.id,
            self.pairs.len()
        );

        ActionReport {
            outcome: ActionOutcome::Reset {
                session_id: self.id,
            },
            persist,
        }
    }

    fn rating_or_err(&self, player: &PlayerName) -> Result<f64> {
        self.rating(player).ok_or_else(|| {
            RankerError::PlayerNotFound {
                player: player.clone(),
            }
            .into()
        })
    }

    fn persist(&self) -> PersistStatus {
        match self.store.save(&self.ratings) {
            Ok(()) => PersistStatus::Saved,
            Err(e) => {
                warn!(
                    "Failed to save ratings to {}: {}",
                    self.store.describe(),
                    e
                );
                PersistStatus::Failed(e.to_string())
            }
        }
    }
}
