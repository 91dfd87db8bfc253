//! Pairing session: the shuffled, one-pass traversal of every pair with
//! choose, skip, undo and reset.

pub mod engine;
pub mod history;
pub mod pairing;
pub mod state;

// Re-export commonly used types
pub use engine::{
    ActionOutcome, ActionReport, IgnoredReason, PersistStatus, Progress, RankingSession,
};
pub use history::{History, HistoryEntry};
pub use pairing::{generate_pairs, shuffled_pairs};
pub use state::SessionState;
