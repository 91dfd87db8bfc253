//! Test fixtures shared by the integration tests

use qb_ranker::rating::{EloRatingCalculator, InMemoryRatingStore, JsonFileRatingStore};
use qb_ranker::{RankingSession, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::Arc;

/// Roster of `n` single-letter-ish players: P0, P1, ...
pub fn numbered_roster(n: usize) -> Roster {
    Roster::new((0..n).map(|i| format!("P{}", i))).unwrap()
}

/// Session backed by an in-memory store, with a fixed shuffle seed
pub fn memory_session(roster: Roster, seed: u64) -> (RankingSession, Arc<InMemoryRatingStore>) {
    let store = Arc::new(InMemoryRatingStore::new());
    let session = RankingSession::new(
        roster,
        Arc::new(EloRatingCalculator::default()),
        store.clone(),
        StdRng::seed_from_u64(seed),
    );
    (session, store)
}

/// Session backed by a JSON file at `path`
pub fn file_session(roster: Roster, path: &Path, seed: u64) -> RankingSession {
    RankingSession::new(
        roster,
        Arc::new(EloRatingCalculator::default()),
        Arc::new(JsonFileRatingStore::new(path)),
        StdRng::seed_from_u64(seed),
    )
}

/// Sum of all ratings, which Elo updates leave unchanged
pub fn rating_total(session: &RankingSession) -> f64 {
    session.ratings().values().sum()
}
