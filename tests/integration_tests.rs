//! Integration tests for the ranker
//!
//! These tests drive complete sessions through the public API:
//! - Full passes over a roster, including completion and re-opening via undo
//! - Persistence across sessions with the JSON file store
//! - Standings and CSV export from a finished session
//! - Randomized action sequences that must keep the session consistent

mod fixtures;

use fixtures::{file_session, memory_session, numbered_roster, rating_total};
use proptest::prelude::*;
use qb_ranker::ranking::{standings, to_csv};
use qb_ranker::session::{ActionOutcome, SessionState};
use qb_ranker::{Roster, Side};
use std::collections::HashSet;
use tempfile::TempDir;

#[test]
fn test_three_player_scenario() {
    let (mut session, store) = memory_session(Roster::new(["A", "B", "C"]).unwrap(), 11);

    let pairs: HashSet<(String, String)> = session
        .pairs()
        .iter()
        .map(|p| {
            let mut names = [p.left.clone(), p.right.clone()];
            names.sort();
            (names[0].clone(), names[1].clone())
        })
        .collect();
    assert_eq!(pairs.len(), 3);
    assert!(pairs.contains(&("A".to_string(), "B".to_string())));
    assert!(pairs.contains(&("A".to_string(), "C".to_string())));
    assert!(pairs.contains(&("B".to_string(), "C".to_string())));

    let pair = session.current_pair().unwrap().clone();
    session.choose(Side::Left).unwrap();

    assert_eq!(session.rating(&pair.left), Some(1516.0));
    assert_eq!(session.rating(&pair.right), Some(1484.0));
    assert_eq!(session.state(), SessionState::InProgress { index: 1 });
    assert_eq!(store.save_calls().len(), 1);
}

#[test]
fn test_full_pass_over_default_roster() {
    let (mut session, store) = memory_session(Roster::default(), 5);
    assert_eq!(session.progress().total, 496);

    let mut decided = 0;
    let mut turn = 0usize;
    while !session.is_complete() {
        turn += 1;
        if turn % 7 == 0 {
            session.skip();
        } else {
            let side = if turn % 2 == 0 { Side::Left } else { Side::Right };
            session.choose(side).unwrap();
            decided += 1;
        }
    }

    assert_eq!(session.progress().completed, 496);
    assert_eq!(session.history_len(), decided);
    assert_eq!(store.save_calls().len(), decided);
    assert!((rating_total(&session) - 32.0 * 1500.0).abs() < 1e-6);

    // Undo from complete re-opens the last pair
    let last_pair = session.pairs()[495].clone();
    let report = session.undo();
    assert!(matches!(report.outcome, ActionOutcome::Undone { .. }));
    assert_eq!(session.state(), SessionState::InProgress { index: 495 });
    assert_eq!(session.current_pair(), Some(&last_pair));
}

#[test]
fn test_ratings_survive_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nfl_qb_rankings.json");
    let roster = Roster::new(["A", "B", "C", "D"]).unwrap();

    let expected = {
        let mut session = file_session(roster.clone(), &path, 1);
        session.choose(Side::Left).unwrap();
        session.choose(Side::Right).unwrap();
        session.ratings().clone()
    };

    let restarted = file_session(roster, &path, 2);
    assert_eq!(restarted.ratings(), &expected);
    // Progress is not persisted, only ratings
    assert_eq!(restarted.progress().completed, 0);
}

#[test]
fn test_undo_and_reset_are_persisted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ratings.json");
    let roster = Roster::new(["A", "B", "C"]).unwrap();

    let mut session = file_session(roster.clone(), &path, 1);
    session.choose(Side::Left).unwrap();
    session.undo();
    assert_eq!(
        file_session(roster.clone(), &path, 1).ratings(),
        session.ratings()
    );

    session.choose(Side::Right).unwrap();
    session.reset();
    let reloaded = file_session(roster, &path, 1);
    assert!(reloaded.ratings().values().all(|r| *r == 1500.0));
}

#[test]
fn test_corrupt_file_is_replaced_on_first_save() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ratings.json");
    std::fs::write(&path, "definitely not json").unwrap();
    let roster = Roster::new(["A", "B"]).unwrap();

    let mut session = file_session(roster.clone(), &path, 1);
    assert!(session.ratings().values().all(|r| *r == 1500.0));

    session.choose(Side::Left).unwrap();
    let reloaded = file_session(roster, &path, 1);
    assert_eq!(reloaded.ratings(), session.ratings());
}

#[test]
fn test_export_after_session() {
    let (mut session, _store) = memory_session(Roster::new(["A", "B", "C"]).unwrap(), 3);
    while !session.is_complete() {
        let pair = session.current_pair().unwrap().clone();
        // Alphabetical preference: A beats everyone, B beats C
        let side = if pair.left < pair.right {
            Side::Left
        } else {
            Side::Right
        };
        session.choose(side).unwrap();
    }

    let entries = standings(session.ratings());
    let names: Vec<_> = entries.iter().map(|e| e.player.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let csv = to_csv(&entries);
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("QB,Elo"));
    assert!(lines.next().unwrap().starts_with("A,15"));
    assert_eq!(csv.lines().count(), 4);
}

#[derive(Debug, Clone)]
enum Action {
    Left,
    Right,
    Skip,
    Undo,
    Reset,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => Just(Action::Left),
        4 => Just(Action::Right),
        2 => Just(Action::Skip),
        2 => Just(Action::Undo),
        1 => Just(Action::Reset),
    ]
}

proptest! {
    #[test]
    fn prop_random_actions_keep_session_consistent(
        n in 0usize..7,
        seed in any::<u64>(),
        actions in proptest::collection::vec(action_strategy(), 0..60),
    ) {
        let (mut session, _store) = memory_session(numbered_roster(n), seed);
        let total = n * n.saturating_sub(1) / 2;

        for action in actions {
            let before_ratings = session.ratings().clone();
            let before_completed = session.progress().completed;

            match action {
                Action::Left => { session.choose(Side::Left).unwrap(); }
                Action::Right => { session.choose(Side::Right).unwrap(); }
                Action::Skip => { session.skip(); }
                Action::Undo => {
                    let had_history = session.can_undo();
                    session.undo();
                    if !had_history {
                        prop_assert_eq!(session.ratings(), &before_ratings);
                        prop_assert_eq!(session.progress().completed, before_completed);
                    }
                }
                Action::Reset => {
                    session.reset();
                    prop_assert!(session.ratings().values().all(|r| *r == 1500.0));
                    prop_assert_eq!(session.progress().completed, 0);
                    prop_assert!(!session.can_undo());
                    let unique: HashSet<_> = session
                        .pairs()
                        .iter()
                        .map(|pair| {
                            let mut names = [pair.left.clone(), pair.right.clone()];
                            names.sort();
                            names
                        })
                        .collect();
                    prop_assert_eq!(unique.len(), total);
                    prop_assert_eq!(session.pairs().len(), total);
                }
            }

            let progress = session.progress();
            prop_assert_eq!(progress.total, total);
            prop_assert!(progress.completed <= total);
            prop_assert_eq!(session.is_complete(), progress.completed == total);
            prop_assert!(session.history_len() <= progress.completed);
            prop_assert_eq!(session.ratings().len(), n);
            prop_assert!((rating_total(&session) - n as f64 * 1500.0).abs() < 1e-6);
        }
    }
}
