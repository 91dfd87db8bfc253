//! Pair generation for a ranking session.
//!
//! Every unordered combination of two roster players appears exactly once.
//! Combinations are produced in roster order (`i < j`) and then shuffled.

use crate::roster::Roster;
use crate::types::Pair;
use rand::seq::SliceRandom;
use rand::Rng;

/// All unordered pairs of the roster, in roster order
pub fn generate_pairs(roster: &Roster) -> Vec<Pair> {
    let players = roster.players();
    let mut pairs = Vec::with_capacity(roster.pair_count());

    for (i, left) in players.iter().enumerate() {
        for right in &players[i + 1..] {
            pairs.push(Pair::new(left.clone(), right.clone()));
        }
    }

    pairs
}

/// All unordered pairs of the roster in random order
pub fn shuffled_pairs<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Vec<Pair> {
    let mut pairs = generate_pairs(roster);
    pairs.shuffle(rng);
    pairs
}
