//! Ordered view of the current ratings

use crate::types::{RankedEntry, RatingTable};
use crate::utils::display_rating;
use std::cmp::Ordering;

/// Players sorted by descending rating, with ratings rounded for display.
///
/// Sorting uses the unrounded values. Equal ratings keep name order.
pub fn standings(ratings: &RatingTable) -> Vec<RankedEntry> {
    let mut ordered: Vec<(&String, f64)> = ratings.iter().map(|(p, r)| (p, *r)).collect();
    ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ordered
        .into_iter()
        .map(|(player, rating)| RankedEntry {
            player: player.clone(),
            rating: display_rating(rating),
        })
        .collect()
}

/// Render standings as an aligned terminal table
pub fn render_table(entries: &[RankedEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|e| e.player.chars().count())
        .max()
        .unwrap_or(2)
        .max(2); // at least "QB"

    let mut out = String::new();
    out.push_str(&format!("  # | {:<name_width$} |  Elo\n", "QB"));
    out.push_str(&format!("----|-{}-|------\n", "-".repeat(name_width)));

    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3} | {:<name_width$} | {:>4}\n",
            i + 1,
            entry.player,
            entry.rating
        ));
    }

    out
}
