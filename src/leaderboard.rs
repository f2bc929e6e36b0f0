//! Leaders and standings
//!
//! Scores live on the players themselves; this module only derives views
//! from them. Neither function keeps state between calls.

use itertools::Itertools;

use crate::player::Player;

/// Returns every player tied for the highest strictly positive score
///
/// Players keep their relative order from `players`. A player with zero or
/// a negative score is never a leader, so the result is empty until
/// somebody scores.
pub fn current_leaders(players: &[Player]) -> Vec<&Player> {
    players
        .iter()
        .filter(|player| player.score() > 0)
        .max_set_by_key(|player| player.score())
}

/// Returns all players sorted by descending score
///
/// Ties keep their relative order from `players`.
pub fn standings(players: &[Player]) -> Vec<&Player> {
    players
        .iter()
        .sorted_by_key(|player| std::cmp::Reverse(player.score()))
        .collect_vec()
}
