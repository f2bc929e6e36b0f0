//! Contestants
//!
//! A player is identified by the [`Id`] it receives when constructed, not
//! by its name: two contestants may share a name and still be distinct.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::id::Id;

/// A contestant with a score and turn-control flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: Id,
    name: String,
    score: i64,
    can_select_clue: bool,
    can_respond_to_current_clue: bool,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Player {
    /// Creates a player with a score of zero
    ///
    /// Surrounding whitespace is trimmed from `name`.
    pub fn new(name: &str) -> Self {
        Self::with_score(name, 0)
    }

    /// Creates a player starting from `score`
    pub fn with_score(name: &str, score: i64) -> Self {
        Self {
            id: Id::new(),
            name: rustrict::trim_whitespace(name).to_owned(),
            score,
            can_select_clue: false,
            can_respond_to_current_clue: false,
        }
    }

    /// Returns the player's unique identifier
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the trimmed display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current score, which may be negative
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Whether this player picks the next clue
    pub fn can_select_clue(&self) -> bool {
        self.can_select_clue
    }

    /// Whether this player may still respond to the selected clue
    pub fn can_respond_to_current_clue(&self) -> bool {
        self.can_respond_to_current_clue
    }

    pub(crate) fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    /// Adds `delta` to the score, stopping at the bounds of `i64`
    pub(crate) fn add_to_score(&mut self, delta: i64) {
        self.score = self.score.saturating_add(delta);
    }

    pub(crate) fn set_can_select_clue(&mut self, value: bool) {
        self.can_select_clue = value;
    }

    pub(crate) fn set_can_respond_to_current_clue(&mut self, value: bool) {
        self.can_respond_to_current_clue = value;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let player = Player::new("  Alice \n");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.score(), 0);
        assert!(!player.can_select_clue());
        assert!(!player.can_respond_to_current_clue());
    }

    #[test]
    fn test_blank_name_trims_to_empty() {
        assert_eq!(Player::new(" \t ").name(), "");
    }

    #[test]
    fn test_equality_is_by_id() {
        let alice = Player::new("Alice");
        let other_alice = Player::new("Alice");
        assert_ne!(alice, other_alice);

        let mut changed = alice.clone();
        changed.set_score(-600);
        changed.set_can_select_clue(true);
        assert_eq!(alice, changed);

        let set: HashSet<_> = [alice, changed, other_alice].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_score_arithmetic() {
        let mut player = Player::with_score("Bob", 200);
        player.add_to_score(-600);
        assert_eq!(player.score(), -400);
        player.set_score(1000);
        assert_eq!(player.score(), 1000);
    }

    #[test]
    fn test_score_saturates_at_bounds() {
        let mut player = Player::with_score("Bob", i64::MAX - 100);
        player.add_to_score(1000);
        assert_eq!(player.score(), i64::MAX);

        player.set_score(i64::MIN + 100);
        player.add_to_score(-1000);
        assert_eq!(player.score(), i64::MIN);
    }

    #[test]
    fn test_serde_preserves_identity() {
        let player = Player::with_score("Carol", 800);
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();

        assert_eq!(back, player);
        assert_eq!(back.name(), "Carol");
        assert_eq!(back.score(), 800);
    }
}
