//! A single point-valued clue

use serde::{Deserialize, Serialize};

use super::media::Song;
use crate::id::Id;

/// One question on the board
///
/// The point value is fixed when the clue is created. The done flag only
/// ever goes from `false` to `true`, and only the game flips it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    id: Id,
    title: String,
    song: Song,
    point_value: u32,
    is_done: bool,
}

impl Clue {
    /// Creates a fresh clue that is not done yet
    ///
    /// Any point value is accepted here. Whether it fits the board,
    /// including being non-zero, is checked by
    /// [`ClueSet::validate_with`](super::clue_set::ClueSet::validate_with).
    pub fn new(title: impl Into<String>, song: Song, point_value: u32) -> Self {
        Self {
            id: Id::new(),
            title: title.into(),
            song,
            point_value,
            is_done: false,
        }
    }

    /// Returns the clue's unique identifier
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the song backing this clue
    pub fn song(&self) -> &Song {
        &self.song
    }

    /// Returns the points won or lost by responding to this clue
    pub fn point_value(&self) -> u32 {
        self.point_value
    }

    /// Whether the clue has already been played
    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub(crate) fn mark_done(&mut self) {
        self.is_done = true;
    }
}
