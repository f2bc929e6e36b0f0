//! Named groups of clues

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{clue::Clue, media::Song};
use crate::{config::RoundConfig, id::Id};

/// A column of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: Id,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    /// Creates a category holding the given clues in order
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id: Id::new(),
            title: title.into(),
            clues,
        }
    }

    /// Builds a category out of catalog songs
    ///
    /// The first `clue_count_per_category` songs become clues, titled after
    /// the song, worth `(index + 1) * point_value_step` points. When fewer
    /// songs are available the category comes out short.
    pub fn from_songs<I>(title: impl Into<String>, songs: I, config: &RoundConfig) -> Self
    where
        I: IntoIterator<Item = Song>,
    {
        let clues = songs
            .into_iter()
            .take(config.clue_count_per_category)
            .enumerate()
            .map(|(index, song)| {
                Clue::new(song.title.clone(), song, config.expected_point_value(index))
            })
            .collect_vec();

        Self::new(title, clues)
    }

    /// Returns the category's unique identifier
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the category title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the clues in board order
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// A category is done once every clue in it is done
    pub fn is_done(&self) -> bool {
        self.clues.iter().all(Clue::is_done)
    }

    pub(crate) fn clue_at_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }
}
