//! Media behind a clue
//!
//! The engine never plays or inspects songs. A [`Song`] is carried along
//! with its clue so the presentation layer can hand it to a player.

use serde::{Deserialize, Serialize};

/// A catalog track backing a clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Identifier of the track in the music catalog
    pub catalog_id: String,
    /// Track title as reported by the catalog
    pub title: String,
    /// Name of the performing artist
    pub artist_name: String,
}

impl Song {
    /// Creates a song reference from catalog data
    pub fn new(
        catalog_id: impl Into<String>,
        title: impl Into<String>,
        artist_name: impl Into<String>,
    ) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            title: title.into(),
            artist_name: artist_name.into(),
        }
    }
}
