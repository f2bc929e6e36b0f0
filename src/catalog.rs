//! Building clue sets from a music catalog
//!
//! The engine does not talk to any catalog service itself. A content
//! provider implements [`Catalog`], resolving an artist name to the
//! artist's top songs, and [`clue_set_from_artists`] turns those into a
//! board.

use itertools::Itertools;
use tracing::debug;

use crate::{
    board::{category::Category, clue_set::ClueSet, media::Song},
    config::RoundConfig,
};

/// An artist resolved by the catalog together with their top songs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSongs {
    /// The artist's name as the catalog spells it
    pub artist_name: String,
    /// The artist's most popular songs, most popular first
    pub top_songs: Vec<Song>,
}

/// A source of songs for categories
pub trait Catalog {
    /// Looks up an artist and their top songs
    ///
    /// Returns `None` when the artist cannot be found or the lookup fails.
    fn top_songs(&self, artist: &str) -> Option<ArtistSongs>;
}

/// Builds a clue set with one category per artist
///
/// Artists are looked up in order. Those the catalog cannot resolve are
/// skipped, and lookups stop once `category_count` categories exist. Each
/// category is named after the resolved artist and filled by
/// [`Category::from_songs`].
///
/// The result is not validated: an artist with too few songs yields a short
/// category, and too few resolvable artists yield too few categories.
pub fn clue_set_from_artists<'a, C, I>(catalog: &C, artists: I, config: &RoundConfig) -> ClueSet
where
    C: Catalog + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let categories = artists
        .into_iter()
        .map(str::trim)
        .filter(|artist| !artist.is_empty())
        .filter_map(|artist| {
            let found = catalog.top_songs(artist);
            if found.is_none() {
                debug!(artist, "catalog could not resolve artist");
            }
            found
        })
        .take(config.category_count)
        .map(|found| Category::from_songs(found.artist_name, found.top_songs, config))
        .collect_vec();

    ClueSet::new(categories)
}
