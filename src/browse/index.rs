//! Genre -> artist -> tracks grouping of a flat track list.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::library::Track;

/// Artist name -> tracks by that artist, in collection order.
pub type ArtistIndex = BTreeMap<String, Vec<Arc<Track>>>;

/// Genre name -> artists within that genre.
///
/// Keys iterate in ascending byte order, which is the order the genre and
/// artist panes display them in. Track buckets keep insertion order; sorting
/// by title happens only when a bucket is shown.
#[derive(Debug, Clone, Default)]
pub struct GenreIndex {
    genres: BTreeMap<String, ArtistIndex>,
    len: usize,
}

impl GenreIndex {
    /// Group `tracks` by genre key, then by artist verbatim.
    pub fn build(tracks: &[Arc<Track>]) -> Self {
        let mut genres: BTreeMap<String, ArtistIndex> = BTreeMap::new();
        for track in tracks {
            genres
                .entry(track.genre_key().to_string())
                .or_default()
                .entry(track.artist.clone())
                .or_default()
                .push(Arc::clone(track));
        }
        Self {
            genres,
            len: tracks.len(),
        }
    }

    /// Total number of tracks across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Genre keys, sorted ascending.
    pub fn genres(&self) -> Vec<&str> {
        self.genres.keys().map(String::as_str).collect()
    }

    pub fn artist_index(&self, genre: &str) -> Option<&ArtistIndex> {
        self.genres.get(genre)
    }

    /// Artist keys under `genre`, sorted ascending.
    pub fn artists(&self, genre: &str) -> Option<Vec<&str>> {
        self.artist_index(genre)
            .map(|artists| artists.keys().map(String::as_str).collect())
    }

    /// The bucket for `(genre, artist)` in collection order.
    pub fn tracks(&self, genre: &str, artist: &str) -> Option<&[Arc<Track>]> {
        self.artist_index(genre)?.get(artist).map(Vec::as_slice)
    }

    /// The bucket for `(genre, artist)` sorted by title. Equal titles keep
    /// their collection order.
    pub fn tracks_by_title(&self, genre: &str, artist: &str) -> Option<Vec<Arc<Track>>> {
        let mut sorted = self.tracks(genre, artist)?.to_vec();
        sorted.sort_by(|a, b| a.title.cmp(&b.title));
        Some(sorted)
    }
}
