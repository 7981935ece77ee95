//! Three-pane progressive narrowing: genre, then artist, then track.

use std::sync::Arc;

use tracing::debug;

use crate::library::Track;

use super::error::BrowseError;
use super::index::GenreIndex;
use super::view::PaneKind;

/// How far the user has narrowed the library.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CascadeState {
    /// Only the genre pane is populated.
    Genre,
    /// A genre is active; the artist pane lists its artists.
    Artist,
    /// An artist is active; the track pane lists its tracks.
    TrackReady,
}

/// Selection state for the genre / artist / track panes.
///
/// Pane contents are materialized on each transition and kept until the next
/// one, so a track is resolved against exactly the list that was displayed.
#[derive(Debug, Default)]
pub struct CascadeSelector {
    index: GenreIndex,
    genres: Vec<String>,
    active_genre: Option<usize>,
    artists: Vec<String>,
    active_artist: Option<usize>,
    tracks: Vec<Arc<Track>>,
}

impl CascadeSelector {
    /// Replace the index and go back to the genre pane with nothing selected.
    pub fn reset(&mut self, index: GenreIndex) {
        self.genres = index.genres().into_iter().map(str::to_string).collect();
        self.index = index;
        self.active_genre = None;
        self.clear_artists();
    }

    fn clear_artists(&mut self) {
        self.artists.clear();
        self.active_artist = None;
        self.tracks.clear();
    }

    pub fn state(&self) -> CascadeState {
        match (self.active_genre, self.active_artist) {
            (Some(_), Some(_)) => CascadeState::TrackReady,
            (Some(_), None) => CascadeState::Artist,
            _ => CascadeState::Genre,
        }
    }

    pub fn index(&self) -> &GenreIndex {
        &self.index
    }

    /// Genre pane contents.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Artist pane contents; empty until a genre is selected.
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    /// Track pane contents, in display order; empty until an artist is selected.
    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    pub fn active_genre_row(&self) -> Option<usize> {
        self.active_genre
    }

    pub fn active_artist_row(&self) -> Option<usize> {
        self.active_artist
    }

    pub fn active_genre(&self) -> Option<&str> {
        self.active_genre.map(|i| self.genres[i].as_str())
    }

    pub fn active_artist(&self) -> Option<&str> {
        self.active_artist.map(|i| self.artists[i].as_str())
    }

    /// Make `genre` active and list its artists. Any artist selection and the
    /// track pane are cleared, even when the new genre has an artist of the
    /// same name.
    pub fn select_genre(&mut self, genre: &str) -> Result<(), BrowseError> {
        let row = self
            .genres
            .iter()
            .position(|g| g == genre)
            .ok_or_else(|| BrowseError::UnknownGenre(genre.to_string()))?;
        self.activate_genre(row);
        Ok(())
    }

    /// Same as [`select_genre`](Self::select_genre), addressed by row.
    pub fn select_genre_at(&mut self, row: usize) -> Result<(), BrowseError> {
        let genre = self
            .genres
            .get(row)
            .cloned()
            .ok_or(BrowseError::RowOutOfRange {
                pane: PaneKind::Genre,
                index: row,
                len: self.genres.len(),
            })?;
        self.select_genre(&genre)
    }

    fn activate_genre(&mut self, row: usize) {
        self.clear_artists();
        self.active_genre = Some(row);
        let genre = &self.genres[row];
        self.artists = self
            .index
            .artists(genre)
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect();
        debug!(genre = %genre, artists = self.artists.len(), "genre selected");
    }

    /// Make `artist` active under the active genre and list its tracks.
    pub fn select_artist(&mut self, artist: &str) -> Result<(), BrowseError> {
        let genre = self.active_genre().ok_or(BrowseError::NoActiveGenre)?;
        let row = self
            .artists
            .iter()
            .position(|a| a == artist)
            .ok_or_else(|| BrowseError::UnknownArtist {
                genre: genre.to_string(),
                artist: artist.to_string(),
            })?;
        self.activate_artist(row);
        Ok(())
    }

    /// Same as [`select_artist`](Self::select_artist), addressed by row.
    pub fn select_artist_at(&mut self, row: usize) -> Result<(), BrowseError> {
        if self.active_genre.is_none() {
            return Err(BrowseError::NoActiveGenre);
        }
        let artist = self
            .artists
            .get(row)
            .cloned()
            .ok_or(BrowseError::RowOutOfRange {
                pane: PaneKind::Artist,
                index: row,
                len: self.artists.len(),
            })?;
        self.select_artist(&artist)
    }

    fn activate_artist(&mut self, row: usize) {
        let Some(genre_row) = self.active_genre else {
            return;
        };
        let genre = &self.genres[genre_row];
        let artist = &self.artists[row];
        self.active_artist = Some(row);
        self.tracks = self
            .index
            .tracks_by_title(genre, artist)
            .unwrap_or_default();
        debug!(genre = %genre, artist = %artist, tracks = self.tracks.len(), "artist selected");
    }

    /// Resolve track pane row `row`. Pane contents and active rows are left
    /// untouched.
    pub fn choose_track(&self, row: usize) -> Result<Arc<Track>, BrowseError> {
        if self.active_artist.is_none() {
            return Err(BrowseError::NoActiveArtist);
        }
        self.tracks
            .get(row)
            .cloned()
            .ok_or(BrowseError::TrackOutOfRange {
                index: row,
                len: self.tracks.len(),
            })
    }
}
