use thiserror::Error;

use super::view::PaneKind;

/// Cascade transitions requested out of order or against rows that do not
/// exist. The browser never produces these on its own; they point at a caller
/// that is out of sync with what is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error("no genre is active")]
    NoActiveGenre,

    #[error("no artist is active")]
    NoActiveArtist,

    #[error("genre {0:?} is not in the index")]
    UnknownGenre(String),

    #[error("artist {artist:?} is not listed under genre {genre:?}")]
    UnknownArtist { genre: String, artist: String },

    #[error("track row {index} is out of range ({len} tracks listed)")]
    TrackOutOfRange { index: usize, len: usize },

    #[error("{pane} row {index} is out of range ({len} rows listed)")]
    RowOutOfRange {
        pane: PaneKind,
        index: usize,
        len: usize,
    },
}
