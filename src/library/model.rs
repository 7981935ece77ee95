use std::path::PathBuf;
use std::time::Duration;

/// Genre key used when a track carries no genre (or an empty one).
pub const UNKNOWN_GENRE: &str = "Unknown";

/// A single track record as read from the library.
///
/// `artist` is kept verbatim: an untagged file has an empty artist and is
/// grouped under the empty key. Only `genre` has a fallback, see
/// [`Track::genre_key`].
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub genre: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

impl Track {
    /// The genre this track is grouped under.
    pub fn genre_key(&self) -> &str {
        match self.genre.as_deref() {
            Some(g) if !g.is_empty() => g,
            _ => UNKNOWN_GENRE,
        }
    }
}
