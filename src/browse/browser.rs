use std::sync::Arc;

use tracing::info;

use crate::audio::PlaybackQueue;
use crate::library::{CollectionEvent, CollectionSubscription, Track, TrackCollection};

use super::cascade::CascadeSelector;
use super::error::BrowseError;
use super::index::GenreIndex;
use super::view::{self, PaneView};

/// The genre / artist / track browser bound to a track collection.
pub struct Browser {
    subscription: CollectionSubscription,
    selector: CascadeSelector,
    rebuilds: u64,
}

impl Browser {
    /// Subscribe to `collection` and build the initial index from its
    /// current contents.
    pub fn new(collection: &mut TrackCollection) -> Self {
        let subscription = collection.subscribe();
        let mut browser = Self {
            subscription,
            selector: CascadeSelector::default(),
            rebuilds: 0,
        };
        browser.rebuild(&collection.tracks());
        browser
    }

    /// Apply every pending collection change. Each one rebuilds the index
    /// from scratch and drops the current selection. Returns the number of
    /// rebuilds.
    pub fn sync(&mut self) -> usize {
        let mut rebuilt = 0;
        while let Some(CollectionEvent::Changed(tracks)) = self.subscription.try_next() {
            self.rebuild(&tracks);
            rebuilt += 1;
        }
        rebuilt
    }

    fn rebuild(&mut self, tracks: &[Arc<Track>]) {
        let index = GenreIndex::build(tracks);
        self.rebuilds += 1;
        info!(
            tracks = index.len(),
            genres = index.genres().len(),
            rebuild = self.rebuilds,
            "genre index rebuilt"
        );
        self.selector.reset(index);
    }

    pub fn selector(&self) -> &CascadeSelector {
        &self.selector
    }

    pub fn select_genre_at(&mut self, row: usize) -> Result<(), BrowseError> {
        self.selector.select_genre_at(row)
    }

    pub fn select_artist_at(&mut self, row: usize) -> Result<(), BrowseError> {
        self.selector.select_artist_at(row)
    }

    /// Append the track shown at `row` of the track pane to `queue`.
    pub fn choose_track(
        &self,
        row: usize,
        queue: &mut dyn PlaybackQueue,
    ) -> Result<Arc<Track>, BrowseError> {
        let track = self.selector.choose_track(row)?;
        info!(title = %track.title, artist = %track.artist, "track queued");
        queue.append(Arc::clone(&track));
        Ok(track)
    }

    pub fn panes(&self) -> [PaneView; 3] {
        view::panes(&self.selector)
    }
}
