//! The ordered track collection and its change notifications.
//!
//! Subscribers receive a `CollectionEvent` over an mpsc channel for every
//! mutation. Delivery is drained by the owner's event loop, which keeps all
//! rebuild work on the UI thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::debug;

use super::model::Track;

/// An immutable snapshot of the collection at the time of a change.
pub type TrackList = Arc<[Arc<Track>]>;

#[derive(Debug, Clone)]
pub enum CollectionEvent {
    /// The collection was mutated; carries the full new contents.
    Changed(TrackList),
}

/// Receiving side of a collection subscription.
pub struct CollectionSubscription {
    rx: Receiver<CollectionEvent>,
}

impl CollectionSubscription {
    /// Return the next pending event without blocking.
    pub fn try_next(&self) -> Option<CollectionEvent> {
        match self.rx.try_recv() {
            Ok(ev) => Some(ev),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// The ordered track collection.
#[derive(Default)]
pub struct TrackCollection {
    tracks: TrackList,
    subscribers: Vec<Sender<CollectionEvent>>,
}

impl TrackCollection {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks.into_iter().map(Arc::new).collect(),
            subscribers: Vec::new(),
        }
    }

    /// Current contents, in collection order.
    pub fn tracks(&self) -> TrackList {
        self.tracks.clone()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Register a listener. It stays registered for as long as the returned
    /// subscription is alive.
    pub fn subscribe(&mut self) -> CollectionSubscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        CollectionSubscription { rx }
    }

    /// Replace the whole collection (e.g. after a rescan).
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks.into_iter().map(Arc::new).collect();
        self.notify();
    }

    /// Append tracks at the end of the collection.
    pub fn extend(&mut self, tracks: Vec<Track>) {
        let mut all: Vec<Arc<Track>> = self.tracks.to_vec();
        all.extend(tracks.into_iter().map(Arc::new));
        self.tracks = all.into();
        self.notify();
    }

    pub fn clear(&mut self) {
        self.tracks = Arc::from(Vec::new());
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.tracks.clone();
        // Dropped subscriptions show up as send errors; forget them.
        self.subscribers
            .retain(|tx| tx.send(CollectionEvent::Changed(snapshot.clone())).is_ok());
        debug!(
            tracks = snapshot.len(),
            subscribers = self.subscribers.len(),
            "collection changed"
        );
    }
}
