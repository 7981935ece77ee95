//! The ordered play queue and the positional rules for moving through it.

use std::sync::Arc;

use crate::library::Track;

use super::types::LoopMode;

/// Something tracks can be appended to for playback.
pub trait PlaybackQueue {
    fn append(&mut self, track: Arc<Track>);
}

/// Tracks queued for playback plus the position of the current entry.
#[derive(Debug, Default, Clone)]
pub struct PlayQueue {
    tracks: Vec<Arc<Track>>,
    position: Option<usize>,
    // Bumped on every change to the entries.
    revision: u64,
}

impl PlaybackQueue for PlayQueue {
    fn append(&mut self, track: Arc<Track>) {
        self.tracks.push(track);
        self.revision += 1;
    }
}

impl PlayQueue {
    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Changes whenever entries are added or removed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn current(&self) -> Option<&Arc<Track>> {
        self.position.and_then(|p| self.tracks.get(p))
    }

    /// Move to `pos`. Out-of-range positions leave the queue unchanged.
    pub fn jump(&mut self, pos: usize) -> Option<&Arc<Track>> {
        if pos < self.tracks.len() {
            self.position = Some(pos);
            self.tracks.get(pos)
        } else {
            None
        }
    }

    /// Forget the current position without touching the entries.
    pub fn rewind(&mut self) {
        self.position = None;
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.position = None;
        self.revision += 1;
    }

    /// Where playback continues when the current entry finishes on its own.
    ///
    /// `LoopOne` repeats the entry, `LoopAll` wraps, `NoLoop` ends after the
    /// last entry.
    pub fn after_finish(&self, mode: LoopMode) -> Option<usize> {
        let pos = self.position?;
        match mode {
            LoopMode::LoopOne => Some(pos),
            _ => self.forward_from(pos, mode),
        }
    }

    /// Target of a manual "next". Repeat-one does not pin manual skips.
    pub fn next_position(&self, mode: LoopMode) -> Option<usize> {
        match self.position {
            Some(pos) => self.forward_from(pos, mode),
            None if !self.tracks.is_empty() => Some(0),
            None => None,
        }
    }

    /// Target of a manual "previous".
    pub fn prev_position(&self, mode: LoopMode) -> Option<usize> {
        let pos = self.position?;
        if pos > 0 {
            Some(pos - 1)
        } else if mode == LoopMode::LoopAll && !self.tracks.is_empty() {
            Some(self.tracks.len() - 1)
        } else {
            None
        }
    }

    fn forward_from(&self, pos: usize, mode: LoopMode) -> Option<usize> {
        if pos + 1 < self.tracks.len() {
            Some(pos + 1)
        } else if mode == LoopMode::LoopAll && !self.tracks.is_empty() {
            Some(0)
        } else {
            None
        }
    }
}
