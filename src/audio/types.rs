//! Audio-related small types and handles.
//!
//! This module defines common enums and type aliases used by the
//! audio subsystem (looping mode, commands, queue snapshot and handle).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

use crate::library::Track;

use super::queue::PlayQueue;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Stop after the last queued track.
    #[default]
    NoLoop,
    /// Wrap around to the start of the queue.
    LoopAll,
    /// Repeat the current track when it ends.
    LoopOne,
}

impl LoopMode {
    /// `NoLoop -> LoopAll -> LoopOne -> NoLoop`.
    pub fn cycle(self) -> Self {
        match self {
            LoopMode::NoLoop => LoopMode::LoopAll,
            LoopMode::LoopAll => LoopMode::LoopOne,
            LoopMode::LoopOne => LoopMode::NoLoop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoopMode::NoLoop => "No-loop",
            LoopMode::LoopAll => "Loop-around",
            LoopMode::LoopOne => "Repeat-one",
        }
    }
}

/// The playback state of the audio thread.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Add a track at the end of the queue.
    Append(Arc<Track>),
    /// Resume, pause, or start the queue when stopped.
    PlayPause,
    /// Stop playback; the queue is kept.
    Stop,
    /// Skip to the next queue entry.
    Next,
    /// Go back to the previous queue entry.
    Prev,
    /// Stop playback and empty the queue.
    Clear,
    /// Set the loop mode used for auto-advance and next/prev wrapping.
    SetLoopMode(LoopMode),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Queue snapshot published by the audio thread for the UI.
#[derive(Debug, Clone, Default)]
pub struct QueueInfo {
    pub tracks: Vec<Arc<Track>>,
    /// Position of the current entry in `tracks`.
    pub position: Option<usize>,
    /// Elapsed playback time for the current entry.
    pub elapsed: Duration,
    pub state: PlaybackState,
    pub loop_mode: LoopMode,
    /// Queue revision `tracks` was copied at.
    pub revision: u64,
}

impl QueueInfo {
    pub fn current(&self) -> Option<&Arc<Track>> {
        self.position.and_then(|p| self.tracks.get(p))
    }

    /// Copy the entries and position of `queue`. The entry list is only
    /// copied when the queue changed since the last sync.
    pub fn sync_queue(&mut self, queue: &PlayQueue) {
        if self.revision != queue.revision() {
            self.tracks = queue.tracks().to_vec();
            self.revision = queue.revision();
        }
        self.position = queue.position();
    }
}

pub type QueueHandle = Arc<Mutex<QueueInfo>>;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },

    #[error("no audio output device: {0}")]
    Output(#[from] rodio::StreamError),
}

impl From<crate::config::LoopModeSetting> for LoopMode {
    fn from(setting: crate::config::LoopModeSetting) -> Self {
        use crate::config::LoopModeSetting;
        match setting {
            LoopModeSetting::NoLoop => LoopMode::NoLoop,
            LoopModeSetting::LoopAll => LoopMode::LoopAll,
            LoopModeSetting::LoopOne => LoopMode::LoopOne,
        }
    }
}
