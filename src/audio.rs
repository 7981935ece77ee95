//! Playback queue and the rodio audio thread that plays it.

mod player;
mod queue;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use queue::PlaybackQueue;
pub use types::{AudioCmd, LoopMode, PlaybackState, QueueHandle, QueueInfo};

#[cfg(test)]
pub use queue::PlayQueue;
