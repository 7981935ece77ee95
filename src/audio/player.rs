use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::warn;

use crate::config::{AudioSettings, PlaybackSettings};
use crate::library::Track;

use super::queue::PlaybackQueue;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, QueueHandle, QueueInfo};

/// Front end of the audio thread. Owns the command channel and the shared
/// queue snapshot.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    queue: QueueHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(audio_settings: AudioSettings, playback: &PlaybackSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let loop_mode = playback.loop_mode.into();
        let queue: QueueHandle = Arc::new(Mutex::new(QueueInfo {
            loop_mode,
            ..QueueInfo::default()
        }));

        let audio_handle = spawn_audio_thread(
            rx,
            queue.clone(),
            audio_settings,
            playback.autoplay,
            loop_mode,
        );

        Self {
            tx,
            queue,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn queue_handle(&self) -> QueueHandle {
        self.queue.clone()
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Ask the audio thread to fade out and wait for it to finish.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl PlaybackQueue for AudioPlayer {
    fn append(&mut self, track: Arc<Track>) {
        if let Err(e) = self.send(AudioCmd::Append(track)) {
            warn!(error = %e, "audio thread is gone; track not queued");
        }
    }
}
