use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info, warn};

use crate::config::AudioSettings;

use super::queue::{PlayQueue, PlaybackQueue};
use super::sink::create_sink;
use super::types::{AudioCmd, AudioError, LoopMode, PlaybackState, QueueHandle};

/// State owned by the audio thread.
struct Engine {
    stream: OutputStream,
    settings: AudioSettings,
    autoplay: bool,
    queue: PlayQueue,
    loop_mode: LoopMode,
    sink: Option<Sink>,
    paused: bool,
    // Start of the current play stretch, and time accumulated before it.
    started_at: Option<Instant>,
    accumulated: Duration,
    shared: QueueHandle,
}

impl Engine {
    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn state(&self) -> PlaybackState {
        match (&self.sink, self.paused) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), true) => PlaybackState::Paused,
            (Some(_), false) => PlaybackState::Playing,
        }
    }

    /// Push the current queue state to the UI handle.
    fn publish(&self) {
        if let Ok(mut info) = self.shared.lock() {
            info.sync_queue(&self.queue);
            info.elapsed = self.elapsed();
            info.state = self.state();
            info.loop_mode = self.loop_mode;
        }
    }

    /// Start the entry at `pos`. Entries that cannot be opened are skipped in
    /// queue order; gives up after one pass.
    fn play_at(&mut self, pos: usize) {
        let mut pos = pos;
        for _ in 0..self.queue.len() {
            let Some(track) = self.queue.jump(pos).cloned() else {
                break;
            };
            match create_sink(&self.stream, &track) {
                Ok(new_sink) => {
                    info!(title = %track.title, position = pos, "playing");
                    self.swap_in(new_sink);
                    return;
                }
                Err(e) => {
                    warn!(error = %e, "skipping unplayable queue entry");
                    match self.queue.next_position(LoopMode::NoLoop) {
                        Some(next) => pos = next,
                        None => break,
                    }
                }
            }
        }
        self.stop();
    }

    /// Replace the current sink with `new_sink`, crossfading when something is
    /// audible.
    fn swap_in(&mut self, new_sink: Sink) {
        let crossfade_ms = self.settings.crossfade_ms;
        let crossfade_steps = self.settings.crossfade_steps.max(1);
        new_sink.set_volume(1.0);

        if let Some(old_sink) = self.sink.take() {
            if !self.paused && crossfade_ms > 0 {
                old_sink.set_volume(1.0);
                new_sink.set_volume(0.0);
                new_sink.play();

                // Fade volumes in a short blocking loop; audio keeps running
                // in rodio's mixer thread.
                for step in 1..=crossfade_steps {
                    let t = (step as f32) / (crossfade_steps as f32);
                    old_sink.set_volume(1.0 - t);
                    new_sink.set_volume(t);
                    thread::sleep(Duration::from_millis(
                        (crossfade_ms / crossfade_steps).max(1),
                    ));
                }
            }
            old_sink.stop();
        }

        new_sink.play();
        self.sink = Some(new_sink);
        self.paused = false;
        self.started_at = Some(Instant::now());
        self.accumulated = Duration::ZERO;
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    fn play_pause(&mut self) {
        let Some(s) = self.sink.as_ref() else {
            let start = self.queue.position().unwrap_or(0);
            if start < self.queue.len() {
                self.play_at(start);
            }
            return;
        };

        if self.paused {
            s.play();
            self.paused = false;
            self.started_at = Some(Instant::now());
        } else {
            s.pause();
            self.paused = true;
            if let Some(st) = self.started_at.take() {
                self.accumulated += st.elapsed();
            }
        }
    }

    fn handle(&mut self, cmd: AudioCmd) {
        debug!(?cmd, "audio command");
        match cmd {
            AudioCmd::Append(track) => {
                self.queue.append(track);
                if self.autoplay && self.sink.is_none() {
                    self.play_at(self.queue.len() - 1);
                }
            }
            AudioCmd::PlayPause => self.play_pause(),
            AudioCmd::Stop => self.stop(),
            AudioCmd::Next => {
                if let Some(pos) = self.queue.next_position(self.loop_mode) {
                    self.play_at(pos);
                }
            }
            AudioCmd::Prev => {
                if let Some(pos) = self.queue.prev_position(self.loop_mode) {
                    self.play_at(pos);
                }
            }
            AudioCmd::Clear => {
                self.stop();
                self.queue.clear();
            }
            AudioCmd::SetLoopMode(m) => self.loop_mode = m,
            AudioCmd::Quit { .. } => {}
        }
    }

    /// Advance when the current sink has drained.
    fn tick(&mut self) {
        let finished = matches!(self.sink.as_ref(), Some(s) if !self.paused && s.empty());
        if !finished {
            return;
        }
        match self.queue.after_finish(self.loop_mode) {
            Some(pos) => self.play_at(pos),
            None => {
                self.stop();
                self.queue.rewind();
            }
        }
    }

    fn fade_out(&self, fade_out_ms: u64) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        if fade_out_ms > 0 && !self.paused {
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(1.0 - t);
                thread::sleep(Duration::from_millis(step_ms));
            }
        }
        sink.set_volume(0.0);
        sink.stop();
    }
}

fn open_stream() -> Result<OutputStream, AudioError> {
    let mut stream = OutputStreamBuilder::open_default_stream()?;
    // rodio logs to stderr when OutputStream is dropped, which would draw
    // over the TUI.
    stream.log_on_drop(false);
    Ok(stream)
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    shared: QueueHandle,
    settings: AudioSettings,
    autoplay: bool,
    loop_mode: LoopMode,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match open_stream() {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "audio disabled");
                return;
            }
        };

        let mut engine = Engine {
            stream,
            settings,
            autoplay,
            queue: PlayQueue::default(),
            loop_mode,
            sink: None,
            paused: true,
            started_at: None,
            accumulated: Duration::ZERO,
            shared,
        };
        engine.publish();

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    engine.fade_out(fade_out_ms);
                    engine.stop();
                    engine.publish();
                    break;
                }
                Ok(cmd) => engine.handle(cmd),
                Err(RecvTimeoutError::Timeout) => engine.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
            engine.publish();
        }
    })
}
