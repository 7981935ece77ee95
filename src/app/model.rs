//! Application model: the browser plus keyboard focus, per-pane cursors and
//! the status line.

use crate::audio::{LoopMode, PlaybackQueue, QueueHandle};
use crate::browse::{BrowseError, Browser, PaneKind};

/// The main application model.
pub struct App {
    pub browser: Browser,
    /// Pane receiving cursor movement and activation.
    pub focus: PaneKind,
    cursors: [usize; 3],

    pub queue_handle: Option<QueueHandle>,
    pub loop_mode: LoopMode,
    pub status: Option<String>,
    pub library_dir: Option<String>,
}

fn slot(kind: PaneKind) -> usize {
    match kind {
        PaneKind::Genre => 0,
        PaneKind::Artist => 1,
        PaneKind::Track => 2,
    }
}

impl App {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            focus: PaneKind::Genre,
            cursors: [0; 3],
            queue_handle: None,
            loop_mode: LoopMode::default(),
            status: None,
            library_dir: None,
        }
    }

    /// Attach the shared queue snapshot so the UI can show the play queue.
    pub fn set_queue_handle(&mut self, h: QueueHandle) {
        self.queue_handle = Some(h);
    }

    /// Record the library root shown in the status line.
    pub fn set_library_dir(&mut self, dir: String) {
        self.library_dir = Some(dir);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn cycle_loop_mode(&mut self) {
        self.loop_mode = self.loop_mode.cycle();
    }

    /// Apply pending library changes. A rebuild drops the selection, so the
    /// cursors go back to the top of the genre pane.
    pub fn sync(&mut self) -> bool {
        if self.browser.sync() == 0 {
            return false;
        }
        self.focus = PaneKind::Genre;
        self.cursors = [0; 3];
        true
    }

    /// Cursor row within `kind`.
    pub fn cursor(&self, kind: PaneKind) -> usize {
        self.cursors[slot(kind)]
    }

    pub fn pane_len(&self, kind: PaneKind) -> usize {
        let selector = self.browser.selector();
        match kind {
            PaneKind::Genre => selector.genres().len(),
            PaneKind::Artist => selector.artists().len(),
            PaneKind::Track => selector.tracks().len(),
        }
    }

    fn set_cursor(&mut self, row: usize) {
        self.cursors[slot(self.focus)] = row;
    }

    /// Move the cursor down in the focused pane, wrapping to the top.
    pub fn next(&mut self) {
        let len = self.pane_len(self.focus);
        if len > 0 {
            self.set_cursor((self.cursor(self.focus) + 1) % len);
        }
    }

    /// Move the cursor up in the focused pane, wrapping to the bottom.
    pub fn prev(&mut self) {
        let len = self.pane_len(self.focus);
        if len > 0 {
            let cur = self.cursor(self.focus);
            self.set_cursor(if cur == 0 { len - 1 } else { cur - 1 });
        }
    }

    pub fn top(&mut self) {
        self.set_cursor(0);
    }

    pub fn bottom(&mut self) {
        let len = self.pane_len(self.focus);
        self.set_cursor(len.saturating_sub(1));
    }

    /// Move focus one pane to the left. Selections are kept.
    pub fn focus_left(&mut self) {
        self.focus = match self.focus {
            PaneKind::Genre | PaneKind::Artist => PaneKind::Genre,
            PaneKind::Track => PaneKind::Artist,
        };
    }

    /// Activate the row under the cursor in the focused pane.
    ///
    /// Genre and artist rows narrow the next pane and move focus into it.
    /// Track rows are appended to `queue`. Activating an empty pane does
    /// nothing.
    pub fn activate(&mut self, queue: &mut dyn PlaybackQueue) -> Result<(), BrowseError> {
        if self.pane_len(self.focus) == 0 {
            return Ok(());
        }
        let row = self.cursor(self.focus);
        match self.focus {
            PaneKind::Genre => {
                self.browser.select_genre_at(row)?;
                self.cursors[slot(PaneKind::Artist)] = 0;
                self.cursors[slot(PaneKind::Track)] = 0;
                self.focus = PaneKind::Artist;
            }
            PaneKind::Artist => {
                self.browser.select_artist_at(row)?;
                self.cursors[slot(PaneKind::Track)] = 0;
                self.focus = PaneKind::Track;
            }
            PaneKind::Track => {
                let track = self.browser.choose_track(row, queue)?;
                self.set_status(format!("Queued: {}", track.title));
            }
        }
        Ok(())
    }
}
