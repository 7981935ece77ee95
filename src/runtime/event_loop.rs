use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::{error, info};

use crate::app::App;
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config;
use crate::library::TrackCollection;
use crate::ui;

use super::startup::scan_library;
use super::terminal::Tui;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Everything the key handlers act on besides the app model.
pub struct Services<'a> {
    pub settings: &'a config::Settings,
    pub audio_player: &'a mut AudioPlayer,
    pub collection: &'a mut TrackCollection,
    pub library_dir: &'a Path,
}

/// Main terminal event loop: applies library changes, draws, and handles
/// input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Tui,
    app: &mut App,
    services: &mut Services<'_>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Rebuilds land before the next key is read.
        app.sync();

        terminal.draw(|f| ui::draw(f, app, &services.settings.ui))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, services, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn send(services: &Services<'_>, cmd: AudioCmd) {
    if let Err(e) = services.audio_player.send(cmd) {
        error!(error = %e, "audio thread is not running");
    }
}

/// Handle one key press. Returns `true` when the app should quit.
fn handle_key_event(
    key: KeyEvent,
    app: &mut App,
    services: &mut Services<'_>,
    state: &mut EventLoopState,
) -> bool {
    let was_gg = std::mem::take(&mut state.pending_gg);

    match key.code {
        KeyCode::Char('q') => {
            services
                .audio_player
                .quit_softly(Duration::from_millis(services.settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') => {
            if was_gg {
                app.top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.bottom(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => {
            if let Err(e) = app.activate(&mut *services.audio_player) {
                error!(error = %e, "selection out of sync with the browser");
                app.set_status(format!("Error: {e}"));
            }
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => app.focus_left(),
        KeyCode::Char(' ') | KeyCode::Char('p') => send(services, AudioCmd::PlayPause),
        KeyCode::Char('n') => send(services, AudioCmd::Next),
        KeyCode::Char('N') => send(services, AudioCmd::Prev),
        KeyCode::Char('x') => send(services, AudioCmd::Stop),
        KeyCode::Char('c') => {
            send(services, AudioCmd::Clear);
            app.set_status("Queue cleared");
        }
        KeyCode::Char('r') => {
            app.cycle_loop_mode();
            send(services, AudioCmd::SetLoopMode(app.loop_mode));
        }
        KeyCode::Char('R') => {
            let tracks = scan_library(services.library_dir, &services.settings.library);
            services.collection.replace(tracks);
            info!(tracks = services.collection.len(), "library rescanned");
            app.set_status(format!("Rescanned {} tracks", services.collection.len()));
        }
        _ => {}
    }

    false
}
