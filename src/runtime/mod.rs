use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::browse::Browser;
use crate::library::TrackCollection;
use crate::logging;

mod event_loop;
mod settings;
mod startup;
mod terminal;

/// Browse a music library by genre, artist and track, and queue tracks for playback.
#[derive(Parser, Debug)]
#[command(name = "cascade")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Library directory (defaults to the current directory)
    dir: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (settings, settings_err) = settings::load_settings(args.config.as_deref());

    if args.print_config {
        if let Some(e) = settings_err {
            eprintln!("cascade: {e}; showing defaults");
        }
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let _log_guard = logging::init(&settings.logging)?;
    if let Some(e) = settings_err {
        warn!(error = %e, "config not applied, using defaults");
    }

    let dir = match args.dir {
        Some(d) => d,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from("Music")),
    };
    info!(dir = %dir.display(), "starting");

    let mut collection = TrackCollection::new(startup::scan_library(&dir, &settings.library));
    if collection.is_empty() {
        warn!(dir = %dir.display(), "no audio files found");
    }
    let mut audio_player = AudioPlayer::new(settings.audio.clone(), &settings.playback);
    let mut app = App::new(Browser::new(&mut collection));
    app.loop_mode = settings.playback.loop_mode.into();
    app.set_library_dir(dir.display().to_string());
    app.set_queue_handle(audio_player.queue_handle());

    let (guard, mut terminal) = terminal::TerminalGuard::enter()?;

    let mut state = event_loop::EventLoopState::default();
    let mut services = event_loop::Services {
        settings: &settings,
        audio_player: &mut audio_player,
        collection: &mut collection,
        library_dir: &dir,
    };
    let run_result = event_loop::run(&mut terminal, &mut app, &mut services, &mut state);

    drop(guard);

    info!("shutting down");
    run_result
}
