use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::config::LibrarySettings;
use crate::library::{Track, scan};

/// Scan `dir` and log how long it took.
pub fn scan_library(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let started = Instant::now();
    let tracks = scan(dir, settings);
    info!(
        dir = %dir.display(),
        tracks = tracks.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "library scanned"
    );
    tracks
}
